// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Processing-time matrix for permutation flow-shop instances

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum jobs/machines accepted from problem input
pub const MIN_JOBS: usize = 2;
pub const MIN_MACHINES: usize = 2;

/// Errors from matrix construction and problem-input parsing
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("number of jobs must be at least {MIN_JOBS}, got {0}")]
    TooFewJobs(usize),
    #[error("number of machines must be at least {MIN_MACHINES}, got {0}")]
    TooFewMachines(usize),
    #[error("processing times cannot be empty")]
    Empty,
    #[error("expected {expected} rows of data, got {actual}")]
    RowCountMismatch { expected: usize, actual: usize },
    #[error("row {row} has {actual} entries, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("invalid processing time '{value}' at row {row}")]
    InvalidCell { row: usize, value: String },
}

/// A jobs × machines grid of non-negative processing times.
///
/// Rows are jobs, columns are machines; dimensions are fixed at
/// construction and every row has the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatrix {
    pub jobs: usize,
    pub machines: usize,
    pub processing_times: Vec<Vec<u32>>,
}

impl JobMatrix {
    /// Build a matrix from pre-parsed rows, validating shape.
    pub fn new(
        jobs: usize,
        machines: usize,
        processing_times: Vec<Vec<u32>>,
    ) -> Result<Self, MatrixError> {
        if jobs < MIN_JOBS {
            return Err(MatrixError::TooFewJobs(jobs));
        }
        if machines < MIN_MACHINES {
            return Err(MatrixError::TooFewMachines(machines));
        }
        if processing_times.len() != jobs {
            return Err(MatrixError::RowCountMismatch {
                expected: jobs,
                actual: processing_times.len(),
            });
        }
        for (row, times) in processing_times.iter().enumerate() {
            if times.len() != machines {
                return Err(MatrixError::RowWidthMismatch {
                    row,
                    expected: machines,
                    actual: times.len(),
                });
            }
        }
        Ok(Self {
            jobs,
            machines,
            processing_times,
        })
    }

    /// Parse the custom problem-input format: one whitespace-separated
    /// row of integers per job.
    pub fn parse(jobs: usize, machines: usize, text: &str) -> Result<Self, MatrixError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(MatrixError::Empty);
        }

        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() != jobs {
            return Err(MatrixError::RowCountMismatch {
                expected: jobs,
                actual: lines.len(),
            });
        }

        let mut processing_times = Vec::with_capacity(jobs);
        for (row, line) in lines.iter().enumerate() {
            let mut times = Vec::with_capacity(machines);
            for value in line.split_whitespace() {
                let parsed = value.parse::<u32>().map_err(|_| MatrixError::InvalidCell {
                    row,
                    value: value.to_string(),
                })?;
                times.push(parsed);
            }
            if times.len() != machines {
                return Err(MatrixError::RowWidthMismatch {
                    row,
                    expected: machines,
                    actual: times.len(),
                });
            }
            processing_times.push(times);
        }

        Self::new(jobs, machines, processing_times)
    }

    /// Parse a matrix whose dimensions are taken from the text itself:
    /// row count = jobs, first-row width = machines.
    pub fn parse_inferred(text: &str) -> Result<Self, MatrixError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(MatrixError::Empty);
        }
        let jobs = trimmed.lines().count();
        let machines = trimmed
            .lines()
            .next()
            .map(|l| l.split_whitespace().count())
            .unwrap_or(0);
        Self::parse(jobs, machines, trimmed)
    }

    /// Total processing time per job, in row order.
    pub fn total_processing_times(&self) -> Vec<u64> {
        self.processing_times
            .iter()
            .map(|row| row.iter().map(|&t| u64::from(t)).sum())
            .collect()
    }

    /// Average total processing time across jobs.
    pub fn average_processing_time(&self) -> f64 {
        let total: u64 = self.total_processing_times().iter().sum();
        total as f64 / self.jobs as f64
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
