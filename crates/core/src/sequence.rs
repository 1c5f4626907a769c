// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job permutations returned by solvers
//!
//! Solver backends disagree on indexing: the InfinityQ path returns
//! 1-based sequences while the classical solver returns 0-based ones.
//! The wire contract carries no convention flag, so normalization uses
//! the contains-zero heuristic: a sequence with a `0` in it is taken to
//! be 0-indexed already, anything else is shifted down by one. A
//! 1-indexed permutation always contains a `1` and never a `0`, so the
//! heuristic is sound for valid permutations; garbage input is caught by
//! the validation that follows.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from permutation normalization and validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("sequence has {actual} entries, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("job id {id} out of range for {jobs} jobs")]
    OutOfRange { id: i64, jobs: usize },
    #[error("job {job} appears more than once")]
    Duplicate { job: usize },
}

/// A validated, 0-indexed job permutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSequence(Vec<usize>);

impl JobSequence {
    /// Normalize and validate a raw solver sequence.
    ///
    /// Rejects wrong lengths, out-of-range ids, and duplicates rather
    /// than letting them corrupt a schedule downstream.
    pub fn from_solver(raw: &[i64], jobs: usize) -> Result<Self, SequenceError> {
        if raw.len() != jobs {
            return Err(SequenceError::LengthMismatch {
                expected: jobs,
                actual: raw.len(),
            });
        }

        let zero_indexed = raw.contains(&0);
        let mut order = Vec::with_capacity(jobs);
        let mut seen = vec![false; jobs];
        for &id in raw {
            let shifted = if zero_indexed { id } else { id - 1 };
            if shifted < 0 || shifted as usize >= jobs {
                return Err(SequenceError::OutOfRange { id, jobs });
            }
            let job = shifted as usize;
            if seen[job] {
                return Err(SequenceError::Duplicate { job });
            }
            seen[job] = true;
            order.push(job);
        }

        Ok(Self(order))
    }

    /// The 0..jobs identity permutation.
    pub fn identity(jobs: usize) -> Self {
        Self((0..jobs).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl std::fmt::Display for JobSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<String> = self.0.iter().map(|j| (j + 1).to_string()).collect();
        write!(f, "{}", ids.join(" "))
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
