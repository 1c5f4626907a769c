// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Permutation flow-shop schedule builder
//!
//! Expands a job permutation into a per-machine, per-job timeline under
//! the classic recurrence:
//!
//! ```text
//! start(job, machine) = max(end(job, machine-1), end(lastJobOnMachine, machine))
//! end(job, machine)   = start(job, machine) + P[job][machine]
//! ```
//!
//! processed machine by machine, within each machine in permutation
//! order (every job visits the machines in the same fixed order).

use crate::matrix::JobMatrix;
use crate::sequence::JobSequence;
use serde::{Deserialize, Serialize};

/// One job's execution interval on one machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub job: usize,
    pub machine: usize,
    pub start: u64,
    pub end: u64,
}

/// A complete timeline for one (matrix, permutation) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub operations: Vec<Operation>,
    pub makespan: u64,
}

/// Build the schedule for `seq` on `matrix`.
///
/// Pure: the same inputs always produce the same operations and
/// makespan. `seq` is validated at construction, so every (job, machine)
/// pair appears exactly once.
pub fn build_schedule(matrix: &JobMatrix, seq: &JobSequence) -> Schedule {
    let mut machine_end = vec![0u64; matrix.machines];
    let mut job_end = vec![0u64; matrix.jobs];
    let mut operations = Vec::with_capacity(matrix.jobs * matrix.machines);

    for machine in 0..matrix.machines {
        for job in seq.iter() {
            let processing = u64::from(matrix.processing_times[job][machine]);
            let start = job_end[job].max(machine_end[machine]);
            let end = start + processing;
            operations.push(Operation {
                job,
                machine,
                start,
                end,
            });
            machine_end[machine] = end;
            job_end[job] = end;
        }
    }

    let makespan = operations.iter().map(|op| op.end).max().unwrap_or(0);
    Schedule {
        operations,
        makespan,
    }
}

impl Schedule {
    /// Operations on one machine, in schedule order.
    pub fn machine_operations(&self, machine: usize) -> Vec<Operation> {
        self.operations
            .iter()
            .filter(|op| op.machine == machine)
            .copied()
            .collect()
    }

    /// Operations for one job, ordered by machine index.
    pub fn job_operations(&self, job: usize) -> Vec<Operation> {
        let mut ops: Vec<Operation> = self
            .operations
            .iter()
            .filter(|op| op.job == job)
            .copied()
            .collect();
        ops.sort_by_key(|op| op.machine);
        ops
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
