// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration, status machine, results, and run events
//!
//! A "run" is one user-triggered submission: one matrix, one gateway
//! call per enabled solver family, one merged report. Outcomes commit
//! per solver as calls resolve; a failed solver never discards another
//! solver's completed result.

use crate::instance::InstanceSelection;
use crate::matrix::JobMatrix;
use crate::schedule::Schedule;
use crate::sequence::JobSequence;
use crate::solver::{SolverKind, SolverParams};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Unique identifier for a run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub String);

impl RunId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub instance: InstanceSelection,
    /// Matrix from the problem-input flow; required when `instance` is
    /// `Custom`, ignored otherwise.
    pub custom_matrix: Option<JobMatrix>,
    pub solvers: Vec<SolverParams>,
}

/// Phases of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Idle,
    Dispatching,
    InFlight,
    Merged,
}

/// Tracks a run through `Idle → Dispatching → InFlight → Merged`.
///
/// Solvers are added while dispatching and removed as their calls
/// resolve, in any order; the run merges once the in-flight set drains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStatus {
    state: RunState,
    in_flight: BTreeSet<SolverKind>,
}

impl RunStatus {
    pub fn new() -> Self {
        Self {
            state: RunState::Idle,
            in_flight: BTreeSet::new(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn in_flight(&self) -> &BTreeSet<SolverKind> {
        &self.in_flight
    }

    /// Record a solver dispatch.
    pub fn dispatch(&mut self, solver: SolverKind) {
        self.state = RunState::Dispatching;
        self.in_flight.insert(solver);
    }

    /// All dispatches issued; calls are now in flight.
    pub fn dispatched(&mut self) {
        if !self.in_flight.is_empty() {
            self.state = RunState::InFlight;
        }
    }

    /// Record a solver resolution (success or failure). Returns the new
    /// state; `Merged` once the last call resolves.
    pub fn resolve(&mut self, solver: SolverKind) -> RunState {
        self.in_flight.remove(&solver);
        if self.in_flight.is_empty() {
            self.state = RunState::Merged;
        }
        self.state
    }
}

impl Default for RunStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// One solver's completed result within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverRunResult {
    pub solver: SolverKind,
    /// Display name ("D-Wave QBSolv", "InfinityQ TitanQ", ...)
    pub label: String,
    pub makespan: u64,
    pub schedule: Schedule,
    pub sequence: JobSequence,
    pub energy: f64,
    /// Remote solver execution time, seconds
    pub execution_time: f64,
    pub logs: Vec<String>,
}

/// Per-solver outcome: committed independently as each call resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SolverOutcome {
    Completed(SolverRunResult),
    Failed { error: String },
}

impl SolverOutcome {
    pub fn result(&self) -> Option<&SolverRunResult> {
        match self {
            SolverOutcome::Completed(result) => Some(result),
            SolverOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SolverOutcome::Failed { .. })
    }
}

/// Merged view of one run, one outcome slot per solver family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub instance: InstanceSelection,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub matrix: JobMatrix,
    pub outcomes: BTreeMap<SolverKind, SolverOutcome>,
    /// Last solver to complete successfully, in completion order; the
    /// result panel a front-end should focus.
    pub active: Option<SolverKind>,
}

impl RunReport {
    /// Completed results in key order.
    pub fn completed(&self) -> impl Iterator<Item = &SolverRunResult> {
        self.outcomes.values().filter_map(|o| o.result())
    }

    /// The completed result with the smallest makespan.
    pub fn best(&self) -> Option<&SolverRunResult> {
        self.completed().min_by_key(|r| r.makespan)
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.values().filter(|o| o.is_failed()).count()
    }
}

/// Progress events published while a run executes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RunEvent {
    Dispatched {
        run_id: RunId,
        solver: SolverKind,
    },
    SolverCompleted {
        run_id: RunId,
        solver: SolverKind,
        makespan: u64,
    },
    SolverFailed {
        run_id: RunId,
        solver: SolverKind,
        error: String,
    },
    Merged {
        run_id: RunId,
        completed: usize,
        failed: usize,
    },
}

impl RunEvent {
    /// Event name for filtering and logging.
    pub fn name(&self) -> &'static str {
        match self {
            RunEvent::Dispatched { .. } => "run:dispatched",
            RunEvent::SolverCompleted { .. } => "run:solver:completed",
            RunEvent::SolverFailed { .. } => "run:solver:failed",
            RunEvent::Merged { .. } => "run:merged",
        }
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
