// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the run orchestrator

use thiserror::Error;

/// Errors that abort a run before or during the merge
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no solvers enabled for this run")]
    NoSolversEnabled,
    #[error("custom instance selected but no matrix was supplied")]
    MissingCustomMatrix,
    #[error("run cancelled")]
    Cancelled,
    #[error("solver worker terminated unexpectedly")]
    WorkerLost,
}
