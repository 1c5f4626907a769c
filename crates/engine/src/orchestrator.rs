// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run orchestration
//!
//! One run: resolve the matrix, dispatch one gateway call per enabled
//! solver family, commit each outcome as it resolves, merge. Commits
//! are per solver: a failing solver yields a failed outcome slot and
//! never discards results that already landed. Completion order is
//! whatever the network gives us; the last successful completion
//! becomes the report's `active` solver.

use crate::cancel::{cancel_pair, CancelToken};
use crate::error::EngineError;
use fq_core::{
    build_schedule, generate_matrix, InstanceSelection, JobMatrix, JobSequence, RunConfig,
    RunEvent, RunId, RunReport, RunState, RunStatus, SequenceError, SolveResponse, SolverOutcome,
    SolverParams, SolverRunResult,
};
use fq_gateway::SolverGateway;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Drives runs against a solver gateway.
#[derive(Clone)]
pub struct Orchestrator<G: SolverGateway> {
    gateway: G,
    events: Option<mpsc::UnboundedSender<RunEvent>>,
}

impl<G: SolverGateway> Orchestrator<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            events: None,
        }
    }

    /// Publish run events to the given channel as the run progresses.
    pub fn with_events(gateway: G, events: mpsc::UnboundedSender<RunEvent>) -> Self {
        Self {
            gateway,
            events: Some(events),
        }
    }

    /// Execute a run to completion.
    pub async fn execute(&self, config: RunConfig) -> Result<RunReport, EngineError> {
        // token held open but never cancelled
        let (_handle, token) = cancel_pair();
        self.execute_with_cancel(config, token).await
    }

    /// Execute a run, aborting in-flight solver calls if `token` is
    /// cancelled.
    pub async fn execute_with_cancel(
        &self,
        config: RunConfig,
        mut token: CancelToken,
    ) -> Result<RunReport, EngineError> {
        let matrix = resolve_matrix(&config)?;

        // one slot per family: a duplicate family would race for it
        let mut seen = BTreeSet::new();
        let solvers: Vec<SolverParams> = config
            .solvers
            .iter()
            .filter(|params| {
                let fresh = seen.insert(params.kind());
                if !fresh {
                    warn!(solver = %params.kind(), "duplicate solver family ignored");
                }
                fresh
            })
            .cloned()
            .collect();
        if solvers.is_empty() {
            return Err(EngineError::NoSolversEnabled);
        }

        let run_id = RunId::new();
        let started_at = chrono::Utc::now();
        info!(%run_id, instance = %config.instance, solvers = solvers.len(), "starting run");

        let mut status = RunStatus::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut handles = Vec::with_capacity(solvers.len());

        for params in solvers {
            status.dispatch(params.kind());
            self.emit(RunEvent::Dispatched {
                run_id: run_id.clone(),
                solver: params.kind(),
            });

            let gateway = self.gateway.clone();
            let matrix = matrix.clone();
            let tx = tx.clone();
            handles.push(tokio::spawn(async move {
                let result = gateway.solve(&matrix, &params).await;
                let _ = tx.send((params, result));
            }));
        }
        drop(tx);
        status.dispatched();

        let mut outcomes = BTreeMap::new();
        let mut active = None;

        while status.state() != RunState::Merged {
            let message = tokio::select! {
                _ = token.cancelled() => {
                    for handle in &handles {
                        handle.abort();
                    }
                    info!(%run_id, "run cancelled");
                    return Err(EngineError::Cancelled);
                }
                message = rx.recv() => message,
            };
            let Some((params, result)) = message else {
                return Err(EngineError::WorkerLost);
            };

            let solver = params.kind();
            let outcome = match result {
                Ok(response) => {
                    match build_result(&matrix, config.instance, &params, response) {
                        Ok(result) => {
                            info!(%run_id, %solver, makespan = result.makespan, "solver completed");
                            self.emit(RunEvent::SolverCompleted {
                                run_id: run_id.clone(),
                                solver,
                                makespan: result.makespan,
                            });
                            active = Some(solver);
                            SolverOutcome::Completed(result)
                        }
                        Err(err) => {
                            warn!(%run_id, %solver, error = %err, "solver returned invalid sequence");
                            self.emit(RunEvent::SolverFailed {
                                run_id: run_id.clone(),
                                solver,
                                error: err.to_string(),
                            });
                            SolverOutcome::Failed {
                                error: err.to_string(),
                            }
                        }
                    }
                }
                Err(err) => {
                    warn!(%run_id, %solver, error = %err, "solver call failed");
                    self.emit(RunEvent::SolverFailed {
                        run_id: run_id.clone(),
                        solver,
                        error: err.to_string(),
                    });
                    SolverOutcome::Failed {
                        error: err.to_string(),
                    }
                }
            };

            // per-solver commit: earlier outcomes are never revisited
            outcomes.insert(solver, outcome);
            status.resolve(solver);
        }

        let completed = outcomes.values().filter(|o| !o.is_failed()).count();
        let failed = outcomes.len() - completed;
        self.emit(RunEvent::Merged {
            run_id: run_id.clone(),
            completed,
            failed,
        });
        info!(%run_id, completed, failed, "run merged");

        Ok(RunReport {
            run_id,
            instance: config.instance,
            started_at,
            matrix,
            outcomes,
            active,
        })
    }

    fn emit(&self, event: RunEvent) {
        debug!(event = event.name(), "run event");
        if let Some(events) = &self.events {
            let _ = events.send(event);
        }
    }
}

/// Pick the run's matrix: custom instances require a supplied matrix,
/// named instances expand deterministically.
fn resolve_matrix(config: &RunConfig) -> Result<JobMatrix, EngineError> {
    match config.instance {
        InstanceSelection::Custom => config
            .custom_matrix
            .clone()
            .ok_or(EngineError::MissingCustomMatrix),
        InstanceSelection::Named(instance) => Ok(generate_matrix(instance)),
    }
}

/// Turn a solver response into a committed result: normalize the
/// permutation, rebuild the schedule locally, assemble the log lines.
/// The locally rebuilt makespan wins over the solver-reported one.
fn build_result(
    matrix: &JobMatrix,
    instance: InstanceSelection,
    params: &SolverParams,
    response: SolveResponse,
) -> Result<SolverRunResult, SequenceError> {
    let sequence = JobSequence::from_solver(&response.sequence, matrix.jobs)?;
    let schedule = build_schedule(matrix, &sequence);
    let makespan = schedule.makespan;

    let mut logs = match params {
        SolverParams::Quantum { .. } => vec![
            format!("[INFO] Starting {} for instance {}", params.label(), instance),
            "[INFO] QUBO Type: Automated".to_string(),
        ],
        SolverParams::InfinityQ { .. } => vec![
            format!("[INFO] Starting InfinityQ solver for instance {}", instance),
            format!("[INFO] QUBO Type: {}", params.qubo_label()),
        ],
        SolverParams::Classical { .. } => vec![
            format!(
                "[INFO] Starting Classical NEH Heuristic for instance {}",
                instance
            ),
            "[INFO] Using NEH algorithm with local search".to_string(),
        ],
    };
    logs.push(format!(
        "[INFO] Execution time: {:.2}s",
        response.execution_time
    ));
    if !matches!(params, SolverParams::Classical { .. }) {
        logs.push(format!("[INFO] Solution energy: {:.2}", response.energy));
    }
    logs.push(format!("[INFO] Makespan: {}", makespan));

    let reported = response.makespan.round() as u64;
    if reported != makespan {
        warn!(
            solver = %params.kind(),
            reported,
            rebuilt = makespan,
            "solver-reported makespan differs from rebuilt schedule"
        );
        logs.push(format!(
            "[WARN] Solver reported makespan {} but rebuilt schedule gives {}",
            reported, makespan
        ));
    }

    Ok(SolverRunResult {
        solver: params.kind(),
        label: params.label().to_string(),
        makespan,
        schedule,
        sequence,
        energy: response.energy,
        execution_time: response.execution_time,
        logs,
    })
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
