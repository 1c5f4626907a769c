// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake solver gateway for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{GatewayError, SolverGateway};
use async_trait::async_trait;
use fq_core::{JobMatrix, SolveResponse, SolverKind, SolverParams};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded solve call
#[derive(Debug, Clone)]
pub struct SolveCall {
    pub solver: SolverKind,
    pub solver_type: String,
    pub jobs: usize,
    pub machines: usize,
}

#[derive(Debug, Clone)]
enum Scripted {
    Respond(SolveResponse),
    FailStatus(u16),
    FailDecode(String),
}

/// Fake gateway with per-family scripted outcomes and optional latency.
#[derive(Clone, Default)]
pub struct FakeGateway {
    scripted: Arc<Mutex<HashMap<SolverKind, VecDeque<Scripted>>>>,
    delays: Arc<Mutex<HashMap<SolverKind, Duration>>>,
    calls: Arc<Mutex<Vec<SolveCall>>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful response for the next call of this family.
    pub fn respond(&self, solver: SolverKind, response: SolveResponse) {
        self.push(solver, Scripted::Respond(response));
    }

    /// Script an HTTP status failure for the next call of this family.
    pub fn fail_status(&self, solver: SolverKind, status: u16) {
        self.push(solver, Scripted::FailStatus(status));
    }

    /// Script a malformed-body failure for the next call of this family.
    pub fn fail_decode(&self, solver: SolverKind, message: impl Into<String>) {
        self.push(solver, Scripted::FailDecode(message.into()));
    }

    /// Delay this family's calls, for completion-order tests.
    pub fn delay(&self, solver: SolverKind, delay: Duration) {
        self.delays
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(solver, delay);
    }

    /// All recorded calls, in call order.
    pub fn calls(&self) -> Vec<SolveCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn push(&self, solver: SolverKind, outcome: Scripted) {
        self.scripted
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(solver)
            .or_default()
            .push_back(outcome);
    }

    fn next(&self, solver: SolverKind) -> Option<Scripted> {
        self.scripted
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get_mut(&solver)
            .and_then(|queue| queue.pop_front())
    }
}

#[async_trait]
impl SolverGateway for FakeGateway {
    async fn solve(
        &self,
        matrix: &JobMatrix,
        params: &SolverParams,
    ) -> Result<SolveResponse, GatewayError> {
        let solver = params.kind();
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(SolveCall {
                solver,
                solver_type: params.solver_type().to_string(),
                jobs: matrix.jobs,
                machines: matrix.machines,
            });

        let delay = self
            .delays
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&solver)
            .copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.next(solver) {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::FailStatus(status)) => Err(GatewayError::Status { status }),
            Some(Scripted::FailDecode(message)) => Err(GatewayError::Decode { message }),
            None => Err(GatewayError::Decode {
                message: format!("no scripted response for {solver}"),
            }),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
