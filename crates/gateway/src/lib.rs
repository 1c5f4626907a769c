// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Solver gateways: thin request/response wrappers around the remote
//! `/solve_qubo` endpoint
//!
//! Every solver family shares one endpoint; the families differ only in
//! their `params` payload. Failures propagate to the orchestrator
//! unchanged: no retry, no backoff, no client-side timeout (the
//! `timeout` parameter bounds the remote computation only).

mod http;

use async_trait::async_trait;
use fq_core::{JobMatrix, SolveResponse, SolverParams};
use thiserror::Error;

pub use http::HttpGateway;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeGateway, SolveCall};

/// Errors from a solve call
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Non-2xx HTTP status from the solver API
    #[error("solver API returned HTTP {status}")]
    Status { status: u16 },
    /// Response body did not match the solve contract
    #[error("malformed solver response: {message}")]
    Decode { message: String },
    /// Connection-level failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// One call against the shared solve endpoint.
#[async_trait]
pub trait SolverGateway: Clone + Send + Sync + 'static {
    async fn solve(
        &self,
        matrix: &JobMatrix,
        params: &SolverParams,
    ) -> Result<SolveResponse, GatewayError>;
}
