// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP gateway against the solver API

use crate::{GatewayError, SolverGateway};
use async_trait::async_trait;
use fq_core::{solver::solve_request, ApiConfig, JobMatrix, SolveResponse, SolverParams};
use tracing::{debug, info};

/// Production gateway: POSTs the solve payload to `{base_url}/solve_qubo`.
#[derive(Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl SolverGateway for HttpGateway {
    async fn solve(
        &self,
        matrix: &JobMatrix,
        params: &SolverParams,
    ) -> Result<SolveResponse, GatewayError> {
        let url = self.config.endpoint("/solve_qubo");
        let body = solve_request(matrix, params);

        info!(
            solver_type = params.solver_type(),
            jobs = matrix.jobs,
            machines = matrix.machines,
            %url,
            "submitting solve request"
        );
        debug!(payload = %body, "solve payload");

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        let parsed = response
            .json::<SolveResponse>()
            .await
            .map_err(|e| GatewayError::Decode {
                message: e.to_string(),
            })?;

        debug!(
            solver_type = params.solver_type(),
            makespan = parsed.makespan,
            execution_time = parsed.execution_time,
            "solve response received"
        );
        Ok(parsed)
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
