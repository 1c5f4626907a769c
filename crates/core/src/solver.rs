// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Solver families and the `/solve_qubo` wire contract
//!
//! One parameter record per backend family rather than a single payload
//! object with optional fields; the wire mapping flattens each variant
//! into the `params` object the backend expects, field names included
//! (`T_min`, `num_chains`, `iteration_count`, ...).

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Result-map key: one slot per backend family.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    Quantum,
    InfinityQ,
    Classical,
}

impl std::fmt::Display for SolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SolverKind::Quantum => "quantum",
            SolverKind::InfinityQ => "infinityq",
            SolverKind::Classical => "classical",
        };
        write!(f, "{}", name)
    }
}

/// D-Wave submission mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantumVariant {
    QbSolv,
    LeapHybrid,
}

impl QuantumVariant {
    pub fn solver_type(&self) -> &'static str {
        match self {
            QuantumVariant::QbSolv => "qbsolv",
            QuantumVariant::LeapHybrid => "leaphybrid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuantumVariant::QbSolv => "D-Wave QBSolv",
            QuantumVariant::LeapHybrid => "D-Wave LeapHybrid",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown QUBO type '{0}'")]
pub struct UnknownQuboType(String);

/// QUBO formulation selector for the InfinityQ family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuboType {
    Auto,
    PositionBased,
    Mocellin,
    WidmerHertz,
    Gupta,
    StinsonSmith1,
    StinsonSmith2,
}

impl QuboType {
    pub fn wire_name(&self) -> &'static str {
        match self {
            QuboType::Auto => "auto",
            QuboType::PositionBased => "position-based",
            QuboType::Mocellin => "mocellin",
            QuboType::WidmerHertz => "widmer-hertz",
            QuboType::Gupta => "gupta",
            QuboType::StinsonSmith1 => "stinson-smith-1",
            QuboType::StinsonSmith2 => "stinson-smith-2",
        }
    }

    /// Display name, "Automated" for the auto formulation.
    pub fn label(&self) -> &'static str {
        match self {
            QuboType::Auto => "Automated",
            QuboType::PositionBased => "Position-based",
            QuboType::Mocellin => "Moccellin",
            QuboType::WidmerHertz => "Widmer & Hertz",
            QuboType::Gupta => "Gupta",
            QuboType::StinsonSmith1 => "Stinson & Smith-1",
            QuboType::StinsonSmith2 => "Stinson & Smith-2",
        }
    }
}

impl std::str::FromStr for QuboType {
    type Err = UnknownQuboType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(QuboType::Auto),
            "position-based" => Ok(QuboType::PositionBased),
            "mocellin" => Ok(QuboType::Mocellin),
            "widmer-hertz" => Ok(QuboType::WidmerHertz),
            "gupta" => Ok(QuboType::Gupta),
            "stinson-smith-1" => Ok(QuboType::StinsonSmith1),
            "stinson-smith-2" => Ok(QuboType::StinsonSmith2),
            other => Err(UnknownQuboType(other.to_string())),
        }
    }
}

/// Per-family solver parameters, one variant per backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SolverParams {
    Quantum {
        variant: QuantumVariant,
        timeout: f64,
    },
    InfinityQ {
        timeout: f64,
        num_chains: u32,
        num_engines: u32,
        t_min: f64,
        t_max: f64,
        coupling_multiplier: f64,
        qubo_type: QuboType,
    },
    Classical {
        timeout: f64,
        iteration_count: u32,
        k_remove: u32,
    },
}

impl SolverParams {
    pub fn quantum(variant: QuantumVariant) -> Self {
        SolverParams::Quantum {
            variant,
            timeout: 60.0,
        }
    }

    pub fn infinityq() -> Self {
        SolverParams::InfinityQ {
            timeout: 60.0,
            num_chains: 128,
            num_engines: 4,
            t_min: 0.01,
            t_max: 1e9,
            coupling_multiplier: 0.4,
            qubo_type: QuboType::Auto,
        }
    }

    pub fn classical() -> Self {
        SolverParams::Classical {
            timeout: 60.0,
            iteration_count: 4,
            k_remove: 4,
        }
    }

    pub fn kind(&self) -> SolverKind {
        match self {
            SolverParams::Quantum { .. } => SolverKind::Quantum,
            SolverParams::InfinityQ { .. } => SolverKind::InfinityQ,
            SolverParams::Classical { .. } => SolverKind::Classical,
        }
    }

    /// Display name, matching the result-panel headings.
    pub fn label(&self) -> &'static str {
        match self {
            SolverParams::Quantum { variant, .. } => variant.label(),
            SolverParams::InfinityQ { .. } => "InfinityQ TitanQ",
            SolverParams::Classical { .. } => "Classical NEH Heuristic",
        }
    }

    /// The `solver_type` value this family sends on the wire.
    pub fn solver_type(&self) -> &'static str {
        match self {
            SolverParams::Quantum { variant, .. } => variant.solver_type(),
            SolverParams::InfinityQ { .. } => "infinityq",
            SolverParams::Classical { .. } => "classical",
        }
    }

    /// QUBO formulation label for the result logs ("N/A" for classical).
    pub fn qubo_label(&self) -> &'static str {
        match self {
            SolverParams::Quantum { .. } => "Automated",
            SolverParams::InfinityQ { qubo_type, .. } => qubo_type.label(),
            SolverParams::Classical { .. } => "N/A",
        }
    }

    /// Apply a shared time limit, keeping everything else.
    pub fn with_timeout(mut self, value: f64) -> Self {
        match &mut self {
            SolverParams::Quantum { timeout, .. }
            | SolverParams::InfinityQ { timeout, .. }
            | SolverParams::Classical { timeout, .. } => *timeout = value,
        }
        self
    }

    /// Flatten into the backend's `params` object.
    pub fn to_wire(&self) -> Value {
        match self {
            SolverParams::Quantum { variant, timeout } => json!({
                "solver_type": variant.solver_type(),
                "timeout": timeout,
            }),
            SolverParams::InfinityQ {
                timeout,
                num_chains,
                num_engines,
                t_min,
                t_max,
                coupling_multiplier,
                qubo_type,
            } => json!({
                "solver_type": "infinityq",
                "timeout": timeout,
                "num_chains": num_chains,
                "num_engines": num_engines,
                "T_min": t_min,
                "T_max": t_max,
                "coupling_multiplier": coupling_multiplier,
                "qubo_type": qubo_type.wire_name(),
            }),
            SolverParams::Classical {
                timeout,
                iteration_count,
                k_remove,
            } => json!({
                "solver_type": "classical",
                "timeout": timeout,
                "iteration_count": iteration_count,
                "k_remove": k_remove,
            }),
        }
    }
}

/// Full request body for `POST /solve_qubo`.
pub fn solve_request(matrix: &crate::matrix::JobMatrix, params: &SolverParams) -> Value {
    json!({
        "job_matrix": matrix,
        "params": params.to_wire(),
    })
}

/// Response body of `POST /solve_qubo`.
///
/// The classical family reports `energy` as 0 by convention; the
/// occurrence and quality fields only appear on the InfinityQ path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResponse {
    pub makespan: f64,
    pub sequence: Vec<i64>,
    pub energy: f64,
    pub execution_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_occurrences: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_quality: Option<f64>,
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
