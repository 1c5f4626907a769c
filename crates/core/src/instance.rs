// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmark instance catalogue and matrix generation
//!
//! Named Taillard-style profiles with deterministic generation: one
//! fixed RNG seed per profile, processing times uniform in 1..=99, so
//! the same profile always expands to the same matrix.

use crate::matrix::JobMatrix;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value range for generated benchmark processing times
const BENCH_TIME_RANGE: std::ops::RangeInclusive<u32> = 1..=99;
/// Value range used by the random custom-problem helper
const CUSTOM_TIME_RANGE: std::ops::RangeInclusive<u32> = 1..=50;

#[derive(Debug, Error)]
#[error("unknown instance '{0}'")]
pub struct UnknownInstance(String);

/// A named benchmark profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instance {
    Tai20x5,
    Tai20x10,
    Tai20x20,
    Tai50x5,
    Tai50x10,
}

impl Instance {
    pub fn all() -> &'static [Instance] {
        &[
            Instance::Tai20x5,
            Instance::Tai20x10,
            Instance::Tai20x20,
            Instance::Tai50x5,
            Instance::Tai50x10,
        ]
    }

    pub fn jobs(&self) -> usize {
        match self {
            Instance::Tai20x5 | Instance::Tai20x10 | Instance::Tai20x20 => 20,
            Instance::Tai50x5 | Instance::Tai50x10 => 50,
        }
    }

    pub fn machines(&self) -> usize {
        match self {
            Instance::Tai20x5 | Instance::Tai50x5 => 5,
            Instance::Tai20x10 | Instance::Tai50x10 => 10,
            Instance::Tai20x20 => 20,
        }
    }

    /// Human-readable label, as shown in the instance picker.
    pub fn label(&self) -> &'static str {
        match self {
            Instance::Tai20x5 => "Taillard 20×5",
            Instance::Tai20x10 => "Taillard 20×10",
            Instance::Tai20x20 => "Taillard 20×20",
            Instance::Tai50x5 => "Taillard 50×5",
            Instance::Tai50x10 => "Taillard 50×10",
        }
    }

    fn seed(&self) -> u64 {
        match self {
            Instance::Tai20x5 => 873_654_221,
            Instance::Tai20x10 => 379_008_056,
            Instance::Tai20x20 => 1_866_992_158,
            Instance::Tai50x5 => 1_328_042_058,
            Instance::Tai50x10 => 1_958_182_393,
        }
    }
}

impl std::str::FromStr for Instance {
    type Err = UnknownInstance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tai20x5" => Ok(Instance::Tai20x5),
            "tai20x10" => Ok(Instance::Tai20x10),
            "tai20x20" => Ok(Instance::Tai20x20),
            "tai50x5" => Ok(Instance::Tai50x5),
            "tai50x10" => Ok(Instance::Tai50x10),
            other => Err(UnknownInstance(other.to_string())),
        }
    }
}

impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            Instance::Tai20x5 => "tai20x5",
            Instance::Tai20x10 => "tai20x10",
            Instance::Tai20x20 => "tai20x20",
            Instance::Tai50x5 => "tai50x5",
            Instance::Tai50x10 => "tai50x10",
        };
        write!(f, "{}", id)
    }
}

/// Which matrix a run should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstanceSelection {
    Named(Instance),
    /// Requires a user-supplied matrix from the problem-input flow.
    Custom,
}

impl std::fmt::Display for InstanceSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceSelection::Named(instance) => write!(f, "{}", instance),
            InstanceSelection::Custom => write!(f, "custom"),
        }
    }
}

/// Expand a benchmark profile into its processing-time matrix.
pub fn generate_matrix(instance: Instance) -> JobMatrix {
    let mut rng = SmallRng::seed_from_u64(instance.seed());
    let rows = (0..instance.jobs())
        .map(|_| {
            (0..instance.machines())
                .map(|_| rng.random_range(BENCH_TIME_RANGE))
                .collect()
        })
        .collect();

    // dimensions come from the profile, so construction cannot fail
    match JobMatrix::new(instance.jobs(), instance.machines(), rows) {
        Ok(matrix) => matrix,
        Err(_) => unreachable!("profile dimensions are static"),
    }
}

/// Random matrix for the custom-problem helper, times uniform in 1..=50.
pub fn random_matrix(jobs: usize, machines: usize, rng: &mut impl Rng) -> Vec<Vec<u32>> {
    (0..jobs)
        .map(|_| {
            (0..machines)
                .map(|_| rng.random_range(CUSTOM_TIME_RANGE))
                .collect()
        })
        .collect()
}

#[cfg(test)]
#[path = "instance_tests.rs"]
mod tests;
