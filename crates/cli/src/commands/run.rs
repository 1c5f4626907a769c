// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Submit an instance to the configured solvers

use crate::output::{report_text, OutputFormat};
use anyhow::{bail, Context, Result};
use fq_core::{
    ApiConfig, Instance, InstanceSelection, JobMatrix, QuantumVariant, QuboType, RunConfig,
    RunEvent, SolverParams,
};
use fq_engine::{cancel_pair, Orchestrator};
use fq_gateway::HttpGateway;
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Benchmark instance id, or "custom" with --matrix
    #[arg(long, default_value = "tai20x5")]
    pub instance: String,

    /// Custom matrix file, one whitespace-separated row per job
    #[arg(long)]
    pub matrix: Option<PathBuf>,

    /// Enable the D-Wave family ("qbsolv" or "leaphybrid")
    #[arg(long, value_name = "VARIANT", num_args = 0..=1, default_missing_value = "qbsolv")]
    pub quantum: Option<String>,

    /// Enable the InfinityQ TitanQ family
    #[arg(long)]
    pub infinityq: bool,

    /// Enable the classical NEH heuristic
    #[arg(long)]
    pub classical: bool,

    /// Time limit applied to every enabled solver, seconds
    #[arg(long)]
    pub timeout: Option<f64>,

    /// QUBO formulation for the InfinityQ family
    #[arg(long, default_value = "auto")]
    pub qubo_type: String,

    #[arg(long, default_value_t = 128)]
    pub num_chains: u32,

    #[arg(long, default_value_t = 4)]
    pub num_engines: u32,

    #[arg(long, default_value_t = 0.01)]
    pub t_min: f64,

    #[arg(long, default_value_t = 1e9)]
    pub t_max: f64,

    #[arg(long, default_value_t = 0.4)]
    pub coupling_multiplier: f64,

    /// Iteration count for the classical solver
    #[arg(long, default_value_t = 4)]
    pub iterations: u32,

    /// Destruction size for the classical solver
    #[arg(long, default_value_t = 4)]
    pub k_remove: u32,

    /// Target the hosted production API
    #[arg(long)]
    pub production: bool,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub async fn run(args: RunArgs, api_url: Option<String>) -> Result<()> {
    let solvers = build_solvers(&args)?;
    if solvers.is_empty() {
        bail!("no solvers enabled; pass --quantum, --infinityq, or --classical");
    }

    let (instance, custom_matrix) = resolve_instance(&args)?;

    let api = if let Some(url) = api_url {
        ApiConfig::with_base_url(url)
    } else if args.production {
        ApiConfig::production()
    } else {
        ApiConfig::resolve(None)?
    };

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let progress = tokio::spawn(async move {
        while let Some(event) = events_rx.recv().await {
            match event {
                RunEvent::Dispatched { solver, .. } => {
                    eprintln!("  > {} dispatched", solver);
                }
                RunEvent::SolverCompleted {
                    solver, makespan, ..
                } => {
                    eprintln!("  + {} completed, makespan {}", solver, makespan);
                }
                RunEvent::SolverFailed { solver, error, .. } => {
                    eprintln!("  ! {} failed: {}", solver, error);
                }
                RunEvent::Merged {
                    completed, failed, ..
                } => {
                    eprintln!("  = run merged: {} completed, {} failed", completed, failed);
                }
            }
        }
    });

    // ctrl-c cancels the run instead of killing the process mid-print
    let (cancel_handle, cancel_token) = cancel_pair();
    ctrlc::set_handler(move || cancel_handle.cancel())
        .context("installing ctrl-c handler")?;

    let orchestrator = Orchestrator::with_events(HttpGateway::new(api), events_tx);
    let report = orchestrator
        .execute_with_cancel(
            RunConfig {
                instance,
                custom_matrix,
                solvers,
            },
            cancel_token,
        )
        .await?;

    // close the event channel so the progress printer drains and exits
    drop(orchestrator);
    let _ = progress.await;

    match args.format {
        OutputFormat::Text => print!("{}", report_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn build_solvers(args: &RunArgs) -> Result<Vec<SolverParams>> {
    let mut solvers = Vec::new();

    if let Some(variant) = &args.quantum {
        let variant = match variant.as_str() {
            "qbsolv" => QuantumVariant::QbSolv,
            "leaphybrid" => QuantumVariant::LeapHybrid,
            other => bail!("unknown quantum variant '{other}' (expected qbsolv or leaphybrid)"),
        };
        solvers.push(SolverParams::quantum(variant));
    }

    if args.infinityq {
        let qubo_type: QuboType = args.qubo_type.parse()?;
        solvers.push(SolverParams::InfinityQ {
            timeout: 60.0,
            num_chains: args.num_chains,
            num_engines: args.num_engines,
            t_min: args.t_min,
            t_max: args.t_max,
            coupling_multiplier: args.coupling_multiplier,
            qubo_type,
        });
    }

    if args.classical {
        solvers.push(SolverParams::Classical {
            timeout: 60.0,
            iteration_count: args.iterations,
            k_remove: args.k_remove,
        });
    }

    if let Some(timeout) = args.timeout {
        solvers = solvers
            .into_iter()
            .map(|params| params.with_timeout(timeout))
            .collect();
    }

    Ok(solvers)
}

fn resolve_instance(args: &RunArgs) -> Result<(InstanceSelection, Option<JobMatrix>)> {
    if args.instance == "custom" {
        let Some(path) = &args.matrix else {
            bail!("--instance custom requires --matrix FILE");
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let matrix = JobMatrix::parse_inferred(&text)?;
        Ok((InstanceSelection::Custom, Some(matrix)))
    } else {
        if args.matrix.is_some() {
            bail!("--matrix is only valid with --instance custom");
        }
        let instance: Instance = args.instance.parse()?;
        Ok((InstanceSelection::Named(instance), None))
    }
}
