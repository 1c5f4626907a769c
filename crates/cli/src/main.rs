// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! fq - flowq CLI
//!
//! Client for the remote flow-shop QUBO solver API: submits benchmark
//! or custom instances to the configured solver families and renders
//! the returned schedules.

mod commands;
mod completions;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{instance, matrix, run, schedule};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fq",
    version,
    about = "flowq - flow-shop scheduling via remote QUBO solvers"
)]
struct Cli {
    /// Solver API base URL (overrides FQ_API_URL and fq.toml)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit an instance to one or more solvers
    Run(run::RunArgs),
    /// Benchmark instance catalogue
    Instance(instance::InstanceArgs),
    /// Custom problem-input helpers
    Matrix(matrix::MatrixArgs),
    /// Rebuild a schedule offline from a matrix and a job sequence
    Schedule(schedule::ScheduleArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run::run(args, cli.api_url).await,
        Commands::Instance(args) => instance::instance(args),
        Commands::Matrix(args) => matrix::matrix(args),
        Commands::Schedule(args) => schedule::schedule(args),
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell);
            Ok(())
        }
    }
}
