// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom problem-input helpers

use crate::output::{matrix_table, OutputFormat};
use anyhow::{Context, Result};
use fq_core::{random_matrix, JobMatrix};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub struct MatrixArgs {
    #[command(subcommand)]
    pub command: MatrixCommand,
}

#[derive(clap::Subcommand, Debug)]
pub enum MatrixCommand {
    /// Validate a matrix file against declared dimensions
    Validate {
        /// Matrix file, one whitespace-separated row per job
        file: PathBuf,
        /// Expected number of jobs (rows)
        #[arg(long)]
        jobs: usize,
        /// Expected number of machines (columns)
        #[arg(long)]
        machines: usize,
    },
    /// Generate a random matrix, times uniform in 1..=50
    Random {
        #[arg(long)]
        jobs: usize,
        #[arg(long)]
        machines: usize,
        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

pub fn matrix(args: MatrixArgs) -> Result<()> {
    match args.command {
        MatrixCommand::Validate {
            file,
            jobs,
            machines,
        } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let matrix = JobMatrix::parse(jobs, machines, &text)?;
            println!(
                "OK: {} jobs x {} machines, average processing time {:.1}",
                matrix.jobs,
                matrix.machines,
                matrix.average_processing_time()
            );
        }
        MatrixCommand::Random {
            jobs,
            machines,
            seed,
            format,
        } => {
            let rows = match seed {
                Some(seed) => random_matrix(jobs, machines, &mut SmallRng::seed_from_u64(seed)),
                None => random_matrix(jobs, machines, &mut rand::rng()),
            };
            let matrix = JobMatrix::new(jobs, machines, rows)?;
            match format {
                OutputFormat::Text => {
                    for row in &matrix.processing_times {
                        let cells: Vec<String> = row.iter().map(u32::to_string).collect();
                        println!("{}", cells.join(" "));
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matrix)?),
            }
        }
    }
    Ok(())
}
