// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Offline schedule reconstruction

use crate::output::{gantt, operation_table, OutputFormat};
use anyhow::{Context, Result};
use fq_core::{build_schedule, JobMatrix, JobSequence};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
pub struct ScheduleArgs {
    /// Matrix file, one whitespace-separated row per job
    pub file: PathBuf,

    /// Job sequence, comma-separated, 0- or 1-indexed
    /// (defaults to file order)
    #[arg(long)]
    pub sequence: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn schedule(args: ScheduleArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let matrix = JobMatrix::parse_inferred(&text)?;

    let sequence = match &args.sequence {
        Some(raw) => {
            let ids = parse_sequence(raw)?;
            JobSequence::from_solver(&ids, matrix.jobs)?
        }
        None => JobSequence::identity(matrix.jobs),
    };

    let schedule = build_schedule(&matrix, &sequence);

    match args.format {
        OutputFormat::Text => {
            println!("Sequence: {}", sequence);
            print!("{}", operation_table(&schedule));
            print!("{}", gantt(&schedule, matrix.machines));
            println!("Makespan: {}", schedule.makespan);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schedule)?),
    }
    Ok(())
}

fn parse_sequence(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .with_context(|| format!("invalid job id '{}'", part.trim()))
        })
        .collect()
}
