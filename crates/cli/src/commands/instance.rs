// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmark instance catalogue commands

use crate::output::{matrix_table, OutputFormat};
use anyhow::Result;
use fq_core::{generate_matrix, Instance};

#[derive(clap::Args, Debug)]
pub struct InstanceArgs {
    #[command(subcommand)]
    pub command: InstanceCommand,
}

#[derive(clap::Subcommand, Debug)]
pub enum InstanceCommand {
    /// List the available benchmark instances
    List,
    /// Show the generated matrix for one instance
    Show {
        /// Instance id, e.g. tai20x5
        id: String,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

pub fn instance(args: InstanceArgs) -> Result<()> {
    match args.command {
        InstanceCommand::List => {
            println!("{:<10} {:<16} {:>5} {:>9}", "ID", "LABEL", "JOBS", "MACHINES");
            for instance in Instance::all() {
                println!(
                    "{:<10} {:<16} {:>5} {:>9}",
                    instance.to_string(),
                    instance.label(),
                    instance.jobs(),
                    instance.machines()
                );
            }
            println!("{:<10} {:<16}", "custom", "Custom Instance");
        }
        InstanceCommand::Show { id, format } => {
            let instance: Instance = id.parse()?;
            let matrix = generate_matrix(instance);
            match format {
                OutputFormat::Text => {
                    println!("{} ({})", instance.label(), instance);
                    print!("{}", matrix_table(&matrix));
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matrix)?),
            }
        }
    }
    Ok(())
}
