// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands
//!
//! Text renderings of the matrix, schedule, and run report views; JSON
//! output serializes the underlying types directly.

use clap::ValueEnum;
use fq_core::{JobMatrix, RunReport, Schedule, SolverOutcome};

/// Gantt rendering width, characters
const GANTT_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Job label for Gantt bars: A, B, ... wrapping after Z.
fn job_glyph(job: usize) -> char {
    (b'A' + (job % 26) as u8) as char
}

/// The input view: processing times with per-job totals.
pub fn matrix_table(matrix: &JobMatrix) -> String {
    let totals = matrix.total_processing_times();
    let mut out = String::new();

    out.push_str(&format!("{:<8}", "Job"));
    for machine in 1..=matrix.machines {
        out.push_str(&format!("{:>6}", format!("M{machine}")));
    }
    out.push_str(&format!("{:>8}\n", "Total"));

    for (job, row) in matrix.processing_times.iter().enumerate() {
        out.push_str(&format!("{:<8}", format!("Job {}", job + 1)));
        for &time in row {
            out.push_str(&format!("{:>6}", time));
        }
        out.push_str(&format!("{:>8}\n", totals[job]));
    }

    out.push_str(&format!(
        "{} jobs x {} machines | average processing time {:.1}\n",
        matrix.jobs,
        matrix.machines,
        matrix.average_processing_time()
    ));
    out
}

/// Operation listing, machine-major.
pub fn operation_table(schedule: &Schedule) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:<10} {:>8} {:>8}\n",
        "Machine", "Job", "Start", "End"
    ));
    for op in &schedule.operations {
        out.push_str(&format!(
            "{:<8} {:<10} {:>8} {:>8}\n",
            format!("M{}", op.machine + 1),
            format!("Job {}", op.job + 1),
            op.start,
            op.end
        ));
    }
    out
}

/// Text Gantt chart, one row per machine, time scaled to fit.
pub fn gantt(schedule: &Schedule, machines: usize) -> String {
    let mut out = String::new();
    if schedule.makespan == 0 {
        return out;
    }
    let scale = GANTT_WIDTH as f64 / schedule.makespan as f64;

    for machine in 0..machines {
        let mut row = vec!['.'; GANTT_WIDTH];
        for op in schedule.machine_operations(machine) {
            let from = (op.start as f64 * scale).floor() as usize;
            let to = ((op.end as f64 * scale).ceil() as usize).min(GANTT_WIDTH);
            for cell in row.iter_mut().take(to).skip(from) {
                *cell = job_glyph(op.job);
            }
        }
        out.push_str(&format!(
            "M{:<3} |{}| \n",
            machine + 1,
            row.iter().collect::<String>()
        ));
    }
    out.push_str(&format!("0{:>width$}\n", schedule.makespan, width = GANTT_WIDTH + 4));
    out
}

/// Full text rendering of a run report: per-solver panels plus a
/// comparison table.
pub fn report_text(report: &RunReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Run {} | instance {}\n\n",
        report.run_id, report.instance
    ));

    for (solver, outcome) in &report.outcomes {
        match outcome {
            SolverOutcome::Completed(result) => {
                out.push_str(&format!("=== {} ===\n", result.label));
                for line in &result.logs {
                    out.push_str(line);
                    out.push('\n');
                }
                out.push_str(&format!("Sequence: {}\n", result.sequence));
                out.push_str(&gantt(&result.schedule, report.matrix.machines));
                out.push('\n');
            }
            SolverOutcome::Failed { error } => {
                out.push_str(&format!("=== {} ===\n", solver));
                out.push_str(&format!("FAILED: {}\n\n", error));
            }
        }
    }

    out.push_str(&format!(
        "{:<26} {:>10} {:>12} {:>10}\n",
        "Solver", "Makespan", "Energy", "Time (s)"
    ));
    for outcome in report.outcomes.values() {
        if let Some(result) = outcome.result() {
            let marker = if report.best().map(|b| b.solver) == Some(result.solver) {
                " *"
            } else {
                ""
            };
            out.push_str(&format!(
                "{:<26} {:>10} {:>12.2} {:>10.2}{}\n",
                result.label, result.makespan, result.energy, result.execution_time, marker
            ));
        }
    }
    if report.failed_count() > 0 {
        out.push_str(&format!("{} solver(s) failed\n", report.failed_count()));
    }
    if let Some(active) = report.active {
        out.push_str(&format!("Active panel: {}\n", active));
    }
    out
}
