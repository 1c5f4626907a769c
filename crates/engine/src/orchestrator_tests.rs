// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use fq_core::{Instance, QuantumVariant, SolverKind};
use fq_gateway::FakeGateway;
use std::time::Duration;
use tokio::sync::mpsc;

fn matrix_2x2() -> JobMatrix {
    JobMatrix::new(2, 2, vec![vec![3, 2], vec![1, 4]]).unwrap()
}

fn custom_config(solvers: Vec<SolverParams>) -> RunConfig {
    RunConfig {
        instance: InstanceSelection::Custom,
        custom_matrix: Some(matrix_2x2()),
        solvers,
    }
}

fn response(sequence: Vec<i64>, makespan: f64) -> SolveResponse {
    SolveResponse {
        makespan,
        sequence,
        energy: -2.5,
        execution_time: 1.25,
        num_occurrences: None,
        solution_quality: None,
    }
}

#[tokio::test]
async fn merges_all_successful_solvers() {
    let gateway = FakeGateway::new();
    gateway.respond(SolverKind::Quantum, response(vec![1, 2], 9.0));
    gateway.respond(SolverKind::Classical, response(vec![2, 1], 8.0));

    let orchestrator = Orchestrator::new(gateway);
    let report = orchestrator
        .execute(custom_config(vec![
            SolverParams::quantum(QuantumVariant::QbSolv),
            SolverParams::classical(),
        ]))
        .await
        .unwrap();

    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(report.failed_count(), 0);

    let quantum = report.outcomes[&SolverKind::Quantum].result().unwrap();
    assert_eq!(quantum.makespan, 9);
    assert_eq!(quantum.label, "D-Wave QBSolv");
    assert_eq!(quantum.schedule.operations.len(), 4);
    assert_eq!(quantum.execution_time, 1.25);
}

#[tokio::test]
async fn partial_results_survive_late_failure() {
    let gateway = FakeGateway::new();
    gateway.respond(SolverKind::Quantum, response(vec![1, 2], 9.0));
    gateway.fail_status(SolverKind::Classical, 500);

    let orchestrator = Orchestrator::new(gateway);
    let report = orchestrator
        .execute(custom_config(vec![
            SolverParams::quantum(QuantumVariant::QbSolv),
            SolverParams::classical(),
        ]))
        .await
        .unwrap();

    // the quantum result is committed even though classical failed
    let quantum = report.outcomes[&SolverKind::Quantum].result();
    assert!(quantum.is_some());

    match &report.outcomes[&SolverKind::Classical] {
        SolverOutcome::Failed { error } => assert!(error.contains("500"), "got: {error}"),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.active, Some(SolverKind::Quantum));
}

#[tokio::test]
async fn custom_instance_without_matrix_is_rejected() {
    let orchestrator = Orchestrator::new(FakeGateway::new());
    let err = orchestrator
        .execute(RunConfig {
            instance: InstanceSelection::Custom,
            custom_matrix: None,
            solvers: vec![SolverParams::classical()],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::MissingCustomMatrix));
}

#[tokio::test]
async fn run_without_solvers_is_rejected() {
    let orchestrator = Orchestrator::new(FakeGateway::new());
    let err = orchestrator
        .execute(custom_config(Vec::new()))
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::NoSolversEnabled));
}

#[tokio::test]
async fn named_instance_expands_deterministically() {
    let gateway = FakeGateway::new();
    let sequence: Vec<i64> = (1..=20).collect();
    gateway.respond(SolverKind::Classical, response(sequence, 0.0));

    let orchestrator = Orchestrator::new(gateway.clone());
    let report = orchestrator
        .execute(RunConfig {
            instance: InstanceSelection::Named(Instance::Tai20x5),
            custom_matrix: None,
            solvers: vec![SolverParams::classical()],
        })
        .await
        .unwrap();

    assert_eq!(report.matrix, fq_core::generate_matrix(Instance::Tai20x5));
    let result = report.outcomes[&SolverKind::Classical].result().unwrap();
    assert_eq!(result.schedule.operations.len(), 20 * 5);

    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].jobs, 20);
    assert_eq!(calls[0].machines, 5);
}

#[tokio::test(start_paused = true)]
async fn active_is_last_successful_completion() {
    let gateway = FakeGateway::new();
    gateway.respond(SolverKind::Quantum, response(vec![1, 2], 9.0));
    gateway.respond(SolverKind::Classical, response(vec![2, 1], 8.0));
    gateway.delay(SolverKind::Quantum, Duration::from_secs(1));
    gateway.delay(SolverKind::Classical, Duration::from_secs(5));

    let orchestrator = Orchestrator::new(gateway);
    let report = orchestrator
        .execute(custom_config(vec![
            SolverParams::quantum(QuantumVariant::QbSolv),
            SolverParams::classical(),
        ]))
        .await
        .unwrap();

    assert_eq!(report.active, Some(SolverKind::Classical));
}

#[tokio::test(start_paused = true)]
async fn active_skips_failures_that_complete_last() {
    let gateway = FakeGateway::new();
    gateway.respond(SolverKind::Quantum, response(vec![1, 2], 9.0));
    gateway.fail_status(SolverKind::Classical, 503);
    gateway.delay(SolverKind::Quantum, Duration::from_secs(1));
    gateway.delay(SolverKind::Classical, Duration::from_secs(5));

    let orchestrator = Orchestrator::new(gateway);
    let report = orchestrator
        .execute(custom_config(vec![
            SolverParams::quantum(QuantumVariant::QbSolv),
            SolverParams::classical(),
        ]))
        .await
        .unwrap();

    assert_eq!(report.active, Some(SolverKind::Quantum));
}

#[tokio::test]
async fn invalid_sequence_becomes_failed_outcome() {
    let gateway = FakeGateway::new();
    gateway.respond(SolverKind::Classical, response(vec![1, 1], 9.0));

    let orchestrator = Orchestrator::new(gateway);
    let report = orchestrator
        .execute(custom_config(vec![SolverParams::classical()]))
        .await
        .unwrap();

    match &report.outcomes[&SolverKind::Classical] {
        SolverOutcome::Failed { error } => {
            assert!(error.contains("more than once"), "got: {error}")
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(report.active, None);
}

#[tokio::test]
async fn makespan_mismatch_is_logged_and_local_value_wins() {
    let gateway = FakeGateway::new();
    gateway.respond(SolverKind::Classical, response(vec![1, 2], 999.0));

    let orchestrator = Orchestrator::new(gateway);
    let report = orchestrator
        .execute(custom_config(vec![SolverParams::classical()]))
        .await
        .unwrap();

    let result = report.outcomes[&SolverKind::Classical].result().unwrap();
    assert_eq!(result.makespan, 9);
    assert!(result.logs.iter().any(|l| l.starts_with("[WARN]")));
}

#[tokio::test]
async fn log_lines_follow_family_templates() {
    let gateway = FakeGateway::new();
    gateway.respond(SolverKind::InfinityQ, response(vec![1, 2], 9.0));
    gateway.respond(SolverKind::Classical, response(vec![1, 2], 9.0));

    let orchestrator = Orchestrator::new(gateway);
    let report = orchestrator
        .execute(custom_config(vec![
            SolverParams::infinityq(),
            SolverParams::classical(),
        ]))
        .await
        .unwrap();

    let infinityq = report.outcomes[&SolverKind::InfinityQ].result().unwrap();
    assert_eq!(
        infinityq.logs[0],
        "[INFO] Starting InfinityQ solver for instance custom"
    );
    assert_eq!(infinityq.logs[1], "[INFO] QUBO Type: Automated");
    assert!(infinityq.logs.contains(&"[INFO] Execution time: 1.25s".to_string()));
    assert!(infinityq.logs.contains(&"[INFO] Solution energy: -2.50".to_string()));
    assert!(infinityq.logs.contains(&"[INFO] Makespan: 9".to_string()));

    let classical = report.outcomes[&SolverKind::Classical].result().unwrap();
    assert_eq!(
        classical.logs[1],
        "[INFO] Using NEH algorithm with local search"
    );
    // classical has no QUBO objective, so no energy line
    assert!(!classical.logs.iter().any(|l| l.contains("energy")));
}

#[tokio::test]
async fn events_trace_the_run_lifecycle() {
    let gateway = FakeGateway::new();
    gateway.respond(SolverKind::Quantum, response(vec![1, 2], 9.0));
    gateway.fail_status(SolverKind::InfinityQ, 500);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let orchestrator = Orchestrator::with_events(gateway, tx);
    orchestrator
        .execute(custom_config(vec![
            SolverParams::quantum(QuantumVariant::QbSolv),
            SolverParams::infinityq(),
        ]))
        .await
        .unwrap();

    let mut names = Vec::new();
    while let Ok(event) = rx.try_recv() {
        names.push(event.name());
    }

    assert_eq!(&names[..2], &["run:dispatched", "run:dispatched"]);
    assert_eq!(names.last(), Some(&"run:merged"));
    assert!(names.contains(&"run:solver:completed"));
    assert!(names.contains(&"run:solver:failed"));
}

#[tokio::test]
async fn duplicate_families_collapse_to_one_call() {
    let gateway = FakeGateway::new();
    gateway.respond(SolverKind::Quantum, response(vec![1, 2], 9.0));

    let orchestrator = Orchestrator::new(gateway.clone());
    let report = orchestrator
        .execute(custom_config(vec![
            SolverParams::quantum(QuantumVariant::QbSolv),
            SolverParams::quantum(QuantumVariant::LeapHybrid),
        ]))
        .await
        .unwrap();

    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(gateway.calls().len(), 1);
    assert_eq!(gateway.calls()[0].solver_type, "qbsolv");
}

#[tokio::test]
async fn cancellation_aborts_in_flight_calls() {
    let gateway = FakeGateway::new();
    gateway.respond(SolverKind::Classical, response(vec![1, 2], 9.0));
    gateway.delay(SolverKind::Classical, Duration::from_secs(30));

    let orchestrator = Orchestrator::new(gateway);
    let (handle, token) = cancel_pair();

    let run = tokio::spawn(async move {
        orchestrator
            .execute_with_cancel(
                custom_config(vec![SolverParams::classical()]),
                token,
            )
            .await
    });

    handle.cancel();
    let err = run.await.unwrap().unwrap_err();
    assert!(matches!(err, EngineError::Cancelled));
}
