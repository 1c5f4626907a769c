//! Run argument validation specs (offline paths only)

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn run_without_solvers_is_rejected() {
    fq().args(["run", "--instance", "tai20x5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no solvers enabled"));
}

#[test]
fn custom_instance_requires_matrix_file() {
    fq().args(["run", "--instance", "custom", "--classical"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires --matrix"));
}

#[test]
fn matrix_flag_requires_custom_instance() {
    let file = MatrixFile::new("3 2\n1 4\n");
    fq().args(["run", "--instance", "tai20x5", "--classical", "--matrix", file.path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only valid with --instance custom"));
}

#[test]
fn unknown_quantum_variant_is_rejected() {
    fq().args(["run", "--quantum", "advantage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown quantum variant"));
}

#[test]
fn unknown_qubo_type_is_rejected() {
    fq().args(["run", "--infinityq", "--qubo-type", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown QUBO type"));
}

#[test]
fn unreadable_custom_matrix_fails_before_any_network_call() {
    fq().args([
        "run",
        "--instance",
        "custom",
        "--matrix",
        "/nonexistent/matrix.txt",
        "--classical",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("reading /nonexistent/matrix.txt"));
}
