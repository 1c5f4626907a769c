//! Instance catalogue specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn list_shows_all_benchmark_instances() {
    fq().args(["instance", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tai20x5"))
        .stdout(predicate::str::contains("tai50x10"))
        .stdout(predicate::str::contains("Taillard 20×5"))
        .stdout(predicate::str::contains("custom"));
}

#[test]
fn show_renders_matrix_with_totals() {
    fq().args(["instance", "show", "tai20x5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Taillard 20×5"))
        .stdout(predicate::str::contains("Job 20"))
        .stdout(predicate::str::contains("20 jobs x 5 machines"));
}

#[test]
fn show_is_deterministic() {
    let first = fq().args(["instance", "show", "tai20x5"]).output().unwrap();
    let second = fq().args(["instance", "show", "tai20x5"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn show_emits_json_matrix() {
    fq().args(["instance", "show", "tai20x10", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"jobs\": 20"))
        .stdout(predicate::str::contains("\"machines\": 10"))
        .stdout(predicate::str::contains("\"processing_times\""));
}

#[test]
fn show_rejects_unknown_instance() {
    fq().args(["instance", "show", "tai99x9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown instance 'tai99x9'"));
}
