//! Offline schedule reconstruction specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn rebuilds_the_worked_example() {
    let file = MatrixFile::new("3 2\n1 4\n");
    fq().args(["schedule", file.path(), "--sequence", "0,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Makespan: 9"));
}

#[test]
fn one_indexed_sequence_gives_the_same_makespan() {
    let file = MatrixFile::new("3 2\n1 4\n");

    let zero = fq()
        .args(["schedule", file.path(), "--sequence", "0,1"])
        .output()
        .unwrap();
    let one = fq()
        .args(["schedule", file.path(), "--sequence", "1,2"])
        .output()
        .unwrap();

    assert!(zero.status.success());
    assert_eq!(zero.stdout, one.stdout);
}

#[test]
fn defaults_to_file_order() {
    let file = MatrixFile::new("3 2\n1 4\n");
    fq().args(["schedule", file.path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequence: 1 2"))
        .stdout(predicate::str::contains("Makespan: 9"));
}

#[test]
fn json_output_lists_all_operations() {
    let file = MatrixFile::new("3 2\n1 4\n");
    fq().args(["schedule", file.path(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"makespan\": 9"))
        .stdout(predicate::str::contains("\"operations\""));
}

#[test]
fn rejects_duplicate_jobs_in_sequence() {
    let file = MatrixFile::new("3 2\n1 4\n");
    fq().args(["schedule", file.path(), "--sequence", "1,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("appears more than once"));
}

#[test]
fn rejects_wrong_length_sequence() {
    let file = MatrixFile::new("3 2\n1 4\n");
    fq().args(["schedule", file.path(), "--sequence", "1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 2"));
}
