//! Problem-input validation specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn validate_accepts_well_formed_matrix() {
    let file = MatrixFile::new("3 2\n1 4\n");
    fq().args(["matrix", "validate", file.path(), "--jobs", "2", "--machines", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 2 jobs x 2 machines"));
}

#[test]
fn validate_rejects_row_count_mismatch() {
    let file = MatrixFile::new("3 2\n1 4\n");
    fq().args(["matrix", "validate", file.path(), "--jobs", "3", "--machines", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 3 rows of data, got 2"));
}

#[test]
fn validate_rejects_non_integer_cell() {
    let file = MatrixFile::new("3 x\n1 4\n");
    fq().args(["matrix", "validate", file.path(), "--jobs", "2", "--machines", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid processing time 'x'"));
}

#[test]
fn validate_rejects_too_few_machines() {
    let file = MatrixFile::new("3\n1\n");
    fq().args(["matrix", "validate", file.path(), "--jobs", "2", "--machines", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("machines must be at least 2"));
}

#[test]
fn random_is_reproducible_with_seed() {
    let args = ["matrix", "random", "--jobs", "4", "--machines", "3", "--seed", "11"];
    let first = fq().args(args).output().unwrap();
    let second = fq().args(args).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let text = String::from_utf8(first.stdout).unwrap();
    assert_eq!(text.trim().lines().count(), 4);
}
