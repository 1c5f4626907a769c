//! Shared helpers for CLI specs

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// The fq binary, with config-affecting env cleared.
pub fn fq() -> Command {
    let mut cmd = Command::cargo_bin("fq").unwrap();
    cmd.env_remove("FQ_API_URL");
    cmd
}

/// A temp directory holding a matrix file.
pub struct MatrixFile {
    _dir: TempDir,
    path: PathBuf,
}

impl MatrixFile {
    pub fn new(content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrix.txt");
        std::fs::write(&path, content).unwrap();
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &str {
        self.path.to_str().unwrap()
    }
}
