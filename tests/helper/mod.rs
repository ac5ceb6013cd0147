use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Create a temporary working directory holding `library.json` with `content`.
pub fn create_project(content: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("library.json"), content).unwrap();
    temp_dir
}

/// Run the binary with `dir` as its working directory.
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tinywot-version-flags"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}
