//! Common test utilities for embedgen CLI tests.
//!
//! Provides `TestEnv`: an isolated project directory plus helpers to lay
//! out resource directories and run the binary.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running an embedgen CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON events
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| serde_json::from_str(line).expect("stdout line is not JSON"))
            .collect()
    }
}

/// Isolated project directory with the embedgen binary
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_embedgen")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file (creating parent directories)
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> &Self {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.root.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("EMBEDGEN_ROOT")
            .env_remove("EMBEDGEN_ON_COLLISION")
            .env_remove("EMBEDGEN_GENERATED_BY");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("Failed to execute embedgen"))
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Two-group profile used by most CLI tests
pub const BENCH_PROFILE: &str = r#"
[[artifact]]
name = "bench"
output = "include/bench_constants.hpp"

[[artifact.constant]]
name = "BENCH_QUERIES_COUNT"
value = 2
counts = "BENCH_QUERIES"

[[artifact.group]]
name = "BENCH_QUERIES"
path = "queries"

[[artifact.group]]
name = "BENCH_SCHEMA"
path = "schema"
terminator = false
"#;

/// Lay out the bench profile with its resources
pub fn bench_env() -> TestEnv {
    let env = TestEnv::new();
    env.write("embedgen.toml", BENCH_PROFILE)
        .write("queries/q1.sql", "SEL")
        .write("queries/q2.sql", "*")
        .write("schema/t.sql", [1u8, 2]);
    env
}
