//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Writing config and snapshot files into it
//! - Executing the CLI against it

use crate::fixtures::SnapshotWriter;
use anyhow::Result;
use assert_cmd::Command;
use neuro_sdk::Config;
use neuro_types::{FileStatus, JobDescription, JobTelemetry};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use neuro_testing::{JobBuilder, TestWorld};
///
/// let world = TestWorld::new().with_jobs(&[JobBuilder::new("job-1").build()]);
///
/// let result = world.run(&["ps"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    snapshot: SnapshotWriter,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".neuro");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        let snapshot = SnapshotWriter::new(data_dir.join("snapshot"));

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            snapshot,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn snapshot(&self) -> &SnapshotWriter {
        &self.snapshot
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn with_config(self, config: &Config) -> Self {
        config
            .save_to(&self.data_dir.join("config.toml"))
            .expect("Failed to write config");
        self
    }

    pub fn with_jobs(self, jobs: &[JobDescription]) -> Self {
        self.snapshot.jobs(jobs).expect("Failed to write jobs");
        self
    }

    pub fn with_storage(self, path: &str, files: &[FileStatus]) -> Self {
        self.snapshot
            .storage(path, files)
            .expect("Failed to write storage listing");
        self
    }

    pub fn with_telemetry(self, job_id: &str, samples: &[JobTelemetry]) -> Self {
        self.snapshot
            .telemetry(job_id, samples)
            .expect("Failed to write telemetry");
        self
    }

    pub fn with_progress(self, job_id: &str, states: &[JobDescription]) -> Self {
        self.snapshot
            .progress(job_id, states)
            .expect("Failed to write progress");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// Color variables from the developer's shell are removed so output
    /// does not depend on who runs the tests.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("LS_COLORS")
            .env_remove("LSCOLORS")
            .env_remove("NEURO_PATH")
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `neuro` binary and capture its output.
    ///
    /// # Note
    /// Uses `Command::cargo_bin()`, which requires the `CARGO_BIN_EXE_`
    /// variables that `cargo test` sets for integration tests.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("neuro")
            .map_err(|e| anyhow::anyhow!("Failed to find neuro binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Stdout split into lines, trailing whitespace removed.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().map(str::trim_end).collect()
    }
}
