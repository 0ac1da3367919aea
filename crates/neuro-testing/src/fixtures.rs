//! Record builders and snapshot layout.
//!
//! Files land where `SnapshotClient` looks for them:
//! `jobs.json`, `storage.json`, `telemetry/<id>.json`, `progress/<id>.json`.

use anyhow::{Context, Result};
use neuro_types::{
    Container, FilePermission, FileStatus, FileStatusType, HttpPort, JobDescription, JobStatus,
    JobStatusHistory, JobTelemetry, Resources,
};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub const CREATED_AT: &str = "2018-09-25T12:28:21.298672+00:00";
pub const STARTED_AT: &str = "2018-09-25T12:28:59.759433+00:00";

/// Fluent builder for `JobDescription`. Defaults to a pending job owned by
/// `owner`, created at [`CREATED_AT`].
#[derive(Debug, Clone)]
pub struct JobBuilder {
    job: JobDescription,
}

impl JobBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            job: JobDescription {
                id: id.to_string(),
                name: None,
                status: JobStatus::Pending,
                owner: "owner".to_string(),
                description: None,
                container: Container {
                    image: "ubuntu:latest".to_string(),
                    command: None,
                    resources: Resources::new(16, 0.1),
                    http: None,
                    ssh_port: None,
                    env: Default::default(),
                },
                history: JobStatusHistory {
                    status: JobStatus::Pending,
                    reason: None,
                    description: None,
                    created_at: CREATED_AT.to_string(),
                    started_at: None,
                    finished_at: None,
                },
                http_url: None,
                ssh_server: None,
                internal_hostname: None,
                is_preemptible: false,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.job.name = Some(name.to_string());
        self
    }

    /// Sets both the job status and the history status.
    pub fn status(mut self, status: JobStatus) -> Self {
        self.job.status = status;
        self.job.history.status = status;
        if status != JobStatus::Pending && self.job.history.started_at.is_none() {
            self.job.history.started_at = Some(STARTED_AT.to_string());
        }
        if status.is_finished() && self.job.history.finished_at.is_none() {
            self.job.history.finished_at = Some(STARTED_AT.to_string());
        }
        self
    }

    pub fn reason(mut self, reason: &str) -> Self {
        self.job.history.reason = Some(reason.to_string());
        self
    }

    pub fn failure(mut self, description: &str) -> Self {
        self.job.history.description = Some(description.to_string());
        self
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.job.owner = owner.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.job.description = Some(description.to_string());
        self
    }

    pub fn image(mut self, image: &str) -> Self {
        self.job.container.image = image.to_string();
        self
    }

    pub fn command(mut self, command: &str) -> Self {
        self.job.container.command = Some(command.to_string());
        self
    }

    pub fn resources(mut self, resources: Resources) -> Self {
        self.job.container.resources = resources;
        self
    }

    pub fn created_at(mut self, ts: &str) -> Self {
        self.job.history.created_at = ts.to_string();
        self
    }

    pub fn http(mut self, url: &str, requires_auth: bool) -> Self {
        self.job.http_url = Some(url.to_string());
        self.job.container.http = Some(HttpPort {
            port: 80,
            requires_auth,
        });
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.job
            .container
            .env
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn preemptible(mut self, value: bool) -> Self {
        self.job.is_preemptible = value;
        self
    }

    pub fn build(self) -> JobDescription {
        self.job
    }
}

pub fn file(name: &str, size: u64, modified: i64, permission: FilePermission) -> FileStatus {
    FileStatus::new(name, size, FileStatusType::File, modified, permission)
}

pub fn dir(name: &str, modified: i64, permission: FilePermission) -> FileStatus {
    FileStatus::new(name, 0, FileStatusType::Directory, modified, permission)
}

/// A small home directory: one folder and two files of different sizes.
pub fn sample_storage() -> Vec<FileStatus> {
    vec![
        file("README.md", 1024, 1_514_775_600, FilePermission::Read),
        dir("data", 1_488_520_983, FilePermission::Manage),
        file("model.pt", 524_288, 1_539_177_010, FilePermission::Write),
    ]
}

pub fn telemetry(timestamp: f64, cpu: f64, memory: f64) -> JobTelemetry {
    JobTelemetry {
        timestamp,
        cpu,
        memory,
        gpu_duty_cycle: None,
        gpu_memory: None,
    }
}

/// Writes snapshot JSON under one root directory.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    root: PathBuf,
}

impl SnapshotWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn write_json(&self, relative: &str, value: &Value) -> Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    pub fn jobs(&self, jobs: &[JobDescription]) -> Result<()> {
        self.write_json("jobs.json", &serde_json::to_value(jobs)?)
    }

    /// Adds one listing, keeping the ones already written.
    pub fn storage(&self, path: &str, files: &[FileStatus]) -> Result<()> {
        let existing = self.root.join("storage.json");
        let mut listings = if existing.exists() {
            serde_json::from_str(&std::fs::read_to_string(&existing)?)?
        } else {
            serde_json::Map::new()
        };
        listings.insert(path.to_string(), serde_json::to_value(files)?);
        self.write_json("storage.json", &Value::Object(listings))
    }

    pub fn telemetry(&self, job_id: &str, samples: &[JobTelemetry]) -> Result<()> {
        self.write_json(
            &format!("telemetry/{}.json", job_id),
            &serde_json::to_value(samples)?,
        )
    }

    /// Successive states returned by `poll`.
    pub fn progress(&self, job_id: &str, states: &[JobDescription]) -> Result<()> {
        self.write_json(
            &format!("progress/{}.json", job_id),
            &serde_json::to_value(states)?,
        )
    }

    /// Raw file contents, for malformed-input tests.
    pub fn raw(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builder_fills_history_for_finished_jobs() {
        let job = JobBuilder::new("job-1").status(JobStatus::Failed).build();
        assert_eq!(job.history.status, JobStatus::Failed);
        assert_eq!(job.history.started_at.as_deref(), Some(STARTED_AT));
        assert_eq!(job.history.finished_at.as_deref(), Some(STARTED_AT));
    }

    #[test]
    fn test_storage_listings_accumulate() -> Result<()> {
        let dir = TempDir::new()?;
        let writer = SnapshotWriter::new(dir.path());
        writer.storage("storage:", &sample_storage())?;
        writer.storage("storage:data", &[])?;

        let content = std::fs::read_to_string(dir.path().join("storage.json"))?;
        let value: Value = serde_json::from_str(&content)?;
        assert_eq!(value["storage:"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["storage:data"].as_array().map(Vec::len), Some(0));
        Ok(())
    }
}
