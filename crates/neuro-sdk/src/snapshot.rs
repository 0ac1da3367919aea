//! Offline implementation of the API traits.
//!
//! Reads descriptors from JSON files laid out under one directory:
//!
//! ```text
//! snapshot/
//!   jobs.json              [JobDescription]
//!   storage.json           {"path": [FileStatus]}
//!   telemetry/<job>.json   [JobTelemetry]
//!   progress/<job>.json    [JobDescription]   successive poll results
//! ```

use crate::api::{JobFilter, JobsApi, StorageApi};
use crate::{Error, Result};
use neuro_types::{FileStatus, JobDescription, JobTelemetry};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

pub struct SnapshotClient {
    root: PathBuf,
    poll_cursor: RefCell<HashMap<String, usize>>,
}

impl SnapshotClient {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            poll_cursor: RefCell::new(HashMap::new()),
        }
    }

    /// Snapshot directory inside a workspace data dir.
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("snapshot"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_json<T: DeserializeOwned>(&self, relative: &str) -> Result<Option<T>> {
        let path = self.root.join(relative);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content).map_err(|source| Error::Snapshot {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "read snapshot");
        Ok(Some(value))
    }

    fn all_jobs(&self) -> Result<Vec<JobDescription>> {
        Ok(self.read_json("jobs.json")?.unwrap_or_default())
    }
}

impl JobsApi for SnapshotClient {
    fn list(&self, filter: &JobFilter) -> Result<Vec<JobDescription>> {
        let jobs: Vec<_> = self
            .all_jobs()?
            .into_iter()
            .filter(|job| filter.matches(job))
            .collect();
        tracing::debug!(count = jobs.len(), "listed jobs");
        Ok(jobs)
    }

    fn status(&self, id_or_name: &str) -> Result<JobDescription> {
        let jobs = self.all_jobs()?;

        if let Some(job) = jobs.iter().find(|job| job.id == id_or_name) {
            return Ok(job.clone());
        }

        let by_name = jobs
            .into_iter()
            .filter(|job| job.name.as_deref() == Some(id_or_name))
            .next_back();

        match by_name {
            Some(job) => {
                tracing::debug!(name = id_or_name, id = %job.id, "resolved job name");
                Ok(job)
            }
            None => Err(Error::NotFound(format!("job '{}'", id_or_name))),
        }
    }

    fn poll(&self, id: &str) -> Result<JobDescription> {
        let snapshots: Option<Vec<JobDescription>> =
            self.read_json(&format!("progress/{}.json", id))?;

        let Some(snapshots) = snapshots.filter(|s| !s.is_empty()) else {
            return self.status(id);
        };

        let mut cursor = self.poll_cursor.borrow_mut();
        let index = cursor.entry(id.to_string()).or_insert(0);
        let current = (*index).min(snapshots.len() - 1);
        *index = current + 1;

        tracing::trace!(job = id, step = current, "poll");
        Ok(snapshots[current].clone())
    }

    fn telemetry(&self, id: &str) -> Result<Vec<JobTelemetry>> {
        self.read_json(&format!("telemetry/{}.json", id))?
            .ok_or_else(|| Error::NotFound(format!("telemetry for job '{}'", id)))
    }
}

impl StorageApi for SnapshotClient {
    fn ls(&self, path: &str) -> Result<Vec<FileStatus>> {
        let listings: BTreeMap<String, Vec<FileStatus>> =
            self.read_json("storage.json")?.unwrap_or_default();

        let key = normalize_storage_path(path);
        listings
            .into_iter()
            .find(|(listed, _)| normalize_storage_path(listed) == key)
            .map(|(_, files)| files)
            .ok_or_else(|| Error::NotFound(format!("storage path '{}'", path)))
    }
}

/// `storage:`, `storage://`, `/` and trailing slashes all name the same place.
fn normalize_storage_path(path: &str) -> String {
    let stripped = path
        .strip_prefix("storage://")
        .or_else(|| path.strip_prefix("storage:"))
        .unwrap_or(path);
    let trimmed = stripped.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", trimmed)
    }
}
