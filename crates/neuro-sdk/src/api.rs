use crate::Result;
use neuro_types::{FileStatus, JobDescription, JobStatus, JobTelemetry};
use std::collections::HashSet;

/// Server-side filters for job listings
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Empty means every status
    pub statuses: HashSet<JobStatus>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl JobFilter {
    pub fn matches(&self, job: &JobDescription) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&job.status) {
            return false;
        }
        if let Some(name) = &self.name
            && job.name.as_deref() != Some(name.as_str())
        {
            return false;
        }
        if let Some(description) = &self.description
            && job.description.as_deref() != Some(description.as_str())
        {
            return false;
        }
        true
    }
}

/// Jobs endpoint of the platform API
pub trait JobsApi {
    fn list(&self, filter: &JobFilter) -> Result<Vec<JobDescription>>;

    /// Look a job up by id, or by name (the most recent job with that name).
    fn status(&self, id_or_name: &str) -> Result<JobDescription>;

    /// Next snapshot of a job that is being watched. Each call may return a
    /// newer state than the previous one.
    fn poll(&self, id: &str) -> Result<JobDescription>;

    fn telemetry(&self, id: &str) -> Result<Vec<JobTelemetry>>;
}

/// Storage endpoint of the platform API
pub trait StorageApi {
    fn ls(&self, path: &str) -> Result<Vec<FileStatus>>;
}
