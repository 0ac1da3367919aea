//! Record types shared by the neuro SDK and CLI.
//!
//! Everything in here is a read-only snapshot of what the platform API
//! returns: job descriptors, storage listings and telemetry samples.
//! Formatters consume these records and never mutate them.

pub mod error;
pub mod image;
pub mod job;
pub mod storage;
pub mod telemetry;
mod util;

pub use error::{Error, Result};
pub use image::ImageNameParser;
pub use job::{Container, HttpPort, JobDescription, JobStatus, JobStatusHistory, Resources};
pub use storage::{FilePermission, FileStatus, FileStatusType};
pub use telemetry::JobTelemetry;
pub use util::parse_timestamp;
