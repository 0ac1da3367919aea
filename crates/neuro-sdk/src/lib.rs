//! Client side of the neuro platform.
//!
//! [`JobsApi`] and [`StorageApi`] describe what the CLI needs from the
//! platform. [`SnapshotClient`] answers them from JSON files on disk.

pub mod api;
pub mod config;
pub mod error;
pub mod snapshot;

pub use api::{JobFilter, JobsApi, StorageApi};
pub use config::{AuthConfig, ColorChoice, Config, DisplayConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use snapshot::SnapshotClient;
