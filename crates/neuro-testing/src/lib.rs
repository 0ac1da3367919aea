//! Testing infrastructure for neuro integration tests.
//!
//! - `TestWorld`: isolated data directory plus a way to run the binary in it
//! - `fixtures`: record builders and the snapshot file writer

pub mod fixtures;
pub mod world;

pub use fixtures::{JobBuilder, SnapshotWriter};
pub use world::{CliResult, TestWorld};
