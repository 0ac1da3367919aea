use crate::context::{ExecutionContext, TerminalInfo};
use crate::types::ColorMode;
use anyhow::Result;
use neuro_testing::fixtures::sample_storage;
use neuro_testing::SnapshotWriter;
use tempfile::TempDir;

/// Data directory with a snapshot for handler tests. Color is off unless a
/// test asks for it.
pub struct Workspace {
    dir: TempDir,
    snapshot: SnapshotWriter,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let snapshot = SnapshotWriter::new(dir.path().join("snapshot"));
        snapshot.storage("storage:", &sample_storage())?;
        Ok(Self { dir, snapshot })
    }

    pub fn snapshot(&self) -> &SnapshotWriter {
        &self.snapshot
    }

    pub fn context_with(&self, is_tty: bool, color: ColorMode, quiet: bool) -> ExecutionContext {
        let terminal = TerminalInfo {
            is_tty,
            ..TerminalInfo::plain()
        };
        ExecutionContext::new(self.dir.path().to_path_buf(), Some(color), quiet, terminal)
    }

    pub fn context(&self, is_tty: bool) -> ExecutionContext {
        self.context_with(is_tty, ColorMode::Never, false)
    }
}
