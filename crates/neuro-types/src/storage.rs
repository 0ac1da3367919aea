use serde::{Deserialize, Serialize};

/// Kind of a storage entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileStatusType {
    File,
    Directory,
}

/// Access level the current user holds on a storage entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilePermission {
    Read,
    Write,
    Manage,
}

impl FilePermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilePermission::Read => "read",
            FilePermission::Write => "write",
            FilePermission::Manage => "manage",
        }
    }
}

/// One entry of a storage listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatus {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub file_type: FileStatusType,
    /// Unix timestamp, seconds
    pub modification_time: i64,
    pub permission: FilePermission,
}

impl FileStatus {
    pub fn new(
        name: impl Into<String>,
        size: u64,
        file_type: FileStatusType,
        modification_time: i64,
        permission: FilePermission,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            file_type,
            modification_time,
            permission,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.file_type == FileStatusType::Directory
    }

    pub fn is_file(&self) -> bool {
        self.file_type == FileStatusType::File
    }
}
