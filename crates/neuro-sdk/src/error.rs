use thiserror::Error;

/// Result type for neuro-sdk operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the SDK layer
#[derive(Debug, Error)]
pub enum Error {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot payload is not valid JSON for the expected record
    #[error("Malformed snapshot {path}: {source}")]
    Snapshot {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested job, path or telemetry stream does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Types(#[from] neuro_types::Error),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
