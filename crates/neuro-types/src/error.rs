use thiserror::Error;

/// Result type for neuro-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Error)]
pub enum Error {
    /// Timestamp is neither RFC 3339 nor a naive ISO-8601 local time
    #[error("invalid timestamp '{0}'")]
    Timestamp(String),

    /// Registry URL could not be reduced to a host name
    #[error("invalid registry url '{0}'")]
    RegistryUrl(String),
}
