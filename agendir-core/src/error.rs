//! Error types for the agendir ecosystem.

use thiserror::Error;

/// Errors that can occur in agendir operations.
#[derive(Error, Debug)]
pub enum AgendirError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No account snapshot at {0}")]
    SnapshotNotFound(String),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Source '{0}' not found in PATH. Install it with:\n  cargo install agendir-source-{0}")]
    SourceNotInstalled(String),

    #[error("Source request timed out after {0}s")]
    SourceTimeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for agendir operations.
pub type AgendirResult<T> = Result<T, AgendirError>;
