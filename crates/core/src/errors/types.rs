//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for verdict operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for verdict operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A wrong-variant accessor was used on an `Outcome`
    #[error("invalid state: {message}")]
    InvalidState { message: String },

    /// A described action failed inside a safe executor
    #[error("{description} failed: {message}")]
    Execution {
        description: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A foreign error carried through the verdict error channel
    #[error("{message}")]
    Wrapped {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An action panicked and the panic was captured
    #[error("panicked: {message}")]
    Panic { message: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// File system operations
    #[error("file system {operation} operation failed for '{}': {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },
}
