use std::io;
use std::path::PathBuf;

/// Result type for sync operations
pub type BumpMonitoringResult<T> = Result<T, BumpMonitoringError>;

/// Errors raised while collecting or copying monitoring configs
#[derive(thiserror::Error, Debug)]
pub enum BumpMonitoringError {
    /// A configured subpath (or a directory beneath it) could not be resolved
    #[error("Failed to get the file info for {path:?}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed reading file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed writing file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid extension pattern {pattern:?}: {message}")]
    InvalidExtension { pattern: String, message: String },
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

impl BumpMonitoringError {
    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            BumpMonitoringError::PathResolution { path, .. }
            | BumpMonitoringError::Read { path, .. }
            | BumpMonitoringError::Write { path, .. } => Some(path),
            BumpMonitoringError::InvalidExtension { .. }
            | BumpMonitoringError::LoggingInitialization(_) => None,
        }
    }
}
