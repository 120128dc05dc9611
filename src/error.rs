use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corpus root directory not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Access denied for {path}: {source}")]
    Access {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed corpus file {path}: {message}")]
    MalformedFile { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl ProcessingError {
    /// Recoverable errors are skipped with a warning; fatal errors abort the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ProcessingError::Access { .. } | ProcessingError::MalformedFile { .. }
        )
    }
}
