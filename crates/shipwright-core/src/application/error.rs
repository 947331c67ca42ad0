//! Application layer errors.
//!
//! These errors represent failures at the edges: reading the descriptor and
//! touching the filesystem. Descriptor content violations are `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading input or materialising output.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The descriptor file does not exist.
    #[error("Descriptor not found: {path}")]
    InputNotFound { path: PathBuf },

    /// The descriptor is not valid YAML or does not have the expected shape.
    #[error("Failed to parse {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Adapter state lock was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InputNotFound { path } => vec![
                format!("No file at {}", path.display()),
                "Run from the directory containing docker-compose.yml".into(),
                "Or pass the descriptor explicitly: shipwright generate --file <FILE>".into(),
            ],
            Self::ParseError { reason, .. } => vec![
                format!("Parser said: {reason}"),
                "The file must be YAML with a top-level 'services' mapping".into(),
                "Anchors, extension fields and ${VAR} interpolation are not supported".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "The output path must be a directory (or not exist yet)".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputNotFound { .. } => ErrorCategory::InputNotFound,
            Self::ParseError { .. } => ErrorCategory::Parse,
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
