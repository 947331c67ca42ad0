//! Unified error handling for Shipwright Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Shipwright Core operations.
#[derive(Debug, Error, Clone)]
pub enum ShipwrightError {
    /// Errors from the domain layer (descriptor content violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (loading, filesystem).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ShipwrightError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Shipwright".into(),
                "Please report this issue at: https://github.com/cosecruz/shipwright/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display and exit-code purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories, one per failure kind a caller may want to script on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The descriptor file does not exist.
    InputNotFound,
    /// The descriptor is not valid YAML or lacks the `services` mapping.
    Parse,
    /// A service entry is missing a required field or has an unusable name.
    MissingField,
    /// Reading or writing the output tree failed.
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type ShipwrightResult<T> = Result<T, ShipwrightError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_image_is_missing_field() {
        let err: ShipwrightError = DomainError::MissingRequiredField {
            service: "web".into(),
            field: "image",
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::MissingField);
        assert!(err.to_string().contains("web"));
    }

    #[test]
    fn input_not_found_category() {
        let err: ShipwrightError = ApplicationError::InputNotFound {
            path: PathBuf::from("docker-compose.yml"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::InputNotFound);
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("docker-compose.yml"))
        );
    }

    #[test]
    fn internal_suggests_reporting() {
        let err = ShipwrightError::Internal {
            message: "lock poisoned".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.suggestions().iter().any(|s| s.contains("report")));
    }
}
