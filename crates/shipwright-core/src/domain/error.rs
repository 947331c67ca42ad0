use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised while turning descriptor content into domain values.
///
/// All variants are cloneable and carry enough context to point the user
/// at the offending service.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Service '{service}' is missing required field '{field}'")]
    MissingRequiredField {
        service: String,
        field: &'static str,
    },

    #[error("Invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },

    #[error("Service '{service}': '{field}' contains control characters")]
    ControlCharacters { service: String, field: String },

    #[error("Service '{name}' is declared more than once")]
    DuplicateService { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { service, field } => vec![
                format!("Add '{field}' to service '{service}'"),
                "Example:".into(),
                format!("  {service}:"),
                format!("    {field}: nginx:latest"),
                "Services built from a Dockerfile need an explicit image to deploy".into(),
            ],
            Self::InvalidServiceName { name, .. } => vec![
                format!("Rename service '{name}' in the descriptor"),
                "Use letters, digits, '.', '_' and '-' only".into(),
            ],
            Self::ControlCharacters { service, field } => vec![
                format!("Remove line breaks and tabs from '{field}' in service '{service}'"),
                "Image names, restart policies, volume entries and mapping keys are written unquoted".into(),
            ],
            Self::DuplicateService { name } => vec![
                format!("Remove or rename the second '{name}' entry"),
            ],
        }
    }

    /// Error category for CLI display and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. }
            | Self::InvalidServiceName { .. }
            | Self::ControlCharacters { .. }
            | Self::DuplicateService { .. } => ErrorCategory::MissingField,
        }
    }
}
