//! Value objects: small, immutable, validated-on-construction types.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

// ============================================================================
// ServiceName
// ============================================================================

/// Name of a service, as declared by its key in the descriptor.
///
/// The name doubles as the playbook file stem, so anything that would let a
/// write escape the playbooks directory is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let invalid = |reason: &str| DomainError::InvalidServiceName {
            name: name.clone(),
            reason: reason.into(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name == "." || name == ".." {
            return Err(invalid("name cannot be a relative path component"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.chars().any(char::is_control) {
            return Err(invalid("name cannot contain control characters"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the playbook generated for this service.
    pub fn playbook_file_name(&self) -> String {
        format!("{}.yml", self.0)
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Section
// ============================================================================

/// Optional per-service sections, in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Command,
    Ports,
    Networks,
    Volumes,
    Labels,
    Environment,
}

impl Section {
    /// Every section, in rendering order.
    pub const ALL: [Section; 6] = [
        Section::Command,
        Section::Ports,
        Section::Networks,
        Section::Volumes,
        Section::Labels,
        Section::Environment,
    ];

    /// Key used both in the descriptor and in the generated playbook.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Ports => "ports",
            Self::Networks => "networks",
            Self::Volumes => "volumes",
            Self::Labels => "labels",
            Self::Environment => "environment",
        }
    }

    /// Whether sequence items are wrapped in single quotes.
    pub const fn quotes_items(self) -> bool {
        !matches!(self, Self::Volumes)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// SectionValue
// ============================================================================

/// Content of an optional section, in the shape the descriptor used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionValue {
    /// `- item` entries, e.g. `ports: ["8080:80"]`.
    Sequence(Vec<String>),
    /// `key: value` entries in document order, e.g. `environment: {A: "1"}`.
    Mapping(Vec<(String, String)>),
}

// ============================================================================
// RestartPolicy
// ============================================================================

/// Restart policy of a service.
///
/// Anything other than a plain string in the descriptor (for example a
/// structured restart spec) collapses to [`RestartPolicy::Unconditional`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestartPolicy {
    /// Token copied verbatim, e.g. `on-failure`.
    Token(String),
    /// Fallback for non-string shapes; rendered as `always`.
    Unconditional,
}

impl RestartPolicy {
    pub const UNCONDITIONAL_TOKEN: &'static str = "always";

    pub fn token(&self) -> &str {
        match self {
            Self::Token(token) => token,
            Self::Unconditional => Self::UNCONDITIONAL_TOKEN,
        }
    }
}

impl fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
