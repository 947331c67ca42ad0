//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `shipwright-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::Descriptor;
use crate::error::ShipwrightResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `shipwright_adapters::filesystem::LocalFilesystem` (production)
/// - `shipwright_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ShipwrightResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ShipwrightResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a directory and all contents. Fails if `path` is not a directory.
    fn remove_dir_all(&self, path: &Path) -> ShipwrightResult<()>;
}

/// Port for reading a descriptor.
///
/// Implemented by:
/// - `shipwright_adapters::descriptor::YamlDescriptorLoader`
#[cfg_attr(test, mockall::automock)]
pub trait DescriptorLoader: Send + Sync {
    /// Read and parse the descriptor at `path`.
    ///
    /// Errors: `InputNotFound` when the file is absent, `ParseError` when it
    /// is malformed, and domain errors for invalid service entries.
    fn load(&self, path: &Path) -> ShipwrightResult<Descriptor>;
}
