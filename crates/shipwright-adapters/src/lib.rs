//! Infrastructure adapters for Shipwright.
//!
//! This crate implements the ports defined in
//! `shipwright-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod descriptor;
pub mod filesystem;

// Re-export commonly used adapters
pub use descriptor::YamlDescriptorLoader;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
