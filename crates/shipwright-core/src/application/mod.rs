//! Application layer for Shipwright.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, PlaybookService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; rendering rules live
//! in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{PlaybookService, ScaffoldService};

pub use ports::{DescriptorLoader, Filesystem};

pub use error::ApplicationError;
