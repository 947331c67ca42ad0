//! Shipwright Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Shipwright
//! Compose-to-Ansible generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         shipwright-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, PlaybookService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Loader)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   shipwright-adapters (Infrastructure)  │
//! │ (LocalFilesystem, YamlDescriptorLoader) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ServiceDescriptor, GeneratedPlaybook,  │
//! │           ProjectScaffold)              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shipwright_core::application::{PlaybookService, ScaffoldService};
//!
//! // Adapters come from `shipwright-adapters`.
//! let scaffolder = ScaffoldService::new(filesystem.clone());
//! let emitter = PlaybookService::new(loader, filesystem);
//!
//! let descriptor = emitter.load_descriptor("docker-compose.yml").unwrap();
//! let scaffold = scaffolder.replace_scaffold("ansible-playbooks").unwrap();
//! emitter.emit(&descriptor, scaffold.playbooks_dir()).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PlaybookService, ScaffoldService,
        ports::{DescriptorLoader, Filesystem},
    };
    pub use crate::domain::{
        Descriptor, GeneratedPlaybook, ProjectScaffold, RestartPolicy, Section, SectionValue,
        ServiceDescriptor, ServiceName,
    };
    pub use crate::error::{ShipwrightError, ShipwrightResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
