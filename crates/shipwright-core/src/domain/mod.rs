//! Core domain layer for Shipwright.
//!
//! Pure data and rendering: the parsed descriptor, the playbook generated for
//! each service, and the layout of the Ansible project skeleton. No I/O lives
//! here; reading the descriptor and writing files go through the ports in
//! [`crate::application::ports`].
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: Built once, validated on construction

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    descriptor::Descriptor,
    playbook::{CONTAINER_MODULE, GeneratedPlaybook},
    project_structure::{
        DirectoryToCreate, FileToWrite, FsEntry, INVENTORY_HOSTS, ProjectScaffold,
    },
    service::{ServiceDescriptor, ServiceDescriptorBuilder},
};

pub use error::DomainError;

pub use value_objects::{RestartPolicy, Section, SectionValue, ServiceName};
