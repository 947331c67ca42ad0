pub mod descriptor;
pub mod playbook;
pub mod project_structure;
pub mod service;

pub use crate::domain::DomainError;
pub use descriptor::Descriptor;
pub use playbook::GeneratedPlaybook;
pub use project_structure::ProjectScaffold;
pub use service::{ServiceDescriptor, ServiceDescriptorBuilder};
