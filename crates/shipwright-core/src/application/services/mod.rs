//! Application services - orchestrate use cases.
//!
//! `ScaffoldService` replaces the project skeleton; `PlaybookService` loads
//! the descriptor and emits one playbook per service.

pub mod playbook_service;
pub mod scaffold_service;

pub use playbook_service::PlaybookService;
pub use scaffold_service::ScaffoldService;
