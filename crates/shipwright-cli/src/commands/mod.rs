//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core service calls and report results
//! through the [`crate::output::OutputManager`]. No business logic lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod scaffold;
