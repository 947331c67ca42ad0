//! `shipwright scaffold`: recreate the empty Ansible project skeleton.

use serde::Serialize;
use tracing::instrument;

use shipwright_adapters::LocalFilesystem;
use shipwright_core::application::ScaffoldService;

use crate::{cli::ScaffoldArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct ScaffoldSummary {
    status: &'static str,
    base_dir: String,
    inventory: String,
    playbooks_dir: String,
    roles_dir: String,
}

/// Replace the base directory with a fresh skeleton.
#[instrument(skip_all)]
pub fn execute(args: ScaffoldArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let base_dir = args.output.unwrap_or(config.paths.base_dir);

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let scaffold = service.replace_scaffold(&base_dir)?;

    if output.is_json() {
        output.json(&ScaffoldSummary {
            status: "ok",
            base_dir: scaffold.root().display().to_string(),
            inventory: scaffold.inventory_file().display().to_string(),
            playbooks_dir: scaffold.playbooks_dir().display().to_string(),
            roles_dir: scaffold.roles_dir().display().to_string(),
        })?;
        return Ok(());
    }

    output.success(&format!(
        "Created folder structure at {}",
        scaffold.root().display()
    ))?;

    Ok(())
}
