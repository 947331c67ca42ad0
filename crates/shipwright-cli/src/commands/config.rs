//! `shipwright config`: inspect configuration.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    commands::init::target_path,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                output.raw(&to_toml(&config)?)?;
            }
        }

        ConfigCommands::Path => {
            let path = target_path(&global);
            if output.is_json() {
                output.json(&serde_json::json!({
                    "path": path.display().to_string(),
                    "exists": path.exists(),
                }))?;
            } else {
                output.raw(&path.display().to_string())?;
            }
        }
    }

    Ok(())
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn toml_lists_both_sections() {
        let text = to_toml(&AppConfig::default()).unwrap();
        assert!(text.contains("[paths]"));
        assert!(text.contains("[output]"));
    }

    #[test]
    fn toml_reflects_overrides() {
        let mut cfg = AppConfig::default();
        cfg.paths.base_dir = PathBuf::from("deploy");
        assert!(to_toml(&cfg).unwrap().contains("base_dir = \"deploy\""));
    }
}
