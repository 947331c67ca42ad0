//! `shipwright init`: create a default configuration file.

use std::path::PathBuf;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the built-in defaults as TOML to the active config location.
pub fn execute(args: InitArgs, global: GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let config_path = target_path(&global);

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = render_default()?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

/// `--config` wins over the platform default.
pub fn target_path(global: &GlobalArgs) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(AppConfig::config_path)
}

fn render_default() -> CliResult<String> {
    toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn global_with(config: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config,
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn explicit_config_path_wins() {
        let path = PathBuf::from("/tmp/custom.toml");
        assert_eq!(target_path(&global_with(Some(path.clone()))), path);
    }

    #[test]
    fn default_config_is_valid_toml() {
        let text = render_default().unwrap();
        assert!(text.contains("[paths]"));
        assert!(text.contains("descriptor = \"docker-compose.yml\""));
    }
}
