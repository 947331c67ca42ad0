//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags and their `SHIPWRIGHT_FILE` / `SHIPWRIGHT_OUTPUT` env
//!    fallbacks (handled at the call-site, not here)
//! 2. `SHIPWRIGHT__<SECTION>__<KEY>` environment variables
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Descriptor read when neither `--file` nor config names one.
pub const DEFAULT_DESCRIPTOR: &str = "docker-compose.yml";

/// Project directory written when neither `--output` nor config names one.
pub const DEFAULT_BASE_DIR: &str = "ansible-playbooks";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Input and output locations.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub descriptor: PathBuf,
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            descriptor: PathBuf::from(DEFAULT_DESCRIPTOR),
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// `config_file` is the path the user passed via `--config`; `None` falls
    /// back to [`Self::config_path`].  A missing file is not an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::load_from(&path, Environment::with_prefix("SHIPWRIGHT"))
    }

    fn load_from(path: &Path, environment: Environment) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment.separator("__").try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.shipwright.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "shipwright", "shipwright")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".shipwright.toml"))
    }
}
