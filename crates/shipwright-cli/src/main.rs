//! # Shipwright CLI
//!
//! Turns a docker-compose descriptor into an Ansible project.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success                                  |
//! |  1   | Internal / system error                  |
//! |  2   | Usage error (bad arguments)              |
//! |  3   | Descriptor not found                     |
//! |  4   | Configuration error                      |
//! |  5   | Descriptor could not be parsed           |
//! |  6   | Service missing `image` or badly named   |
//! |  7   | Output tree could not be written         |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine; real deployments use the environment directly.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::parse_checked() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here and must exit 0.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: Some(e.into()),
            };
            let output = OutputManager::new(&cli.global, &AppConfig::default());
            return handle_error(err, &cli.global, &output);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    let global = cli.global.clone();
    match run(cli, config, &output) {
        Ok(()) => {
            info!("Shipwright completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, &global, &output),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    match cli.command.unwrap_or(Commands::Generate(cli.generate)) {
        Commands::Generate(cmd) => commands::generate::execute(cmd, config, output),
        Commands::Scaffold(cmd) => commands::scaffold::execute(cmd, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, cli.global, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, cli.global, config, output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, global: &GlobalArgs, output: &OutputManager) -> ExitCode {
    err.log();

    if output.is_json() {
        let _ = output.json(&err.to_json());
    } else {
        // stderr, so the message survives a redirected stdout.
        let verbose = global.verbose > 0;
        let msg = if output.supports_color() && std::io::stderr().is_terminal() {
            err.format_colored(verbose)
        } else {
            err.format_plain(verbose)
        };
        eprint!("{msg}");
    }

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
