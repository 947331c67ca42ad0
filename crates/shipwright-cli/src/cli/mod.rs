//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{
    Args, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum, error::ErrorKind,
    parser::ValueSource,
};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "shipwright",
    bin_name = "shipwright",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Turn a docker-compose file into Ansible playbooks",
    long_about = "Shipwright reads a Compose descriptor and writes one Ansible \
                  playbook per service, together with the inventory/, \
                  playbooks/ and roles/ skeleton Ansible expects.\n\n\
                  Running without a subcommand is the same as `shipwright generate`.",
    after_help = "EXAMPLES:\n\
        \x20 shipwright\n\
        \x20 shipwright generate -f stack.yml -o deploy\n\
        \x20 shipwright generate --dry-run\n\
        \x20 shipwright completions bash > /usr/share/bash-completion/completions/shipwright",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// `generate` flags, accepted when no subcommand is given.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Subcommand to execute; `generate` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level `generate` flags: argument id and the spelling shown to users.
const TOP_LEVEL_GENERATE_FLAGS: [(&str, &str); 3] = [
    ("file", "--file"),
    ("output", "--output"),
    ("dry_run", "--dry-run"),
];

impl Cli {
    /// Parse the process arguments. See [`Cli::parse_checked_from`].
    pub fn parse_checked() -> Result<Self, clap::Error> {
        Self::parse_checked_from(std::env::args_os())
    }

    /// Parse `args`, rejecting `generate` flags typed before a subcommand.
    ///
    /// `shipwright -o deploy scaffold` would otherwise drop `-o deploy` and
    /// replace the default base directory. Values taken from the
    /// environment are not typed by the user and never conflict.
    pub fn parse_checked_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut cmd = Self::command();
        let matches = cmd.try_get_matches_from_mut(args)?;

        if let Some((name, _)) = matches.subcommand() {
            let typed = TOP_LEVEL_GENERATE_FLAGS
                .iter()
                .find(|(id, _)| matches.value_source(id) == Some(ValueSource::CommandLine));
            if let Some((_, flag)) = typed {
                return Err(cmd.error(
                    ErrorKind::ArgumentConflict,
                    format!(
                        "'{flag}' cannot be used before the '{name}' subcommand; \
                         pass it after the subcommand instead"
                    ),
                ));
            }
        }

        Self::from_arg_matches(&matches).map_err(|e| e.format(&mut cmd))
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold the project and write one playbook per service.
    #[command(
        visible_alias = "g",
        about = "Generate playbooks from a Compose file",
        after_help = "EXAMPLES:\n\
            \x20 shipwright generate\n\
            \x20 shipwright generate --file docker-compose.prod.yml\n\
            \x20 shipwright generate --output /tmp/ansible --dry-run"
    )]
    Generate(GenerateArgs),

    /// Recreate the empty project skeleton only.
    #[command(
        about = "Create the inventory/playbooks/roles skeleton",
        after_help = "EXAMPLES:\n\
            \x20 shipwright scaffold\n\
            \x20 shipwright scaffold --output deploy"
    )]
    Scaffold(ScaffoldArgs),

    /// Initialise a Shipwright configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 shipwright init\n\
            \x20 shipwright init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 shipwright completions bash > ~/.local/share/bash-completion/completions/shipwright\n\
            \x20 shipwright completions zsh  > ~/.zfunc/_shipwright\n\
            \x20 shipwright completions fish > ~/.config/fish/completions/shipwright.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Shipwright configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 shipwright config show\n\
            \x20 shipwright config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `shipwright generate`.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Compose descriptor to read.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        env = "SHIPWRIGHT_FILE",
        help = "Compose file to read (default: docker-compose.yml)"
    )]
    pub file: Option<PathBuf>,

    /// Base directory of the generated project.  It is deleted and recreated.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        env = "SHIPWRIGHT_OUTPUT",
        help = "Output directory, replaced on every run (default: ansible-playbooks)"
    )]
    pub output: Option<PathBuf>,

    /// Render into memory and print the playbooks instead of writing them.
    #[arg(long = "dry-run", help = "Print playbooks without touching the disk")]
    pub dry_run: bool,
}

// ── scaffold ──────────────────────────────────────────────────────────────────

/// Arguments for `shipwright scaffold`.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Base directory to (re)create.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        env = "SHIPWRIGHT_OUTPUT",
        help = "Output directory, replaced if it exists (default: ansible-playbooks)"
    )]
    pub output: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `shipwright init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `shipwright completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `shipwright config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path to the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["shipwright"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::try_parse_from([
            "shipwright",
            "generate",
            "--file",
            "stack.yml",
            "-o",
            "deploy",
            "--dry-run",
        ])
        .unwrap();

        let Some(Commands::Generate(args)) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.file, Some(PathBuf::from("stack.yml")));
        assert_eq!(args.output, Some(PathBuf::from("deploy")));
        assert!(args.dry_run);
    }

    #[test]
    fn generate_flags_without_subcommand() {
        let cli = Cli::try_parse_from(["shipwright", "-f", "stack.yml", "--dry-run"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.file, Some(PathBuf::from("stack.yml")));
        assert!(cli.generate.dry_run);
    }

    #[test]
    fn generate_alias() {
        let cli = Cli::try_parse_from(["shipwright", "g"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Generate(_))));
    }

    #[test]
    fn parse_config_show() {
        let cli = Cli::try_parse_from(["shipwright", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigCommands::Show))
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["shipwright", "scaffold", "-vv", "--no-color"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn generate_flags_before_subcommand_are_rejected() {
        let cases: [&[&str]; 3] = [
            &["shipwright", "-o", "deploy", "scaffold"],
            &["shipwright", "--dry-run", "scaffold"],
            &["shipwright", "--file", "stack.yml", "generate"],
        ];
        for args in cases {
            let err = Cli::parse_checked_from(args.iter().copied()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentConflict, "accepted {args:?}");
        }
    }

    #[test]
    fn global_flags_before_subcommand_are_accepted() {
        let cli =
            Cli::parse_checked_from(["shipwright", "--no-color", "-v", "scaffold", "-o", "deploy"])
                .unwrap();
        let Some(Commands::Scaffold(args)) = cli.command else {
            panic!("expected Scaffold command");
        };
        assert_eq!(args.output, Some(PathBuf::from("deploy")));
        assert_eq!(cli.global.verbose, 1);
    }

    #[test]
    fn generate_flags_after_subcommand_are_accepted() {
        let cli = Cli::parse_checked_from(["shipwright", "generate", "-o", "deploy", "--dry-run"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::Generate(ref a)) if a.dry_run));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["shipwright", "--quiet", "--verbose", "generate"]);
        assert!(result.is_err());
    }
}
