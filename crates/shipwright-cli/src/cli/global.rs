//! Flags shared by `shipwright` and all of its subcommands.
//!
//! Every flag here is `global`, so `shipwright -q scaffold` and
//! `shipwright scaffold -q` mean the same thing.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Verbosity, colour, config file and output format.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more about the run (-v info, -vv debug, -vvv trace)
    ///
    /// Logs go to stderr. At the default level only warnings and errors are
    /// shown; `-v` adds one line per playbook written. `RUST_LOG` overrides
    /// this flag.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing but errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes (also set by NO_COLOR)
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from this TOML file instead of the per-user one
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are written to stdout
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        value_name = "FORMAT",
        default_value_t = OutputFormat::Auto
    )]
    pub output_format: OutputFormat,
}

/// Rendering of results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured status lines.
    Human,
    /// Status lines without colour.
    Plain,
    /// One JSON document describing the run or the error.
    Json,
}
