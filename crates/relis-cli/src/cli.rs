//! CLI argument definitions for the statistical analysis model exporter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "relis-sam",
    version,
    about = "Build the statistical analysis model of a ReLiS classification schema",
    long_about = "Classify the fields of a project's classification schema and attach the \
                  statistical functions applicable to each.\n\n\
                  The resulting model and export configuration are written as JSON for the \
                  code-generation templates of the analysis environment."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assemble the statistical analysis model of a schema snapshot.
    Model(ModelArgs),

    /// List the statistical function catalog.
    Catalog(CatalogArgs),
}

#[derive(Parser)]
pub struct ModelArgs {
    /// Schema snapshot (JSON) exported from the project's schema store.
    #[arg(value_name = "SCHEMA_JSON")]
    pub schema: PathBuf,

    /// Export configuration (TOML); the embedded default is used when omitted.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Project name used for derived artifact names.
    #[arg(long = "project", value_name = "NAME")]
    pub project: Option<String>,

    /// Write the render context to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the field summary only; do not emit the render context.
    #[arg(long = "summary-only", conflicts_with = "output")]
    pub summary_only: bool,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Export configuration (TOML); the embedded default is used when omitted.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
