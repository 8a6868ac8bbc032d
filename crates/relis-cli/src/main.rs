//! ReLiS statistical analysis model CLI.

use clap::{ColorChoice, Parser};
use relis_cli::commands::{is_configuration_error, run_catalog, run_model};
use relis_cli::logging::{LogConfig, LogFormat, init_logging};
use relis_cli::types::ModelRequest;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ModelArgs};
use crate::summary::{render_catalog, render_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Model(args) => match run_model(&model_request(args)) {
            Ok(run) => {
                let summary = render_summary(&run);
                match &run.rendered {
                    // stdout carries the JSON; keep the summary off it.
                    Some(rendered) => {
                        println!("{rendered}");
                        eprint!("{summary}");
                    }
                    None => print!("{summary}"),
                }
                0
            }
            Err(error) => {
                if is_configuration_error(&error) {
                    eprintln!("error: model generation aborted: invalid configuration: {error:#}");
                } else {
                    eprintln!("error: {error:#}");
                }
                1
            }
        },
        Command::Catalog(args) => match run_catalog(args.config.as_deref()) {
            Ok(catalog) => {
                println!("{}", render_catalog(&catalog));
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn model_request(args: &ModelArgs) -> ModelRequest {
    ModelRequest {
        schema: args.schema.clone(),
        config: args.config.clone(),
        project: args.project.clone(),
        output: args.output.clone(),
        summary_only: args.summary_only,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let explicit_level = cli.verbosity.is_present() || cli.log_level.is_some();

    LogConfig {
        use_env_filter: !explicit_level,
        ..LogConfig::default()
    }
    .with_level(level_filter)
    .with_format(format)
    .with_ansi(ansi)
    // Log files outlive the session; stamp their lines.
    .with_timestamps(cli.log_file.is_some())
    .with_log_file(cli.log_file.clone())
}
