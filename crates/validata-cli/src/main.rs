//! Validata CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use validata_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use validata_cli::commands::{
    resolve_store_root, run_datasets, run_demo, run_history, run_revalidate, run_show,
    run_validate,
};
use validata_cli::logging::{LogConfig, LogFormat, init_logging};
use validata_cli::summary::{print_datasets, print_history, print_validation};
use validata_cli::types::ValidationOutcome;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let store_root = resolve_store_root(cli.store.as_deref());
    let result = match &cli.command {
        Command::Validate(args) => {
            run_validate(&store_root, &args.file).map(|outcome| render(&outcome, args.json))
        }
        Command::Revalidate(args) => run_revalidate(&store_root, args.dataset_id)
            .map(|outcome| render(&outcome, args.json)),
        Command::Show(args) => {
            run_show(&store_root, args.dataset_id).map(|outcome| render(&outcome, args.json))
        }
        Command::History(args) => {
            run_history(&store_root, args.dataset).map(|entries| print_history(&entries))
        }
        Command::Datasets => run_datasets(&store_root).map(|datasets| print_datasets(&datasets)),
        Command::Demo(args) => run_demo(args.rows, args.seed, &args.out).map(|()| {
            println!("Demo dataset written to {}", args.out.display());
        }),
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn render(outcome: &ValidationOutcome, json: bool) {
    if json {
        match serde_json::to_string_pretty(&outcome.stored) {
            Ok(text) => println!("{text}"),
            Err(error) => eprintln!("error: serialize record: {error}"),
        }
    } else {
        print_validation(outcome);
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
