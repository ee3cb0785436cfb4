//! `matbench` command-line tool.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use matbench_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use matbench_cli::commands::{
    compare_exit_code, run_compare, run_metric, run_metrics, run_target_type,
};
use matbench_cli::summary::{print_comparison, print_metrics, print_target_types};
use matbench_utils::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Metric(args) => match run_metric(&args) {
            Ok(metrics) => {
                print_metrics(&metrics);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Metrics => {
            print_metrics(&run_metrics());
            0
        }
        Command::CompareColumns(args) => {
            let result = run_compare(&args);
            match &result {
                Ok(comparison) if args.json => match serde_json::to_string_pretty(comparison) {
                    Ok(json) => println!("{json}"),
                    Err(error) => {
                        eprintln!("error: {error}");
                        std::process::exit(2);
                    }
                },
                Ok(comparison) => print_comparison(comparison),
                Err(error) => eprintln!("error: {error:#}"),
            }
            compare_exit_code(&result)
        }
        Command::TargetType(args) => match run_target_type(&args) {
            Ok(kinds) => {
                print_target_types(&kinds);
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
