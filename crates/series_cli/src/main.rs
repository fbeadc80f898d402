//! tseries - Command Line Lookup over Sparse Series
//!
//! Loads `(x, y)` samples from CSV and answers "what is y at x?" using the
//! exact, step, or linear policy from `series_core`.
//!
//! # Commands
//!
//! - `tseries query --input <file> <x>...` - Look up values
//! - `tseries show --input <file>` - Print the stored series
//! - `tseries check --input <file>` - Validate a data file

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod loader;
mod output;

pub use error::{CliError, Result};

/// Lookup and interpolation over sparse series
#[derive(Parser)]
#[command(name = "tseries")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Lookup policy (exact, step, linear)
    #[arg(short, long, global = true)]
    policy: Option<String>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// CSV field delimiter
    #[arg(long, global = true)]
    delimiter: Option<char>,

    /// Treat the first CSV row as data
    #[arg(long, global = true)]
    no_headers: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up y for each x
    Query {
        /// Path to CSV file with x,y columns
        #[arg(short, long)]
        input: PathBuf,

        /// Query points
        #[arg(required = true, allow_negative_numbers = true)]
        xs: Vec<f64>,
    },

    /// Print the stored series
    Show {
        /// Path to CSV file with x,y columns
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Validate a data file
    Check {
        /// Path to CSV file with x,y columns
        #[arg(short, long)]
        input: PathBuf,
    },
}

impl From<&Cli> for config::CliArgs {
    fn from(cli: &Cli) -> Self {
        config::CliArgs {
            config_file: cli.config.clone(),
            policy: cli.policy.clone(),
            format: cli.format.clone(),
            log_level: cli.log_level.clone(),
            verbose: cli.verbose,
            delimiter: cli.delimiter,
            no_headers: cli.no_headers,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cli_args = config::CliArgs::from(&cli);
    let config = config::build_config(&cli_args)?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        policy = %config.policy,
        log_level = %config.log_level,
        delimiter = ?config.delimiter,
        has_headers = config.has_headers,
        "configuration loaded"
    );

    match cli.command {
        Commands::Query { input, xs } => commands::query::run(&config, &input, &xs),
        Commands::Show { input } => commands::show::run(&config, &input),
        Commands::Check { input } => commands::check::run(&config, &input),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
