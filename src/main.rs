//! tinytpl: expand positional `$N` templates line by line.
//!
//! This is the main entry point for the `tinytpl` CLI. It parses arguments,
//! loads configuration, sets up logging, dispatches to the command handler,
//! and maps errors to exit codes.

mod cli;
mod commands;

use cli::Cli;
use std::path::Path;
use std::process::ExitCode;
use tinytpl::config::Config;
use tinytpl::exit_codes;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `TINYTPL_LOG=debug`.
const LOG_ENV: &str = "TINYTPL_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let result = Config::resolve(cli.config.as_deref(), Path::new(".")).and_then(|config| {
        init_logging(&config, cli.verbose);
        commands::dispatch(cli.command, config)
    });

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Logs go to stderr; stdout carries only expanded output.
fn init_logging(config: &Config, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
