//! CLI argument parsing for tinytpl.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tinytpl: expand `$0`..`$9` placeholders in a template, line by line.
///
/// `$$` renders a literal `$`. A `$` before anything other than a digit or
/// another `$` is copied as-is. Placeholders past the end of the values
/// expand to nothing.
#[derive(Parser, Debug)]
#[command(name = "tinytpl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log at debug level regardless of config (TINYTPL_LOG still wins).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: ./tinytpl.yaml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for tinytpl.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand a template.
    ///
    /// Writes the expanded lines to stdout, or to --output.
    Expand(ExpandArgs),

    /// Report placeholders that have no value.
    ///
    /// Exits with status 2 if any placeholder would expand to nothing.
    Check(CheckArgs),
}

/// Arguments for the `expand` command.
#[derive(Parser, Debug)]
pub struct ExpandArgs {
    /// Template file, or `-` for stdin.
    pub template: String,

    /// Values for `$0`, `$1`, ... (replace any configured values).
    pub values: Vec<String>,

    /// Write output atomically to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Terminate lines with CRLF.
    #[arg(long)]
    pub crlf: bool,

    /// Do not terminate the last line.
    #[arg(long)]
    pub no_final_newline: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Template file, or `-` for stdin.
    pub template: String,

    /// Values for `$0`, `$1`, ... (replace any configured values).
    pub values: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
