//! Command implementations for tinytpl.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod expand;

use crate::cli::Command;
use std::io;
use tinytpl::config::Config;
use tinytpl::error::Result;
use tinytpl::{FileReader, LineSource, StreamReader};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: Config) -> Result<()> {
    match command {
        Command::Expand(args) => expand::cmd_expand(args, config),
        Command::Check(args) => check::cmd_check(args, config),
    }
}

/// Open the template named on the command line; `-` reads stdin.
fn open_template(template: &str) -> Result<Box<dyn LineSource>> {
    if template == "-" {
        Ok(Box::new(StreamReader::new(io::stdin().lock())))
    } else {
        Ok(Box::new(FileReader::open(template)?))
    }
}
