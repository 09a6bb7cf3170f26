//! Implementation of the `tinytpl expand` command.

use super::open_template;
use crate::cli::ExpandArgs;
use std::io::{self, BufWriter, Write};
use tinytpl::config::Config;
use tinytpl::error::{Result, TemplateError};
use tinytpl::fs::atomic_write;
use tinytpl::{Engine, LineEnding, WriteOptions};
use tracing::info;

/// Expand the template and write it to stdout or `--output`.
pub fn cmd_expand(args: ExpandArgs, config: Config) -> Result<()> {
    let options = write_options(&args, &config);
    let config = config.with_values(args.values);
    let mut engine = Engine::new(open_template(&args.template)?);

    let lines = match &args.output {
        Some(path) => {
            let mut out = Vec::new();
            let lines = engine.expand_to(&config.values, &mut out, options)?;
            atomic_write(path, &out)?;
            lines
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            let lines = engine.expand_to(&config.values, &mut out, options)?;
            out.flush().map_err(TemplateError::Write)?;
            lines
        }
    };

    info!(template = %args.template, lines, "expanded template");
    Ok(())
}

/// Command-line flags override the configured line handling.
fn write_options(args: &ExpandArgs, config: &Config) -> WriteOptions {
    WriteOptions {
        line_ending: if args.crlf {
            LineEnding::CrLf
        } else {
            config.line_ending
        },
        final_newline: config.final_newline && !args.no_final_newline,
    }
}
