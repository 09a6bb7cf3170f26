//! Implementation of the `tinytpl check` command.

use super::open_template;
use crate::cli::CheckArgs;
use tinytpl::config::Config;
use tinytpl::engine::scan;
use tinytpl::error::{Result, TemplateError};
use tinytpl::{LineSource, Values};

/// A placeholder that would expand to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unresolved {
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column of the `$`.
    pub column: usize,
    pub index: u8,
}

/// Report every placeholder without a value.
pub fn cmd_check(args: CheckArgs, config: Config) -> Result<()> {
    let config = config.with_values(args.values);
    let values = Values::from(&config.values);
    let mut source = open_template(&args.template)?;

    let unresolved = find_unresolved(&mut source, &values)?;
    if unresolved.is_empty() {
        println!(
            "{}: all placeholders resolve ({} values)",
            args.template,
            values.len()
        );
        return Ok(());
    }

    for item in &unresolved {
        println!(
            "{}:{}:{}: ${} has no value ({} given)",
            args.template,
            item.line,
            item.column,
            item.index,
            values.len()
        );
    }

    Err(TemplateError::CheckFailed(format!(
        "{} unresolved placeholder(s) in '{}'",
        unresolved.len(),
        args.template
    )))
}

/// Scan every line of `source` for placeholders past the end of `values`.
pub fn find_unresolved<L: LineSource + ?Sized>(
    source: &mut L,
    values: &Values<'_>,
) -> Result<Vec<Unresolved>> {
    let mut found = Vec::new();
    let mut line_no = 0;

    while let Some(line) = source.next_line()? {
        line_no += 1;
        for placeholder in scan::placeholders(line.as_bytes()) {
            if values.resolve(usize::from(placeholder.index)).is_none() {
                found.push(Unresolved {
                    line: line_no,
                    column: placeholder.offset + 1,
                    index: placeholder.index,
                });
            }
        }
    }

    source.reset()?;
    Ok(found)
}
