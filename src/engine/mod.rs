//! Template expansion engine.
//!
//! The engine pulls one line at a time from a [`LineSource`] and expands its
//! placeholders against a borrowed [`Values`] table.
//!
//! # Two passes per line
//!
//! Each line is scanned twice: once to compute the exact expanded length, and
//! once to write the expansion into a buffer allocated for exactly that
//! length. The previous line's buffer is dropped before the new one is
//! allocated, so at most one output buffer is alive at a time.
//!
//! # Sessions
//!
//! ```text
//! start(values) -> next_line()* -> end()
//! ```
//!
//! [`Engine::session`] returns a guard that calls `end()` when dropped, so the
//! buffer is released even if the caller stops reading early.

pub mod scan;
mod session;

#[cfg(test)]
mod tests;

pub use session::Session;

use crate::buffer::OutputBuffer;
use crate::error::{Result, TemplateError};
use crate::reader::LineSource;
use crate::values::{MAX_PLACEHOLDERS, Values};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, trace, warn};

/// Line terminator written after each expanded line by [`Engine::expand_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::CrLf => b"\r\n",
        }
    }
}

/// How [`Engine::expand_to`] terminates lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    pub line_ending: LineEnding,
    /// Terminate the last line too.
    pub final_newline: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::Lf,
            final_newline: true,
        }
    }
}

/// Expands templates read from `R` one line at a time.
///
/// `R` is usually a concrete reader, a `&mut` to one, or a
/// `Box<dyn LineSource>`.
#[derive(Debug)]
pub struct Engine<'v, R> {
    reader: R,
    values: Option<Values<'v>>,
    buffer: Option<OutputBuffer>,
}

impl<'v, R: LineSource> Engine<'v, R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            values: None,
            buffer: None,
        }
    }

    /// Begins a session with the given substitution table.
    ///
    /// The reader is not rewound here; a fresh reader starts at its first
    /// line, and `end()` rewinds it for the next session.
    pub fn start(&mut self, values: impl Into<Values<'v>>) {
        let values = values.into();
        if values.unreachable_count() > 0 {
            warn!(
                entries = values.len(),
                unreachable = values.unreachable_count(),
                "only the first {} values can be referenced",
                MAX_PLACEHOLDERS
            );
        }
        debug!(entries = values.len(), "template session started");

        self.buffer = None;
        self.values = Some(values);
    }

    /// Expands the next template line.
    ///
    /// Returns `Ok(None)` once the template is exhausted, and keeps doing so
    /// on further calls. The returned bytes are valid until the next call to
    /// `next_line` or `end`.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.next_line_with(OutputBuffer::allocate)
    }

    /// `next_line` with the allocation step supplied by the caller.
    ///
    /// The previous buffer is dropped before `allocate` runs, so a failed
    /// allocation leaves the engine holding no buffer.
    fn next_line_with<A>(&mut self, allocate: A) -> Result<Option<&[u8]>>
    where
        A: FnOnce(usize) -> Result<OutputBuffer>,
    {
        let values = self.values.ok_or(TemplateError::NotStarted)?;

        let Some(line) = self.reader.next_line()? else {
            return Ok(None);
        };
        let line = line.as_bytes();

        let len = scan::measure(line, &values);

        self.buffer = None;
        let mut buffer = allocate(len)?;
        scan::fill(line, &values, &mut buffer);
        trace!(input = line.len(), output = len, "expanded line");

        Ok(Some(self.buffer.insert(buffer).as_bytes()))
    }

    /// Ends the session: releases the output buffer and rewinds the reader.
    ///
    /// Calling `end` outside a session is harmless.
    pub fn end(&mut self) -> Result<()> {
        self.buffer = None;
        if self.values.take().is_some() {
            debug!("template session ended");
        }
        self.reader.reset()
    }

    /// Starts a session that ends automatically when the guard is dropped.
    pub fn session(&mut self, values: impl Into<Values<'v>>) -> Session<'_, 'v, R> {
        self.start(values);
        Session::new(self)
    }

    /// Runs a whole session, writing every expanded line to `out`.
    /// Returns the number of lines written.
    pub fn expand_to<W: Write>(
        &mut self,
        values: impl Into<Values<'v>>,
        out: &mut W,
        options: WriteOptions,
    ) -> Result<usize> {
        let ending = options.line_ending.as_bytes();
        let mut session = self.session(values);
        let mut count = 0;
        while let Some(line) = session.next_line()? {
            if count > 0 {
                out.write_all(ending).map_err(TemplateError::Write)?;
            }
            out.write_all(line).map_err(TemplateError::Write)?;
            count += 1;
        }
        if count > 0 && options.final_newline {
            out.write_all(ending).map_err(TemplateError::Write)?;
        }
        session.finish()?;
        Ok(count)
    }

    pub fn is_started(&self) -> bool {
        self.values.is_some()
    }

    /// Whether an output buffer is currently held.
    pub fn holds_buffer(&self) -> bool {
        self.buffer.is_some()
    }

    /// The last expanded line including its NUL terminator.
    pub fn current_with_nul(&self) -> Option<&[u8]> {
        self.buffer.as_ref().and_then(OutputBuffer::as_bytes_with_nul)
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Expands a single line outside of any session.
pub fn expand_line<'v>(line: &[u8], values: impl Into<Values<'v>>) -> Result<Vec<u8>> {
    let values = values.into();
    let mut buffer = OutputBuffer::allocate(scan::measure(line, &values))?;
    scan::fill(line, &values, &mut buffer);
    Ok(buffer.as_bytes().to_vec())
}
