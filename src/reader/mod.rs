//! Line sources for the template engine.
//!
//! A [`LineSource`] supplies the template one physical line at a time. The
//! engine never looks more than one line ahead and a source never looks back.
//!
//! # Line splitting
//!
//! Lines are split on `\n` only. A `\r` before the newline is kept as part of
//! the line. A final line without a trailing newline is still yielded once.
//! A template that ends in `\n` does not produce an extra empty line:
//!
//! | template   | lines              |
//! |------------|--------------------|
//! | `""`       | (none)             |
//! | `"\n"`     | `""`               |
//! | `"a"`      | `"a"`              |
//! | `"a\n"`    | `"a"`              |
//! | `"a\n\n"`  | `"a"`, `""`        |
//!
//! # Span validity
//!
//! The [`Span`] returned by [`LineSource::next_line`] borrows the source
//! mutably, so it cannot outlive the next call to `next_line` or `reset`.

pub mod file;
pub mod memory;
pub mod stream;

pub use file::FileReader;
pub use memory::MemoryReader;
pub use stream::StreamReader;

use crate::error::Result;
use std::borrow::Cow;

/// One line of template text, without its terminating newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    text: &'a [u8],
}

impl<'a> Span<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self { text }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Lossy UTF-8 view, for diagnostics.
    pub fn to_str_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.text)
    }
}

impl<'a> From<&'a [u8]> for Span<'a> {
    fn from(text: &'a [u8]) -> Self {
        Self::new(text)
    }
}

impl<'a> From<&'a str> for Span<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

/// Reads a template line by line from memory, a file, a stream, etc.
pub trait LineSource {
    /// Returns the next line, or `None` once the input is exhausted.
    ///
    /// Calling again after `None` keeps returning `None`.
    fn next_line(&mut self) -> Result<Option<Span<'_>>>;

    /// Releases the memory behind the last span and rewinds to the first
    /// line, where the source is able to.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<L: LineSource + ?Sized> LineSource for &mut L {
    fn next_line(&mut self) -> Result<Option<Span<'_>>> {
        (**self).next_line()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

impl<L: LineSource + ?Sized> LineSource for Box<L> {
    fn next_line(&mut self) -> Result<Option<Span<'_>>> {
        (**self).next_line()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

#[cfg(test)]
pub(crate) fn collect_lines<L: LineSource + ?Sized>(source: &mut L) -> Vec<String> {
    let mut lines = Vec::new();
    while let Some(span) = source.next_line().unwrap() {
        lines.push(span.to_str_lossy().into_owned());
    }
    lines
}
