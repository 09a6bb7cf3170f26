//! In-memory line source.

use super::{LineSource, Span};
use crate::error::Result;

/// Reads lines out of a fixed text buffer.
///
/// End of input is reported once the position reaches the end of the text.
/// Nothing is allocated: every span borrows straight from the buffer.
#[derive(Debug, Clone)]
pub struct MemoryReader<'t> {
    text: &'t [u8],
    position: usize,
}

impl<'t> MemoryReader<'t> {
    pub fn new<T: AsRef<[u8]> + ?Sized>(text: &'t T) -> Self {
        Self {
            text: text.as_ref(),
            position: 0,
        }
    }

    /// Byte offset of the next unread line.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.text.len()
    }
}

impl LineSource for MemoryReader<'_> {
    fn next_line(&mut self) -> Result<Option<Span<'_>>> {
        if self.is_exhausted() {
            return Ok(None);
        }

        let text = self.text;
        let rest = &text[self.position..];
        let len = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());

        self.position += len;
        if self.position < text.len() {
            // Skip the newline itself
            self.position += 1;
        }

        Ok(Some(Span::new(&rest[..len])))
    }

    fn reset(&mut self) -> Result<()> {
        self.position = 0;
        Ok(())
    }
}
