//! Line source over any buffered byte stream.

use super::{LineSource, Span};
use crate::error::{Result, TemplateError};
use std::io::{BufRead, Seek};

/// Reads lines from a [`BufRead`] into a single reusable slot.
///
/// The slot is overwritten by every call to `next_line`, which is why the
/// returned span cannot outlive that call.
#[derive(Debug)]
pub struct StreamReader<R> {
    inner: R,
    line: Vec<u8>,
    exhausted: bool,
}

impl<R: BufRead> StreamReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: Vec::new(),
            exhausted: false,
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Drops the slot memory held for the last span.
    fn release(&mut self) {
        self.line = Vec::new();
    }
}

impl<R: BufRead + Seek> StreamReader<R> {
    /// Seeks the underlying stream back to its start.
    pub fn rewind(&mut self) -> Result<()> {
        self.release();
        self.inner.rewind().map_err(TemplateError::Read)?;
        self.exhausted = false;
        Ok(())
    }
}

impl<R: BufRead> LineSource for StreamReader<R> {
    fn next_line(&mut self) -> Result<Option<Span<'_>>> {
        self.line.clear();
        if self.exhausted {
            return Ok(None);
        }

        let read = self
            .inner
            .read_until(b'\n', &mut self.line)
            .map_err(TemplateError::Read)?;
        if read == 0 {
            self.exhausted = true;
            return Ok(None);
        }

        if self.line.last() == Some(&b'\n') {
            self.line.pop();
        }
        Ok(Some(Span::new(&self.line)))
    }

    /// A plain stream cannot go back; this only frees the slot. Use
    /// [`StreamReader::rewind`] or [`super::FileReader`] when the input is
    /// seekable.
    fn reset(&mut self) -> Result<()> {
        self.release();
        Ok(())
    }
}
