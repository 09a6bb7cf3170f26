//! Exact-fit output buffer for one expanded line.

use crate::error::{Result, TemplateError};

/// Owned buffer sized for one expanded line plus a NUL terminator.
///
/// The capacity is reserved up front with a fallible allocation; filling it
/// never grows the buffer as long as the writer stays within the measured
/// length.
#[derive(Debug)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
    len: usize,
}

impl OutputBuffer {
    /// Allocates room for `len` bytes of content and the terminator.
    pub fn allocate(len: usize) -> Result<Self> {
        let requested = len.saturating_add(1);
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(requested)
            .map_err(|source| TemplateError::Allocation { requested, source })?;
        Ok(Self { bytes, len })
    }

    /// Content length the buffer was sized for.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Bytes written so far, excluding any terminator.
    pub fn written(&self) -> usize {
        if self.is_terminated() {
            self.bytes.len() - 1
        } else {
            self.bytes.len()
        }
    }

    pub fn push(&mut self, byte: u8) {
        debug_assert!(self.bytes.len() < self.len, "write past measured length");
        self.bytes.push(byte);
    }

    pub fn extend_from_slice(&mut self, text: &[u8]) {
        debug_assert!(
            self.bytes.len() + text.len() <= self.len,
            "write past measured length"
        );
        self.bytes.extend_from_slice(text);
    }

    /// Writes the terminator after the last content byte.
    pub fn terminate(&mut self) {
        debug_assert_eq!(self.bytes.len(), self.len, "fill did not match measure");
        self.bytes.push(0);
    }

    pub fn is_terminated(&self) -> bool {
        self.bytes.len() == self.len + 1
    }

    /// Content without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.written()]
    }

    /// Content including the terminator, for hosts that want a C-style line.
    pub fn as_bytes_with_nul(&self) -> Option<&[u8]> {
        self.is_terminated().then_some(&self.bytes[..])
    }
}
