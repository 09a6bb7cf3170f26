//! Placeholder scanner shared by the measure and fill passes.
//!
//! # Syntax
//!
//! - `$0`..`$9` - substitutes the value at that index (nothing if the table
//!   is shorter)
//! - `$$` - renders as a literal `$`
//! - `$` before anything else, or at end of line - renders as itself; the
//!   following byte is scanned normally
//!
//! Both passes walk the same [`Pieces`] iterator, so the length computed by
//! [`measure`] is always the length written by [`fill`].

use crate::buffer::OutputBuffer;
use crate::values::Values;

/// One scanned fragment of a template line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'l> {
    /// A run of bytes containing no `$`.
    Literal(&'l [u8]),
    /// A `$` that renders as itself (`$$`, or a lone `$`).
    Dollar,
    /// `$<digit>`, holding the digit's value.
    Placeholder(u8),
}

/// Iterator over the [`Piece`]s of one line.
#[derive(Debug, Clone)]
pub struct Pieces<'l> {
    line: &'l [u8],
    pos: usize,
}

impl<'l> Pieces<'l> {
    pub fn new(line: &'l [u8]) -> Self {
        Self { line, pos: 0 }
    }

    /// Byte offset of the next piece.
    pub fn offset(&self) -> usize {
        self.pos
    }
}

impl<'l> Iterator for Pieces<'l> {
    type Item = Piece<'l>;

    fn next(&mut self) -> Option<Piece<'l>> {
        let line = self.line;
        let rest = line.get(self.pos..).filter(|rest| !rest.is_empty())?;

        if rest[0] != b'$' {
            let len = rest.iter().position(|&b| b == b'$').unwrap_or(rest.len());
            self.pos += len;
            return Some(Piece::Literal(&rest[..len]));
        }

        match rest.get(1) {
            Some(&d) if d.is_ascii_digit() => {
                self.pos += 2;
                Some(Piece::Placeholder(d - b'0'))
            }
            Some(&b'$') => {
                self.pos += 2;
                Some(Piece::Dollar)
            }
            _ => {
                self.pos += 1;
                Some(Piece::Dollar)
            }
        }
    }
}

fn piece_len(piece: Piece<'_>, values: &Values<'_>) -> usize {
    match piece {
        Piece::Literal(text) => text.len(),
        Piece::Dollar => 1,
        Piece::Placeholder(index) => values.get(usize::from(index)).len(),
    }
}

/// Measure pass: the exact length of `line` once expanded.
pub fn measure(line: &[u8], values: &Values<'_>) -> usize {
    Pieces::new(line).map(|piece| piece_len(piece, values)).sum()
}

/// Fill pass: writes the expansion of `line` into `out`.
///
/// `out` must have been allocated with the length returned by [`measure`]
/// for the same line and values.
pub fn fill(line: &[u8], values: &Values<'_>, out: &mut OutputBuffer) {
    for piece in Pieces::new(line) {
        match piece {
            Piece::Literal(text) => out.extend_from_slice(text),
            Piece::Dollar => out.push(b'$'),
            Piece::Placeholder(index) => out.extend_from_slice(values.get(usize::from(index))),
        }
    }
    out.terminate();
}

/// A placeholder occurrence within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderRef {
    /// Byte offset of the `$`.
    pub offset: usize,
    pub index: u8,
}

/// Every placeholder in `line`, in order.
pub fn placeholders(line: &[u8]) -> impl Iterator<Item = PlaceholderRef> + '_ {
    let mut pieces = Pieces::new(line);
    std::iter::from_fn(move || {
        loop {
            let offset = pieces.offset();
            match pieces.next()? {
                Piece::Placeholder(index) => return Some(PlaceholderRef { offset, index }),
                _ => continue,
            }
        }
    })
}
