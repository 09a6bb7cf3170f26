//! Scoped session guard.

use super::Engine;
use crate::error::Result;
use crate::reader::LineSource;
use tracing::warn;

/// An active engine session that ends when dropped.
///
/// Dropping the guard releases the output buffer and resets the reader even
/// when the template was not read to the end.
pub struct Session<'e, 'v, R: LineSource> {
    engine: &'e mut Engine<'v, R>,
    finished: bool,
}

impl<'e, 'v, R: LineSource> Session<'e, 'v, R> {
    pub(super) fn new(engine: &'e mut Engine<'v, R>) -> Self {
        Self {
            engine,
            finished: false,
        }
    }

    /// See [`Engine::next_line`].
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.engine.next_line()
    }

    /// Ends the session now, reporting a failed reader reset.
    pub fn finish(mut self) -> Result<()> {
        self.finished = true;
        self.engine.end()
    }
}

impl<R: LineSource> Drop for Session<'_, '_, R> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Err(e) = self.engine.end() {
            warn!(error = %e, "failed to reset line source at end of session");
        }
    }
}
