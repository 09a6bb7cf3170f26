//! File-backed line source.

use super::{LineSource, Span, StreamReader};
use crate::error::{Result, TemplateError};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a template file line by line.
///
/// Unlike a plain stream, `reset` seeks back to the start of the file, so the
/// same reader can serve several sessions.
#[derive(Debug)]
pub struct FileReader {
    path: PathBuf,
    stream: StreamReader<BufReader<File>>,
}

impl FileReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TemplateError::Read(std::io::Error::new(
                e.kind(),
                format!("cannot open '{}': {}", path.display(), e),
            ))
        })?;
        debug!(path = %path.display(), "opened template file");

        Ok(Self {
            path: path.to_path_buf(),
            stream: StreamReader::new(BufReader::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileReader {
    fn next_line(&mut self) -> Result<Option<Span<'_>>> {
        self.stream.next_line()
    }

    fn reset(&mut self) -> Result<()> {
        self.stream.rewind()
    }
}
