//! Atomic file writes for expanded output.
//!
//! All writes follow this pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk
//! 3. Rename it over the target
//!
//! The temporary file is named `.{filename}.tmp` and may remain after a crash.

use crate::error::{Result, TemplateError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Atomically write bytes to a file.
///
/// ```no_run
/// use tinytpl::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("out.txt"), b"Hello, world!\n")?;
/// # Ok::<(), tinytpl::error::TemplateError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            TemplateError::Write(std::io::Error::new(
                e.kind(),
                format!(
                    "failed to create parent directory '{}': {}",
                    parent.display(),
                    e
                ),
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TemplateError::Write(std::io::Error::new(
            e.kind(),
            format!("failed to replace '{}': {}", path.display(), e),
        ))
    })?;

    debug!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            TemplateError::UserError(format!("invalid output path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.tmp", filename);
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(TemplateError::Write)?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(TemplateError::Write(e));
    }

    Ok(())
}
