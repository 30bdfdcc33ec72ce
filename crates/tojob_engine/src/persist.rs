use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("config directory missing or not writable: {0}")]
    ConfigDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Atomically write `content` to `path` by writing a temp file in the same
/// directory and renaming it into place.
pub fn atomic_write(path: &Path, content: &str) -> Result<(), PersistError> {
    let dir = path
        .parent()
        .ok_or_else(|| PersistError::ConfigDir("path has no parent directory".into()))?;
    ensure_dir(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace an existing file if present to keep the rename portable.
    if path.exists() {
        fs::remove_file(path)?;
    }
    tmp.persist(path).map_err(|e| PersistError::Io(e.error))?;
    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::ConfigDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::ConfigDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::ConfigDir(e.to_string()))?;
    }
    Ok(())
}
