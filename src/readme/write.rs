//! Reading and atomically replacing README files.

use crate::error::IndexError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Read a README if it exists. `Ok(None)` when the file is absent.
pub fn read_existing(path: &Path) -> Result<Option<String>, IndexError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(IndexError::read(path, e)),
    }
}

/// Whether `path` already holds exactly `contents`. Unreadable or absent files
/// count as different so the caller overwrites them.
pub fn matches_existing(path: &Path, contents: &[u8]) -> bool {
    match fs::read(path) {
        Ok(existing) => existing == contents,
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Existing file unreadable, replacing");
            false
        }
    }
}

/// Replace `path` with `contents` via a temp file in the same directory and a
/// rename, so readers never observe a partial file. Existing permissions are
/// carried over; new files get the usual 0644.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), IndexError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| IndexError::write(path, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| IndexError::write(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| IndexError::write(path, e))?;

    match fs::metadata(path) {
        Ok(meta) => tmp
            .as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| IndexError::write(path, e))?,
        Err(_) => set_default_permissions(tmp.as_file()).map_err(|e| IndexError::write(path, e))?,
    }

    tmp.persist(path)
        .map_err(|e| IndexError::write(path, e.error))?;
    Ok(())
}

#[cfg(unix)]
fn set_default_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
