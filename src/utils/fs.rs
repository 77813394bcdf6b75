//! Filesystem utilities.
//!
//! Document reads map a missing file to [`MigError::NotFound`]. Writes go
//! through temp files in the destination directory and replace their targets
//! as a group: a failure part way through restores the earlier targets.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tempfile::{Builder, NamedTempFile, TempPath};
use tracing::{debug, warn};

use crate::error::{MigError, Result};

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Read a file to string, failing with `NotFound` when it is absent.
pub fn read_required(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MigError::NotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Read and decode a JSON document.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let raw = read_required(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        MigError::Serialization(format!("decode {}: {err}", path.display()))
    })
}

/// Write several documents so that either all of them land or none do.
///
/// Targets that are directories or read-only files are rejected before
/// anything is written. Each body is then written to a temp file beside its
/// target. Existing targets are moved to a backup before the temp file takes
/// their place; if any later step fails every placed document is rolled back.
pub fn write_documents(documents: &[(PathBuf, &str)]) -> Result<()> {
    for (target, _) in documents {
        check_replaceable(target)?;
    }

    let mut staged = Vec::with_capacity(documents.len());
    for (target, body) in documents {
        let dir = parent_dir(target);
        ensure_dir(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(body.as_bytes())?;
        tmp.flush()?;
        staged.push((tmp, target.as_path()));
    }

    let mut placed = Vec::with_capacity(staged.len());
    for (tmp, target) in staged {
        match place(tmp, target) {
            Ok(entry) => placed.push(entry),
            Err(err) => {
                rollback(placed);
                return Err(err);
            }
        }
    }

    // Dropping the backups removes them.
    for entry in placed {
        debug!(path = %entry.target.display(), "wrote document");
    }
    Ok(())
}

/// A document moved into place, with the file it replaced.
struct Placed<'a> {
    target: &'a Path,
    backup: Option<TempPath>,
}

fn parent_dir(target: &Path) -> &Path {
    target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn check_replaceable(target: &Path) -> Result<()> {
    let Ok(meta) = std::fs::symlink_metadata(target) else {
        return Ok(());
    };
    if meta.is_dir() {
        return Err(MigError::Io(io::Error::new(
            io::ErrorKind::IsADirectory,
            format!("cannot replace directory {}", target.display()),
        )));
    }
    if meta.permissions().readonly() {
        return Err(MigError::Io(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("cannot replace read-only file {}", target.display()),
        )));
    }
    Ok(())
}

fn place(tmp: NamedTempFile, target: &Path) -> Result<Placed<'_>> {
    let backup = if std::fs::symlink_metadata(target).is_ok() {
        let backup = Builder::new()
            .prefix(".skillmig-backup")
            .tempfile_in(parent_dir(target))?
            .into_temp_path();
        std::fs::rename(target, &backup)?;
        Some(backup)
    } else {
        None
    };

    if let Err(err) = tmp.persist(target) {
        if let Some(backup) = backup {
            restore(target, backup);
        }
        return Err(MigError::Io(err.error));
    }
    Ok(Placed { target, backup })
}

fn restore(target: &Path, backup: TempPath) {
    if let Err(err) = std::fs::rename(&backup, target) {
        // Dropping `backup` would delete the previous contents.
        match backup.keep() {
            Ok(path) => warn!(
                path = %target.display(),
                backup = %path.display(),
                error = %err,
                "could not restore document; previous contents kept in backup"
            ),
            Err(keep_err) => warn!(
                path = %target.display(),
                error = %keep_err,
                "could not restore document"
            ),
        }
    }
}

fn rollback(placed: Vec<Placed<'_>>) {
    for entry in placed.into_iter().rev() {
        match entry.backup {
            Some(backup) => restore(entry.target, backup),
            None => {
                if let Err(err) = std::fs::remove_file(entry.target) {
                    warn!(path = %entry.target.display(), error = %err, "could not remove document");
                }
            }
        }
    }
}
