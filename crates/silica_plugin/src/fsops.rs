//! Filesystem helpers for the on-disk stylesheet cache.

use std::fs;
use std::path::Path;

use crate::error::PluginError;

/// Writes a file, creating any missing parent directories first.
///
/// Overwrites an existing file at the path. Guarantees that arbitrarily
/// nested synthetic paths never fail with a missing-directory error.
pub fn write_file_recursive(path: &Path, contents: &str) -> Result<(), PluginError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PluginError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(path, contents).map_err(|e| PluginError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Recursively deletes a directory tree.
///
/// Removes every file, recurses into every subdirectory, then removes the
/// now-empty directory itself. A nonexistent path is a no-op, not an error,
/// so build-end cleanup can run unconditionally.
pub fn delete_all(path: &Path) -> Result<(), PluginError> {
    if !path.exists() {
        return Ok(());
    }

    let entries = fs::read_dir(path).map_err(|e| PluginError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| PluginError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let child = entry.path();
        if child.is_dir() {
            delete_all(&child)?;
        } else {
            fs::remove_file(&child).map_err(|e| PluginError::Io {
                path: child.clone(),
                source: e,
            })?;
        }
    }

    fs::remove_dir(path).map_err(|e| PluginError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
