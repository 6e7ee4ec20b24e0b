//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::RosterError;

/// Read a text file, returning an empty string if the file doesn't exist
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, RosterError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(String::new());
    }

    let mut file = File::open(path)
        .map_err(|e| RosterError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| RosterError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(contents)
}

/// Write a text file atomically (write to temp, then rename)
///
/// The file is either completely replaced or left untouched, so a crash
/// mid-write can't leave a half-written roster behind. Every call gets its
/// own uniquely named temp file, so concurrent writers never share one.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), RosterError> {
    let path = path.as_ref();

    // Temp file must sit in the same directory for the rename to be atomic
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| {
                RosterError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
            parent
        }
        _ => Path::new("."),
    };

    // Dropped on any early return, which removes the temp file
    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|e| RosterError::Storage(format!("Failed to create temp file: {}", e)))?;

    temp.write_all(contents.as_bytes())
        .map_err(|e| RosterError::Storage(format!("Failed to write data: {}", e)))?;

    temp.flush()
        .map_err(|e| RosterError::Storage(format!("Failed to flush data: {}", e)))?;

    temp.as_file()
        .sync_all()
        .map_err(|e| RosterError::Storage(format!("Failed to sync data: {}", e)))?;

    temp.persist(path).map_err(|e| {
        RosterError::Storage(format!("Failed to rename temp file: {}", e.error))
    })?;

    Ok(())
}
