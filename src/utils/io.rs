//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tempfile::{Builder, TempDir};

/// Read file contents with standardized error handling.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write content to file with standardized error handling.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Create a directory and any missing parents.
pub fn create_dir_all(path: &Path, operation: &str) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Create a uniquely named directory inside `parent` whose name starts with
/// `prefix`. It is removed when the returned guard is dropped.
///
/// The directory takes the permissions of `parent` rather than the private
/// mode temporary directories are created with, so the tree keeps ordinary
/// permissions once it is renamed into place.
pub fn create_staging_dir(parent: &Path, prefix: &str, operation: &str) -> Result<TempDir> {
    let io_err = |e: std::io::Error| Error::internal_io(e.to_string(), Some(operation.to_string()));

    let staging = Builder::new().prefix(prefix).tempdir_in(parent).map_err(io_err)?;
    let permissions = fs::metadata(parent).map_err(io_err)?.permissions();
    fs::set_permissions(staging.path(), permissions).map_err(io_err)?;

    Ok(staging)
}

/// Move a finished directory into place.
///
/// The rename is atomic on POSIX filesystems when both paths share a parent,
/// so readers see either no directory or the complete tree.
pub fn rename_dir(from: &Path, to: &Path, operation: &str) -> Result<()> {
    fs::rename(from, to)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}
