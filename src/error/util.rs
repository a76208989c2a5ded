//! Utility functions for error handling
//!
//! Filesystem helpers that attach the path and purpose of an operation to
//! any error they return.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ReportError, Result};

/// Open a file for reading with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.is_file() {
        return Err(ReportError::io(
            format!("Expected a file for: {purpose}"),
            path,
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let message = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions".to_string(),
            _ => format!("Failed to open file for: {purpose}"),
        };
        ReportError::io(message, path, e)
    })
}

/// Create (or truncate) a file for writing with rich error information
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::create(path)
        .map_err(|e| ReportError::io(format!("Failed to create file for: {purpose}"), path, e))
}

/// Check that a directory exists and is readable
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.is_dir() {
        return Err(ReportError::io(
            format!("Expected a directory for: {purpose}"),
            path,
            io::Error::new(io::ErrorKind::NotFound, "directory not found"),
        ));
    }

    fs::read_dir(path)
        .map(|_| ())
        .map_err(|e| ReportError::io(format!("Failed to access directory for: {purpose}"), path, e))
}

/// Create the output directory (and parents) if it does not exist yet
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| ReportError::io("Failed to create output directory", path, e))
}
