//! Utility functions for error handling
//!
//! This module provides file-opening helpers that classify failures into the
//! crate's error variants.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DiagnosisError, Result};

/// Open a file, distinguishing a missing file from other I/O failures
///
/// # Arguments
/// * `path` - The path to the file to open
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a classified error
pub fn safe_open_file(path: &Path) -> Result<fs::File> {
    if !path.exists() {
        return Err(DiagnosisError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    if !path.is_file() {
        return Err(DiagnosisError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "Path is not a file"),
        });
    }

    fs::File::open(path).map_err(|e| match e.kind() {
        // Deleted between the existence check and the open
        io::ErrorKind::NotFound => DiagnosisError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => DiagnosisError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })
}
