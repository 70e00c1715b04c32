//! Logging utilities
//!
//! Consistent log lines for the table loads performed at startup.

use std::path::Path;
use std::time::Duration;

use crate::models::table::TableKind;

/// Log the start of a table load
///
/// # Arguments
/// * `kind` - Which table is being loaded
/// * `path` - Path of the file being read
pub fn log_load_start(kind: TableKind, path: &Path) {
    log::info!("Loading {} from {}", kind, path.display());
}

/// Log a completed table load
///
/// # Arguments
/// * `kind` - Which table was loaded
/// * `path` - Path of the file that was read
/// * `diseases` - Number of distinct disease keys
/// * `rows` - Number of data rows accepted
/// * `elapsed` - Optional elapsed time
pub fn log_load_complete(
    kind: TableKind,
    path: &Path,
    diseases: usize,
    rows: usize,
    elapsed: Option<Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!(
            "Loaded {} diseases ({} rows) of {} from {} in {:?}",
            diseases,
            rows,
            kind,
            path.display(),
            duration
        );
    } else {
        log::info!(
            "Loaded {} diseases ({} rows) of {} from {}",
            diseases,
            rows,
            kind,
            path.display()
        );
    }
}

/// Log a row that was dropped from a table
///
/// # Arguments
/// * `path` - File the row came from
/// * `line` - Line number reported by the reader, if known
/// * `reason` - Why the row was dropped
pub fn log_row_skipped(path: &Path, line: Option<u64>, reason: &str) {
    match line {
        Some(line) => log::warn!("Skipping row at line {} of {}: {}", line, path.display(), reason),
        None => log::warn!("Skipping row in {}: {}", path.display(), reason),
    }
}

/// Log a failed load that falls back to an empty table
pub fn log_load_failure(kind: TableKind, error: &dyn std::error::Error) {
    log::error!("Could not load {kind}, continuing with an empty table: {error}");
}
