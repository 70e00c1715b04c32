//! Disease table loading utilities
//!
//! Reads the comma-separated symptom, description and precaution files. Each
//! file starts with a header row, which is skipped; every following row holds
//! a disease name and any number of values.
//!
//! Two entry points are provided per table. The `read_*` functions return
//! errors to the caller; the `load_*` functions log the error and return an
//! empty table so the application keeps running with whatever data it has.

use std::io;
use std::path::Path;
use std::time::Instant;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::models::table::{
    DescriptionTable, DiseaseTable, PrecautionTable, SymptomTable, TableKind,
};
use crate::utils::logging::{
    log_load_complete, log_load_failure, log_load_start, log_row_skipped,
};

/// Split a record into its disease key and trimmed, non-empty values
///
/// Returns `None` for a row without a disease name.
#[must_use]
pub fn parse_row(record: &StringRecord) -> Option<(String, Vec<String>)> {
    let disease = record.get(0)?.trim();
    if disease.is_empty() {
        return None;
    }

    let values = record
        .iter()
        .skip(1)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();

    Some((disease.to_string(), values))
}

/// Parse a table from any reader
///
/// Rows that cannot be decoded or lack a disease name are skipped with a
/// warning. `source` only labels log lines.
pub fn parse_table<R: io::Read>(reader: R, source: &Path) -> Result<DiseaseTable> {
    parse_rows(reader, source).map(|(table, _)| table)
}

/// Parse a table, also returning the number of accepted rows
fn parse_rows<R: io::Read>(reader: R, source: &Path) -> Result<(DiseaseTable, usize)> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    // Surface a broken file before any rows are read
    csv_reader.headers()?;

    let mut table = DiseaseTable::new();
    let mut record = StringRecord::new();
    let mut rows = 0usize;

    loop {
        match csv_reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => match parse_row(&record) {
                Some((disease, values)) => {
                    table.extend_entry(&disease, values);
                    rows += 1;
                }
                None => log_row_skipped(
                    source,
                    record.position().map(csv::Position::line),
                    "missing disease name",
                ),
            },
            Err(e) if is_row_error(&e) => {
                let line = e.position().map(csv::Position::line);
                log_row_skipped(source, line, &e.to_string());
            }
            Err(e) => return Err(e.into()),
        }
    }

    log::debug!(
        "Parsed {} rows into {} diseases from {}",
        rows,
        table.len(),
        source.display()
    );
    Ok((table, rows))
}

/// Whether a CSV error only affects the current record
fn is_row_error(error: &csv::Error) -> bool {
    matches!(
        error.kind(),
        csv::ErrorKind::Utf8 { .. } | csv::ErrorKind::UnequalLengths { .. }
    )
}

/// Read a table from a file, returning any failure
pub fn read_table(path: &Path, kind: TableKind) -> Result<DiseaseTable> {
    let start = Instant::now();
    log_load_start(kind, path);

    let file = safe_open_file(path)?;
    let (table, rows) = parse_rows(file, path)?;

    log_load_complete(kind, path, table.len(), rows, Some(start.elapsed()));
    Ok(table)
}

/// Load a table from a file, falling back to an empty table on any failure
#[must_use]
pub fn load_table(path: &Path, kind: TableKind) -> DiseaseTable {
    match read_table(path, kind) {
        Ok(table) => table,
        Err(e) => {
            log_load_failure(kind, &e);
            DiseaseTable::new()
        }
    }
}

/// Load the disease to symptom table
#[must_use]
pub fn load_symptoms(path: &Path) -> SymptomTable {
    load_table(path, TableKind::Symptoms)
}

/// Load the disease to description table
#[must_use]
pub fn load_descriptions(path: &Path) -> DescriptionTable {
    load_table(path, TableKind::Descriptions)
}

/// Load the disease to precaution table
#[must_use]
pub fn load_precautions(path: &Path) -> PrecautionTable {
    load_table(path, TableKind::Precautions)
}
