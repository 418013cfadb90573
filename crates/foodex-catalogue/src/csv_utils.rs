//! Shared CSV utilities for loading catalogue files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::{CatalogueError, Result};

/// Environment variable for overriding the catalogue directory.
pub const CATALOGUE_ENV_VAR: &str = "FOODEX_CATALOGUE_DIR";

/// Get the default catalogue root directory.
///
/// Checks the `FOODEX_CATALOGUE_DIR` environment variable first, then
/// falls back to `catalogue/` relative to the working directory.
pub fn default_catalogue_root() -> PathBuf {
    if let Ok(root) = std::env::var(CATALOGUE_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from("catalogue")
}

/// Read a delimited file into a vector of row maps.
///
/// Each row is a BTreeMap keyed by header name. Handles BOM characters and
/// trims whitespace from headers and values.
pub fn read_csv_rows(path: &Path, delimiter: u8) -> Result<Vec<BTreeMap<String, String>>> {
    let bytes = std::fs::read(path).map_err(|e| CatalogueError::io(path, e))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let headers = reader
        .headers()
        .map_err(|e| CatalogueError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| CatalogueError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers
                .get(idx)
                .unwrap_or("")
                .trim_matches('\u{feff}')
                .trim()
                .to_string();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Get a field value from a row, returning empty string if not present.
pub fn get_field(row: &BTreeMap<String, String>, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

/// Get an optional field value from a row (None if empty or missing).
pub fn get_optional(row: &BTreeMap<String, String>, key: &str) -> Option<String> {
    row.get(key).filter(|v| !v.is_empty()).cloned()
}

/// Require a column to be present in at least one row of the file.
pub fn require_column(
    rows: &[BTreeMap<String, String>],
    path: &Path,
    column: &str,
) -> Result<()> {
    let present = rows.first().is_none_or(|row| row.contains_key(column));
    if present {
        Ok(())
    } else {
        Err(CatalogueError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
    }
}

/// Parse the catalogue's boolean encodings (`1`/`0`, `true`/`false`,
/// `yes`/`no`).
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
