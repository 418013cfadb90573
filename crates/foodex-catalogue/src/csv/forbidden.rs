//! Loader for `BR_Data.csv`, the semicolon-delimited forbidden-process
//! table. Each row names one process forbidden under one root group along
//! with the process's ordinal code.

use std::path::Path;

use foodex_model::{ForbiddenProcess, ProcessOrdinal, TermCode};

use crate::csv_utils::{get_field, get_optional, read_csv_rows, require_column};
use crate::error::{CatalogueError, Result};

pub fn parse_forbidden_csv(path: &Path) -> Result<Vec<ForbiddenProcess>> {
    let rows = read_csv_rows(path, b';')?;
    require_column(&rows, path, "ROOT_GROUP_CODE")?;
    require_column(&rows, path, "FORBIDDEN_PROCS")?;

    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let row_number = idx + 2;
        let invalid = |source| CatalogueError::InvalidValue {
            path: path.to_path_buf(),
            row: row_number,
            source,
        };

        let root_group: TermCode = get_field(row, "ROOT_GROUP_CODE").parse().map_err(invalid)?;
        let ordinal: ProcessOrdinal = match get_optional(row, "ORDINAL_CODE") {
            Some(raw) => raw.parse().map_err(invalid)?,
            None => ProcessOrdinal::ZERO,
        };

        // FORBIDDEN_PROCS may chain several codes with '$'.
        for raw in get_field(row, "FORBIDDEN_PROCS").split('$') {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let process: TermCode = raw.parse().map_err(invalid)?;
            records.push(ForbiddenProcess {
                root_group: root_group.clone(),
                process,
                ordinal,
            });
        }
    }
    Ok(records)
}
