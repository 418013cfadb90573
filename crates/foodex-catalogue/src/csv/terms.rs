//! Loader for `terms.csv`.
//!
//! Column names follow the MTX catalogue export: `termCode`,
//! `termExtendedName`, `termShortName`, `termScopeNote`, `termType`,
//! `detailLevel`, `status`, `deprecated`, `implicitFacets`.

use std::path::Path;

use foodex_model::{Term, TermStatus, TermType, parse_facet_list};

use crate::csv_utils::{get_field, get_optional, parse_flag, read_csv_rows, require_column};
use crate::error::{CatalogueError, Result};

pub fn parse_terms_csv(path: &Path) -> Result<Vec<Term>> {
    let rows = read_csv_rows(path, b',')?;
    require_column(&rows, path, "termCode")?;
    require_column(&rows, path, "termType")?;

    let mut terms = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let row_number = idx + 2; // header is row 1
        let invalid = |source| CatalogueError::InvalidValue {
            path: path.to_path_buf(),
            row: row_number,
            source,
        };

        let code = get_field(row, "termCode").parse().map_err(invalid)?;
        let term_type: TermType = get_field(row, "termType").parse().map_err(invalid)?;
        let status = match get_optional(row, "status") {
            Some(raw) => raw.parse().map_err(invalid)?,
            None => TermStatus::Approved,
        };
        let implicit_facets = match get_optional(row, "implicitFacets") {
            Some(raw) => parse_facet_list(&raw).map_err(invalid)?,
            None => Vec::new(),
        };

        terms.push(Term {
            code,
            extended_name: get_field(row, "termExtendedName"),
            short_name: get_optional(row, "termShortName"),
            scope_note: get_optional(row, "termScopeNote"),
            term_type,
            detail_level: get_optional(row, "detailLevel"),
            status,
            deprecated: parse_flag(&get_field(row, "deprecated")),
            implicit_facets,
        });
    }
    Ok(terms)
}
