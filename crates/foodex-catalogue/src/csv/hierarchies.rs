//! Loader for `term_hierarchies.csv`: one row per (term, hierarchy)
//! placement with an optional parent link.

use std::path::Path;

use foodex_model::TermCode;

use crate::csv_utils::{get_field, get_optional, parse_flag, read_csv_rows, require_column};
use crate::error::{CatalogueError, Result};

/// A term's placement in one hierarchy.
#[derive(Debug, Clone)]
pub struct HierarchyEdge {
    pub term: TermCode,
    pub hierarchy: String,
    /// Direct parent within the hierarchy; roots have none.
    pub parent: Option<TermCode>,
    pub reportable: bool,
}

pub fn parse_hierarchies_csv(path: &Path) -> Result<Vec<HierarchyEdge>> {
    let rows = read_csv_rows(path, b',')?;
    require_column(&rows, path, "termCode")?;
    require_column(&rows, path, "hierarchyCode")?;

    let mut edges = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let row_number = idx + 2;
        let invalid = |source| CatalogueError::InvalidValue {
            path: path.to_path_buf(),
            row: row_number,
            source,
        };

        let term: TermCode = get_field(row, "termCode").parse().map_err(invalid)?;
        let parent = match get_optional(row, "parentCode") {
            Some(raw) => Some(raw.parse().map_err(invalid)?),
            None => None,
        };
        let reportable = match get_optional(row, "reportable") {
            Some(raw) => parse_flag(&raw),
            None => true,
        };

        edges.push(HierarchyEdge {
            term,
            hierarchy: get_field(row, "hierarchyCode"),
            parent,
            reportable,
        });
    }
    Ok(edges)
}
