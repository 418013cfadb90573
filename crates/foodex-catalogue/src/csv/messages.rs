//! Loader for `warning_messages.csv`, the optional semicolon-delimited
//! rule-message table. Rows override the built-in message text and
//! severity per rule id.

use std::path::Path;

use foodex_model::{RuleDefinition, Severity};

use crate::csv_utils::{get_field, get_optional, read_csv_rows, require_column};
use crate::error::Result;

pub fn parse_messages_csv(path: &Path) -> Result<Vec<RuleDefinition>> {
    let rows = read_csv_rows(path, b';')?;
    require_column(&rows, path, "ID")?;

    let mut definitions = Vec::with_capacity(rows.len());
    for row in &rows {
        let id = get_field(row, "ID");
        if id.is_empty() {
            continue;
        }
        let severity = get_optional(row, "SEVERITY")
            .and_then(|raw| raw.parse::<Severity>().ok())
            .unwrap_or(Severity::High);
        definitions.push(RuleDefinition {
            id,
            message: get_field(row, "DESCRIPTION"),
            severity,
        });
    }
    Ok(definitions)
}
