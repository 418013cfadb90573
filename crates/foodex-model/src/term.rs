//! The catalogue term entity and forbidden-process records.

use serde::{Deserialize, Serialize};

use crate::codes::TermCode;
use crate::enums::{TermStatus, TermType};
use crate::facet::{FacetRef, ProcessOrdinal};

/// A term from the FoodEx2 catalogue.
///
/// Hierarchy placements live outside the term, keyed by
/// `(term, hierarchy)`; the term itself carries the typology and the
/// inherited facets parsed from the `implicitFacets` column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    pub code: TermCode,
    pub extended_name: String,
    pub short_name: Option<String>,
    pub scope_note: Option<String>,
    pub term_type: TermType,
    /// `detailLevel` column; `H` marks a hierarchy-level term.
    pub detail_level: Option<String>,
    pub status: TermStatus,
    pub deprecated: bool,
    /// Facets inherited automatically by the term, parsed at load time.
    pub implicit_facets: Vec<FacetRef>,
}

impl Term {
    /// True when the term sits at hierarchy detail level (`detailLevel = H`).
    pub fn is_hierarchy_detail(&self) -> bool {
        self.detail_level.as_deref() == Some("H")
    }

    pub fn is_dismissed(&self) -> bool {
        self.status == TermStatus::Dismissed
    }

    /// Display name: the extended name, falling back to the code.
    pub fn name(&self) -> &str {
        if self.extended_name.is_empty() {
            self.code.as_str()
        } else {
            &self.extended_name
        }
    }
}

/// One row of the forbidden-process table.
///
/// The process is forbidden for every term at or below `root_group` in the
/// reporting hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForbiddenProcess {
    pub root_group: TermCode,
    pub process: TermCode,
    pub ordinal: ProcessOrdinal,
}
