//! The read-only catalogue store.
//!
//! All reference data is loaded once at startup and immutable afterwards.
//! Queries never fail for missing terms; absence is a `None` the caller
//! interprets. Only unreadable files and malformed rows are errors, and
//! those are fatal at load time.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use foodex_model::{
    FacetRef, ForbiddenProcess, ProcessOrdinal, RuleDefinition, RuleRegistry, Term, TermCode,
};

use crate::csv::forbidden::parse_forbidden_csv;
use crate::csv::hierarchies::{HierarchyEdge, parse_hierarchies_csv};
use crate::csv::messages::parse_messages_csv;
use crate::csv::terms::parse_terms_csv;
use crate::error::{CatalogueError, Result};
use crate::resolver::HierarchyResolver;

/// Well-known hierarchy codes that are not paired with a facet group.
pub mod hierarchy {
    /// Membership marks a term as usable for official data submission.
    pub const REPORT: &str = "report";
    /// Membership marks a term as suitable for exposure reporting.
    pub const EXPO: &str = "expo";
    /// The master hierarchy containing every term.
    pub const MASTER: &str = "master";
    /// Source-commodities hierarchy (facet group F27).
    pub const RACSOURCE: &str = "racsource";
    /// Process hierarchy (facet group F28).
    pub const PROCESS: &str = "process";
}

#[derive(Debug, Clone)]
struct Placement {
    parent: Option<TermCode>,
}

/// Read-only access to terms, hierarchies, forbidden processes, ordinal
/// codes and rule messages.
#[derive(Debug)]
pub struct Catalogue {
    terms: HashMap<TermCode, Term>,
    placements: HashMap<String, HashMap<TermCode, Placement>>,
    forbidden_by_root: HashMap<TermCode, Vec<ForbiddenProcess>>,
    ordinals: HashMap<TermCode, ProcessOrdinal>,
    rules: RuleRegistry,
}

/// Load-time counts, also served by the CLI `catalogue summary` command.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogueSummary {
    pub term_count: usize,
    pub hierarchy_count: usize,
    pub edge_count: usize,
    pub forbidden_process_count: usize,
    pub rule_message_count: usize,
}

impl Catalogue {
    /// Load the catalogue from a directory (see crate docs for the layout).
    ///
    /// `terms.csv`, `term_hierarchies.csv` and `BR_Data.csv` are required;
    /// `warning_messages.csv` is optional.
    pub fn load(dir: &Path) -> Result<Self> {
        let terms_path = dir.join("terms.csv");
        let hierarchies_path = dir.join("term_hierarchies.csv");
        let forbidden_path = dir.join("BR_Data.csv");
        let messages_path = dir.join("warning_messages.csv");

        for required in [&terms_path, &hierarchies_path, &forbidden_path] {
            if !required.is_file() {
                return Err(CatalogueError::MissingFile {
                    path: required.clone(),
                });
            }
        }

        let terms = parse_terms_csv(&terms_path)?;
        let edges = parse_hierarchies_csv(&hierarchies_path)?;
        let forbidden = parse_forbidden_csv(&forbidden_path)?;
        let overrides = if messages_path.is_file() {
            parse_messages_csv(&messages_path)?
        } else {
            Vec::new()
        };

        let catalogue = Self::from_parts(terms, edges, forbidden, overrides);
        let summary = catalogue.summary();
        info!(
            term_count = summary.term_count,
            hierarchy_count = summary.hierarchy_count,
            edge_count = summary.edge_count,
            forbidden_process_count = summary.forbidden_process_count,
            "catalogue loaded"
        );
        Ok(catalogue)
    }

    /// Assemble a catalogue from already-parsed parts. Used by tests and
    /// embedders that source the data elsewhere.
    pub fn from_parts(
        terms: Vec<Term>,
        edges: Vec<HierarchyEdge>,
        forbidden: Vec<ForbiddenProcess>,
        message_overrides: Vec<RuleDefinition>,
    ) -> Self {
        let terms: HashMap<TermCode, Term> =
            terms.into_iter().map(|t| (t.code.clone(), t)).collect();

        let mut placements: HashMap<String, HashMap<TermCode, Placement>> = HashMap::new();
        for edge in edges {
            placements.entry(edge.hierarchy).or_default().insert(
                edge.term,
                Placement {
                    parent: edge.parent,
                },
            );
        }

        let mut forbidden_by_root: HashMap<TermCode, Vec<ForbiddenProcess>> = HashMap::new();
        let mut ordinals: HashMap<TermCode, ProcessOrdinal> = HashMap::new();
        for record in forbidden {
            ordinals.insert(record.process.clone(), record.ordinal);
            forbidden_by_root
                .entry(record.root_group.clone())
                .or_default()
                .push(record);
        }

        let mut rules = RuleRegistry::builtin();
        for definition in message_overrides {
            rules.apply_override(definition);
        }

        Self {
            terms,
            placements,
            forbidden_by_root,
            ordinals,
            rules,
        }
    }

    /// Exact code lookup; a missing term is a successful `None`.
    pub fn term(&self, code: &TermCode) -> Option<&Term> {
        self.terms.get(code)
    }

    /// Facets inherited by a term, parsed from the catalogue at load time.
    pub fn implicit_facets(&self, code: &TermCode) -> &[FacetRef] {
        self.terms
            .get(code)
            .map(|t| t.implicit_facets.as_slice())
            .unwrap_or(&[])
    }

    /// Direct parent of a term within one hierarchy.
    pub fn parent(&self, code: &TermCode, hierarchy: &str) -> Option<&TermCode> {
        self.placements
            .get(hierarchy)?
            .get(code)?
            .parent
            .as_ref()
    }

    /// Whether the term appears in the hierarchy at all.
    pub fn is_member(&self, code: &TermCode, hierarchy: &str) -> bool {
        self.placements
            .get(hierarchy)
            .is_some_and(|h| h.contains_key(code))
    }

    /// Processes forbidden for a term: the union over the term itself and
    /// all of its ancestors in the reporting hierarchy.
    pub fn forbidden_processes_for(
        &self,
        code: &TermCode,
        resolver: &HierarchyResolver,
    ) -> Result<BTreeSet<TermCode>> {
        let mut result = BTreeSet::new();
        if let Some(records) = self.forbidden_by_root.get(code) {
            result.extend(records.iter().map(|r| r.process.clone()));
        }
        for ancestor in resolver.ancestors(code, hierarchy::REPORT)?.iter() {
            if let Some(records) = self.forbidden_by_root.get(ancestor) {
                result.extend(records.iter().map(|r| r.process.clone()));
            }
        }
        Ok(result)
    }

    /// Ordinal code of a process descriptor; unlisted processes are `0`
    /// (non-exclusive).
    pub fn process_ordinal(&self, process: &TermCode) -> ProcessOrdinal {
        self.ordinals
            .get(process)
            .copied()
            .unwrap_or(ProcessOrdinal::ZERO)
    }

    /// Message text and severity for a rule id.
    pub fn rule(&self, id: &str) -> RuleDefinition {
        self.rules.definition(id)
    }

    pub fn rule_registry(&self) -> &RuleRegistry {
        &self.rules
    }

    /// All term codes, unordered.
    pub fn term_codes(&self) -> impl Iterator<Item = &TermCode> {
        self.terms.keys()
    }

    /// Search terms by code or name substring, case-insensitive.
    /// Exact code matches sort first, then by extended name.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Term> {
        let needle = query.trim().to_ascii_uppercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<&Term> = self
            .terms
            .values()
            .filter(|term| {
                term.code.as_str().contains(&needle)
                    || term.extended_name.to_ascii_uppercase().contains(&needle)
            })
            .collect();
        hits.sort_by_key(|term| {
            (
                term.code.as_str() != needle,
                term.deprecated,
                term.extended_name.clone(),
            )
        });
        hits.truncate(limit);
        hits
    }

    pub fn summary(&self) -> CatalogueSummary {
        CatalogueSummary {
            term_count: self.terms.len(),
            hierarchy_count: self.placements.len(),
            edge_count: self.placements.values().map(HashMap::len).sum(),
            forbidden_process_count: self
                .forbidden_by_root
                .values()
                .map(Vec::len)
                .sum(),
            rule_message_count: self.rules.len(),
        }
    }
}
