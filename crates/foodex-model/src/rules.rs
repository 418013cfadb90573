//! Rule definitions, built-in messages and the rule registry.
//!
//! Every check the engine performs is identified by a stable rule id:
//! `BR01`..`BR31` for the business rules, `VBA-*` for structural findings
//! and `STRUCT_*` for parser-level shape violations. Message text and
//! severity come from the catalogue's rule-message table when present and
//! fall back to the built-in table below.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::Severity;

/// Well-known rule ids.
pub mod rule_ids {
    pub const BR01: &str = "BR01";
    pub const BR02: &str = "BR02";
    pub const BR03: &str = "BR03";
    pub const BR04: &str = "BR04";
    pub const BR05: &str = "BR05";
    pub const BR06: &str = "BR06";
    pub const BR07: &str = "BR07";
    pub const BR08: &str = "BR08";
    pub const BR09: &str = "BR09";
    pub const BR10: &str = "BR10";
    pub const BR11: &str = "BR11";
    pub const BR12: &str = "BR12";
    pub const BR13: &str = "BR13";
    pub const BR14: &str = "BR14";
    pub const BR15: &str = "BR15";
    pub const BR16: &str = "BR16";
    pub const BR17: &str = "BR17";
    pub const BR18: &str = "BR18";
    pub const BR19: &str = "BR19";
    pub const BR20: &str = "BR20";
    pub const BR21: &str = "BR21";
    pub const BR22: &str = "BR22";
    pub const BR23: &str = "BR23";
    pub const BR24: &str = "BR24";
    pub const BR25: &str = "BR25";
    pub const BR26: &str = "BR26";
    pub const BR27: &str = "BR27";
    pub const BR28: &str = "BR28";
    pub const BR29: &str = "BR29";
    pub const BR30: &str = "BR30";
    pub const BR31: &str = "BR31";

    /// Base prefix fails the five-character shape.
    pub const STRUCT_BASE: &str = "STRUCT_BASE";
    /// A facet fragment fails the `GROUP.DESCRIPTOR` shape.
    pub const STRUCT_FACET: &str = "STRUCT_FACET";
    /// Base term missing from the catalogue.
    pub const NOT_FOUND: &str = "VBA-NOTFOUND";
    /// Facet descriptor missing from the catalogue.
    pub const FACET_NOT_FOUND: &str = "VBA-FACET404";
    /// Descriptor not a member of the group's hierarchy.
    pub const CATEGORY: &str = "VBA-CATEGORY";
    /// Single-cardinality group used more than once.
    pub const CARDINALITY: &str = "VBA-CARDINALITY";
    /// The same facet appears twice.
    pub const DUPLICATE: &str = "VBA-DUPLICATE";
    /// Explicit facets already implied by the base term were removed.
    pub const IMPLICIT: &str = "VBA-IMPLICIT";
}

/// Static definition of a rule: its message text and severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub id: String,
    pub message: String,
    pub severity: Severity,
}

/// Registry of rule definitions with catalogue overrides on top of the
/// built-in table.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    definitions: BTreeMap<String, RuleDefinition>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleRegistry {
    /// Registry holding only the built-in message table.
    pub fn builtin() -> Self {
        let mut definitions = BTreeMap::new();
        for (id, severity, message) in BUILTIN_DEFINITIONS {
            definitions.insert(
                (*id).to_string(),
                RuleDefinition {
                    id: (*id).to_string(),
                    message: (*message).to_string(),
                    severity: *severity,
                },
            );
        }
        Self { definitions }
    }

    /// Replace or add a definition (catalogue rule-message table).
    pub fn apply_override(&mut self, definition: RuleDefinition) {
        self.definitions.insert(definition.id.clone(), definition);
    }

    pub fn get(&self, id: &str) -> Option<&RuleDefinition> {
        self.definitions.get(id)
    }

    /// Definition for a rule id, falling back to a HIGH-severity stub so an
    /// unknown id never silently disappears.
    pub fn definition(&self, id: &str) -> RuleDefinition {
        self.definitions.get(id).cloned().unwrap_or(RuleDefinition {
            id: id.to_string(),
            message: format!("rule {id} violated"),
            severity: Severity::High,
        })
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

const BUILTIN_DEFINITIONS: &[(&str, Severity, &str)] = &[
    (
        rule_ids::BR01,
        Severity::High,
        "source commodity facet not valid for this raw commodity base term",
    ),
    (rule_ids::BR02, Severity::None, "reserved rule slot"),
    (
        rule_ids::BR03,
        Severity::High,
        "F01 source facet not allowed in composite food",
    ),
    (
        rule_ids::BR04,
        Severity::High,
        "F27 source-commodities facet not allowed in composite food",
    ),
    (
        rule_ids::BR05,
        Severity::High,
        "source commodity must specialise an implicit source commodity of the derivative",
    ),
    (
        rule_ids::BR06,
        Severity::High,
        "F01 source facet on a derivative requires a source-commodities facet",
    ),
    (
        rule_ids::BR07,
        Severity::High,
        "F01 source facet only allowed with a single source-commodities facet",
    ),
    (
        rule_ids::BR08,
        Severity::High,
        "base term is not a member of the reporting hierarchy",
    ),
    (rule_ids::BR09, Severity::None, "reserved rule slot"),
    (
        rule_ids::BR10,
        Severity::Low,
        "non-specific base term; prefer a more precise term where available",
    ),
    (
        rule_ids::BR11,
        Severity::Low,
        "generic 'Processed' facet adds no information",
    ),
    (
        rule_ids::BR12,
        Severity::Low,
        "ingredient facet on raw or derivative terms covers minor ingredients only",
    ),
    (
        rule_ids::BR13,
        Severity::High,
        "physical state creates a derivative; report the existing derivative base term",
    ),
    (rule_ids::BR14, Severity::None, "reserved for ICT context"),
    (rule_ids::BR15, Severity::None, "reserved for DCF context"),
    (
        rule_ids::BR16,
        Severity::High,
        "explicit facet is broader than an implicit facet of the same group",
    ),
    (
        rule_ids::BR17,
        Severity::High,
        "facet descriptor cannot be used as base term",
    ),
    (rule_ids::BR18, Severity::None, "reserved rule slot"),
    (
        rule_ids::BR19,
        Severity::High,
        "process is forbidden for this base term",
    ),
    (rule_ids::BR20, Severity::High, "term is deprecated"),
    (rule_ids::BR21, Severity::High, "term is dismissed"),
    (
        rule_ids::BR22,
        Severity::None,
        "expression successfully validated",
    ),
    (
        rule_ids::BR23,
        Severity::Low,
        "hierarchy base term used for exposure reporting",
    ),
    (
        rule_ids::BR24,
        Severity::High,
        "hierarchy base term outside the exposure hierarchy",
    ),
    (
        rule_ids::BR25,
        Severity::High,
        "single-cardinality facet group repeated",
    ),
    (
        rule_ids::BR26,
        Severity::High,
        "mutually exclusive processes applied to the same derivative",
    ),
    (
        rule_ids::BR27,
        Severity::High,
        "processes creating different derivatives applied together",
    ),
    (
        rule_ids::BR28,
        Severity::High,
        "reconstitution or dilution not allowed on a dehydrated or concentrated base term",
    ),
    (
        rule_ids::BR29,
        Severity::Error,
        "expression structure is not well-formed",
    ),
    (
        rule_ids::BR30,
        Severity::Error,
        "expression contains unresolved codes",
    ),
    (
        rule_ids::BR31,
        Severity::Error,
        "expression violates facet composition constraints",
    ),
    (
        rule_ids::STRUCT_BASE,
        Severity::Error,
        "malformed base term code",
    ),
    (
        rule_ids::STRUCT_FACET,
        Severity::Error,
        "malformed facet in expression",
    ),
    (
        rule_ids::NOT_FOUND,
        Severity::Error,
        "base term not found in the catalogue",
    ),
    (
        rule_ids::FACET_NOT_FOUND,
        Severity::Error,
        "facet descriptor not found in the catalogue",
    ),
    (
        rule_ids::CATEGORY,
        Severity::Error,
        "facet descriptor does not belong to the facet group's hierarchy",
    ),
    (
        rule_ids::CARDINALITY,
        Severity::High,
        "facet group accepts at most one descriptor",
    ),
    (
        rule_ids::DUPLICATE,
        Severity::High,
        "duplicate facet in expression",
    ),
    (
        rule_ids::IMPLICIT,
        Severity::High,
        "facets already implicit in the base term were removed",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_all_business_rules() {
        let registry = RuleRegistry::builtin();
        for n in 1..=31 {
            let id = format!("BR{n:02}");
            assert!(registry.get(&id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn overrides_replace_builtin_text() {
        let mut registry = RuleRegistry::builtin();
        registry.apply_override(RuleDefinition {
            id: rule_ids::BR03.to_string(),
            message: "custom text".to_string(),
            severity: Severity::Low,
        });
        let def = registry.definition(rule_ids::BR03);
        assert_eq!(def.message, "custom text");
        assert_eq!(def.severity, Severity::Low);
    }

    #[test]
    fn unknown_rule_falls_back_to_stub() {
        let registry = RuleRegistry::builtin();
        let def = registry.definition("BR99");
        assert_eq!(def.severity, Severity::High);
        assert!(def.message.contains("BR99"));
    }
}
