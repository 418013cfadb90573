//! The business-rule table.
//!
//! Each rule is a value carrying its id and an optional check; evaluation
//! iterates the table in id order. Empty slots (BR02, BR09, BR18) and the
//! context-reserved placeholders (BR14, BR15) have no check and never
//! emit. BR29-BR31 are covered by the tokenizer and structural validator.
//! BR22, whose precondition quantifies over the accumulated warning set,
//! is emitted separately by the validator once all other findings are in.

mod hierarchy;
mod process;
mod source;
mod status;

use foodex_catalogue::{Catalogue, CatalogueError, HierarchyResolver};
use foodex_model::{FacetGroup, FacetRef, Severity, Term, TermType, Warning, rule_ids};

use crate::config::ValidatorConfig;

/// Everything a rule may consult: the base term, the explicit facets that
/// survived normalization, the base's implicit facets, and the read-only
/// catalogue services.
pub struct RuleInput<'a> {
    pub base: &'a Term,
    pub explicit: &'a [FacetRef],
    pub implicit: &'a [FacetRef],
    pub catalogue: &'a Catalogue,
    pub resolver: &'a HierarchyResolver,
    pub config: &'a ValidatorConfig,
}

impl RuleInput<'_> {
    /// Build a warning from the registry definition, listing the
    /// triggering term codes in both the message and the `terms` field.
    pub(crate) fn warning(&self, id: &str, terms: Vec<String>) -> Warning {
        let definition = self.catalogue.rule(id);
        let message = if terms.is_empty() {
            definition.message
        } else {
            format!("{} [{}]", definition.message, terms.join(", "))
        };
        Warning {
            rule: definition.id,
            message,
            severity: definition.severity,
            terms,
        }
    }

    pub(crate) fn explicit_in(&self, group: FacetGroup) -> impl Iterator<Item = &FacetRef> {
        self.explicit.iter().filter(move |f| f.group == group)
    }

    pub(crate) fn implicit_in(&self, group: FacetGroup) -> impl Iterator<Item = &FacetRef> {
        self.implicit.iter().filter(move |f| f.group == group)
    }

    pub(crate) fn has_explicit(&self, group: FacetGroup) -> bool {
        self.explicit.iter().any(|f| f.group == group)
    }
}

/// Signature shared by every rule check.
pub type RuleCheck = fn(&RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError>;

/// One row of the rule table.
pub struct BusinessRule {
    pub id: &'static str,
    /// `None` marks an inert slot: reserved numbering or a rule whose
    /// check lives elsewhere.
    pub check: Option<RuleCheck>,
}

static RULES: [BusinessRule; 31] = [
    BusinessRule { id: rule_ids::BR01, check: Some(source::br01) },
    BusinessRule { id: rule_ids::BR02, check: None },
    BusinessRule { id: rule_ids::BR03, check: Some(source::br03) },
    BusinessRule { id: rule_ids::BR04, check: Some(source::br04) },
    BusinessRule { id: rule_ids::BR05, check: Some(source::br05) },
    BusinessRule { id: rule_ids::BR06, check: Some(source::br06) },
    BusinessRule { id: rule_ids::BR07, check: Some(source::br07) },
    BusinessRule { id: rule_ids::BR08, check: Some(hierarchy::br08) },
    BusinessRule { id: rule_ids::BR09, check: None },
    BusinessRule { id: rule_ids::BR10, check: Some(status::br10) },
    BusinessRule { id: rule_ids::BR11, check: Some(process::br11) },
    BusinessRule { id: rule_ids::BR12, check: Some(status::br12) },
    BusinessRule { id: rule_ids::BR13, check: Some(process::br13) },
    BusinessRule { id: rule_ids::BR14, check: None },
    BusinessRule { id: rule_ids::BR15, check: None },
    BusinessRule { id: rule_ids::BR16, check: Some(hierarchy::br16) },
    BusinessRule { id: rule_ids::BR17, check: Some(status::br17) },
    BusinessRule { id: rule_ids::BR18, check: None },
    BusinessRule { id: rule_ids::BR19, check: Some(process::br19) },
    BusinessRule { id: rule_ids::BR20, check: Some(status::br20) },
    BusinessRule { id: rule_ids::BR21, check: Some(status::br21) },
    BusinessRule { id: rule_ids::BR22, check: None },
    BusinessRule { id: rule_ids::BR23, check: Some(hierarchy::br23) },
    BusinessRule { id: rule_ids::BR24, check: Some(hierarchy::br24) },
    BusinessRule { id: rule_ids::BR25, check: Some(status::br25) },
    BusinessRule { id: rule_ids::BR26, check: Some(process::br26) },
    BusinessRule { id: rule_ids::BR27, check: Some(process::br27) },
    BusinessRule { id: rule_ids::BR28, check: Some(process::br28) },
    BusinessRule { id: rule_ids::BR29, check: None },
    BusinessRule { id: rule_ids::BR30, check: None },
    BusinessRule { id: rule_ids::BR31, check: None },
];

/// The rule table, in id order.
pub fn business_rules() -> &'static [BusinessRule] {
    &RULES
}

/// Evaluate every active rule against one expression. Warnings accumulate;
/// evaluation never short-circuits on a non-ERROR finding.
pub fn evaluate(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    let mut warnings = Vec::new();
    for rule in business_rules() {
        if let Some(check) = rule.check {
            warnings.extend(check(input)?);
        }
    }
    Ok(warnings)
}

/// BR22: emit the success marker when nothing blocking accumulated and the
/// base term is not a hierarchy-level term.
pub fn success_marker(input: &RuleInput<'_>, accumulated: &[Warning]) -> Option<Warning> {
    let blocked = accumulated.iter().any(|w| w.severity >= Severity::High);
    let hierarchy_base =
        input.base.term_type == TermType::Hierarchy || input.base.is_hierarchy_detail();
    if blocked || hierarchy_base {
        return None;
    }
    Some(input.warning(rule_ids::BR22, Vec::new()))
}
