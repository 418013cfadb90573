//! Expression tokenizer.
//!
//! Accepts `BASE[(#|$)GROUP.DESC]*`. Convention puts `#` before the first
//! facet and `$` before the rest, but catalogue data mixes the two, so both
//! are accepted in any position. Shape violations become ERROR-severity
//! warnings (`STRUCT_BASE`, `STRUCT_FACET`), never panics or `Err`.

use std::sync::LazyLock;

use regex::Regex;

use foodex_model::{
    FacetExpression, FacetGroup, FacetRef, RuleRegistry, TermCode, Warning, rule_ids,
};

/// Facet fragment shape: `Fnn.CCCCC`.
static FRAGMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^F\d{2}\.[A-Z0-9]{5}$").expect("invalid facet fragment regex")
});

/// Result of tokenizing one input string.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The parsed expression; `None` when the base prefix is malformed.
    pub expression: Option<FacetExpression>,
    /// Structural findings collected along the way.
    pub warnings: Vec<Warning>,
}

fn struct_warning(rules: &RuleRegistry, id: &str, offending: &str) -> Warning {
    let definition = rules.definition(id);
    Warning {
        rule: definition.id,
        message: format!("{}: '{offending}'", definition.message),
        severity: definition.severity,
        terms: Vec::new(),
    }
}

/// Tokenize an expression string.
///
/// Malformed fragments are skipped with a `STRUCT_FACET` warning each; a
/// malformed base yields `STRUCT_BASE` and no expression. Facet groups
/// outside the assigned set (F05, F13-F16, ...) have no paired hierarchy
/// and are likewise `STRUCT_FACET`.
pub fn parse_expression(input: &str, rules: &RuleRegistry) -> ParseOutcome {
    let input = input.trim();
    let mut warnings = Vec::new();

    let (base_raw, facets_raw) = match input.find(['#', '$']) {
        Some(pos) => (&input[..pos], &input[pos + 1..]),
        None => (input, ""),
    };

    if !TermCode::is_valid(base_raw) {
        warnings.push(struct_warning(rules, rule_ids::STRUCT_BASE, base_raw));
        return ParseOutcome {
            expression: None,
            warnings,
        };
    }
    let base = TermCode::new(base_raw).expect("shape checked above");

    let mut facets = Vec::new();
    for fragment in facets_raw.split(['#', '$']) {
        if fragment.is_empty() {
            continue;
        }
        if !FRAGMENT_REGEX.is_match(fragment) {
            warnings.push(struct_warning(rules, rule_ids::STRUCT_FACET, fragment));
            continue;
        }
        let (group_raw, descriptor_raw) = fragment.split_once('.').expect("regex requires dot");
        let Ok(group) = group_raw.parse::<FacetGroup>() else {
            // Reserved group id: syntactically shaped but unassigned.
            warnings.push(struct_warning(rules, rule_ids::STRUCT_FACET, fragment));
            continue;
        };
        let descriptor = TermCode::new(descriptor_raw).expect("regex requires code shape");
        facets.push(FacetRef::new(group, descriptor));
    }

    ParseOutcome {
        expression: Some(FacetExpression::new(base, facets)),
        warnings,
    }
}
