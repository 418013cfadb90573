//! Implicit-facet normalization.
//!
//! Explicit facets that repeat a facet inherited by the base term carry no
//! information; they are stripped and the cleaned canonical form recorded.
//! Stripping never changes acceptance, it only adds a HIGH advisory, and
//! it is idempotent: a cleaned code normalizes to itself with no warning.

use foodex_model::{FacetExpression, FacetRef, RuleRegistry, Warning, rule_ids};

/// Outcome of stripping implicit facets from an expression.
#[derive(Debug, Clone)]
pub struct Normalized {
    /// The expression with redundant explicit facets removed.
    pub expression: FacetExpression,
    /// Canonical serialization of the cleaned expression; `None` when
    /// nothing was stripped.
    pub cleaned_code: Option<String>,
    pub warning: Option<Warning>,
}

pub fn strip_implicit(
    expression: &FacetExpression,
    implicit: &[FacetRef],
    rules: &RuleRegistry,
) -> Normalized {
    let (kept, removed): (Vec<FacetRef>, Vec<FacetRef>) = expression
        .facets
        .iter()
        .cloned()
        .partition(|facet| !implicit.contains(facet));

    if removed.is_empty() {
        return Normalized {
            expression: expression.clone(),
            cleaned_code: None,
            warning: None,
        };
    }

    let cleaned = FacetExpression::new(expression.base.clone(), kept);
    let cleaned_code = cleaned.canonical();
    let definition = rules.definition(rule_ids::IMPLICIT);
    let warning = Warning {
        rule: definition.id,
        message: format!("{}; cleaned code: {cleaned_code}", definition.message),
        severity: definition.severity,
        terms: removed.iter().map(|f| f.descriptor.to_string()).collect(),
    };

    Normalized {
        expression: cleaned,
        cleaned_code: Some(cleaned_code),
        warning: Some(warning),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodex_model::Severity;

    fn expr(s: &str) -> FacetExpression {
        s.parse().unwrap()
    }

    fn facets(s: &str) -> Vec<FacetRef> {
        foodex_model::parse_facet_list(s).unwrap()
    }

    #[test]
    fn removes_facets_already_implicit() {
        let rules = RuleRegistry::builtin();
        let normalized = strip_implicit(
            &expr("A0B9Z#F27.A000A$F28.A07JS"),
            &facets("F27.A000A"),
            &rules,
        );
        assert_eq!(
            normalized.cleaned_code.as_deref(),
            Some("A0B9Z#F28.A07JS")
        );
        let warning = normalized.warning.unwrap();
        assert_eq!(warning.rule, "VBA-IMPLICIT");
        assert_eq!(warning.severity, Severity::High);
        assert_eq!(warning.terms, vec!["A000A".to_string()]);
    }

    #[test]
    fn same_descriptor_under_other_group_survives() {
        let rules = RuleRegistry::builtin();
        let normalized = strip_implicit(
            &expr("A0B9Z#F01.A000A"),
            &facets("F27.A000A"),
            &rules,
        );
        assert!(normalized.cleaned_code.is_none());
        assert_eq!(normalized.expression.facets.len(), 1);
    }

    #[test]
    fn stripping_is_idempotent() {
        let rules = RuleRegistry::builtin();
        let implicit = facets("F27.A000A");
        let first = strip_implicit(&expr("A0B9Z#F27.A000A$F28.A07JS"), &implicit, &rules);
        assert!(first.warning.is_some());

        let second = strip_implicit(&first.expression, &implicit, &rules);
        assert!(second.warning.is_none());
        assert!(second.cleaned_code.is_none());
        assert_eq!(second.expression, first.expression);
    }
}
