//! Term-status and layout rules: typology restrictions, deprecation,
//! dismissal and the BR25 cardinality re-report.

use std::collections::BTreeMap;

use foodex_catalogue::CatalogueError;
use foodex_model::{FacetGroup, TermType, Warning, rule_ids};

use super::RuleInput;

/// BR10: non-specific base terms are discouraged.
pub(super) fn br10(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    if input.base.term_type == TermType::NonSpecific {
        return Ok(vec![
            input.warning(rule_ids::BR10, vec![input.base.code.to_string()]),
        ]);
    }
    Ok(Vec::new())
}

/// BR12: on raw and derivative terms the ingredient facet only describes
/// minor ingredients.
pub(super) fn br12(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    let applies = matches!(
        input.base.term_type,
        TermType::Raw | TermType::Derivative
    );
    if !applies {
        return Ok(Vec::new());
    }
    let offenders: Vec<String> = input
        .explicit_in(FacetGroup::F04)
        .map(|f| f.descriptor.to_string())
        .collect();
    if offenders.is_empty() {
        Ok(Vec::new())
    } else {
        Ok(vec![input.warning(rule_ids::BR12, offenders)])
    }
}

/// BR17: facet descriptors cannot serve as base terms.
pub(super) fn br17(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    if input.base.term_type == TermType::Facet {
        return Ok(vec![
            input.warning(rule_ids::BR17, vec![input.base.code.to_string()]),
        ]);
    }
    Ok(Vec::new())
}

/// BR20: neither the base term nor any descriptor may be deprecated. One
/// warning per offending term so the caller can see which one triggered.
pub(super) fn br20(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    let mut warnings = Vec::new();
    if input.base.deprecated {
        warnings.push(input.warning(rule_ids::BR20, vec![input.base.code.to_string()]));
    }
    for facet in input.explicit {
        if let Some(term) = input.catalogue.term(&facet.descriptor)
            && term.deprecated
        {
            warnings.push(input.warning(rule_ids::BR20, vec![facet.descriptor.to_string()]));
        }
    }
    Ok(warnings)
}

/// BR21: neither the base term nor any descriptor may be dismissed.
pub(super) fn br21(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    let mut warnings = Vec::new();
    if input.base.is_dismissed() {
        warnings.push(input.warning(rule_ids::BR21, vec![input.base.code.to_string()]));
    }
    for facet in input.explicit {
        if let Some(term) = input.catalogue.term(&facet.descriptor)
            && term.is_dismissed()
        {
            warnings.push(input.warning(rule_ids::BR21, vec![facet.descriptor.to_string()]));
        }
    }
    Ok(warnings)
}

/// BR25: re-report single-cardinality violations under the business-rule
/// id, alongside the structural `VBA-CARDINALITY` finding.
pub(super) fn br25(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    let mut by_group: BTreeMap<FacetGroup, Vec<String>> = BTreeMap::new();
    for facet in input.explicit {
        if facet.group.single_cardinality() {
            by_group
                .entry(facet.group)
                .or_default()
                .push(facet.descriptor.to_string());
        }
    }
    Ok(by_group
        .into_values()
        .filter(|descriptors| descriptors.len() > 1)
        .map(|descriptors| input.warning(rule_ids::BR25, descriptors))
        .collect())
}
