//! Structural validation of a parsed expression.
//!
//! Runs after the tokenizer and before the business rules: every code must
//! resolve against the catalogue, every descriptor must belong to its
//! group's hierarchy, single-cardinality groups may appear once, and no
//! facet may repeat.

use std::collections::{BTreeMap, BTreeSet};

use foodex_catalogue::Catalogue;
use foodex_model::{FacetExpression, FacetGroup, Warning, rule_ids};

/// Run all structural checks against a parsed expression.
pub fn check_structure(expression: &FacetExpression, catalogue: &Catalogue) -> Vec<Warning> {
    let mut warnings = Vec::new();

    warnings.extend(check_base_exists(expression, catalogue));
    warnings.extend(check_descriptors(expression, catalogue));
    warnings.extend(check_cardinality(expression, catalogue));
    warnings.extend(check_duplicates(expression, catalogue));

    warnings
}

fn warning(catalogue: &Catalogue, id: &str, detail: String, terms: Vec<String>) -> Warning {
    let definition = catalogue.rule(id);
    Warning {
        rule: definition.id,
        message: format!("{}: {detail}", definition.message),
        severity: definition.severity,
        terms,
    }
}

fn check_base_exists(expression: &FacetExpression, catalogue: &Catalogue) -> Vec<Warning> {
    if catalogue.term(&expression.base).is_some() {
        return Vec::new();
    }
    vec![warning(
        catalogue,
        rule_ids::NOT_FOUND,
        expression.base.to_string(),
        vec![expression.base.to_string()],
    )]
}

/// Every explicit descriptor must resolve, and resolve inside the
/// hierarchy paired with its facet group.
fn check_descriptors(expression: &FacetExpression, catalogue: &Catalogue) -> Vec<Warning> {
    let mut warnings = Vec::new();
    for facet in &expression.facets {
        if catalogue.term(&facet.descriptor).is_none() {
            warnings.push(warning(
                catalogue,
                rule_ids::FACET_NOT_FOUND,
                facet.to_string(),
                vec![facet.descriptor.to_string()],
            ));
            continue;
        }
        if !catalogue.is_member(&facet.descriptor, facet.group.hierarchy()) {
            warnings.push(warning(
                catalogue,
                rule_ids::CATEGORY,
                format!(
                    "{} is not in hierarchy '{}' required by {}",
                    facet.descriptor,
                    facet.group.hierarchy(),
                    facet.group
                ),
                vec![facet.descriptor.to_string()],
            ));
        }
    }
    warnings
}

fn check_cardinality(expression: &FacetExpression, catalogue: &Catalogue) -> Vec<Warning> {
    let mut by_group: BTreeMap<FacetGroup, Vec<String>> = BTreeMap::new();
    for facet in &expression.facets {
        if facet.group.single_cardinality() {
            by_group
                .entry(facet.group)
                .or_default()
                .push(facet.descriptor.to_string());
        }
    }

    by_group
        .into_iter()
        .filter(|(_, descriptors)| descriptors.len() > 1)
        .map(|(group, descriptors)| {
            warning(
                catalogue,
                rule_ids::CARDINALITY,
                format!("{group} appears {} times", descriptors.len()),
                descriptors,
            )
        })
        .collect()
}

fn check_duplicates(expression: &FacetExpression, catalogue: &Catalogue) -> Vec<Warning> {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    let mut warnings = Vec::new();
    for facet in &expression.facets {
        if !seen.insert(facet.clone()) && reported.insert(facet.clone()) {
            warnings.push(warning(
                catalogue,
                rule_ids::DUPLICATE,
                facet.to_string(),
                vec![facet.descriptor.to_string()],
            ));
        }
    }
    warnings
}
