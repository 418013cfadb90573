//! Process (F28) rules: the generic "Processed" marker, derivative-creating
//! physical states, forbidden processes, ordinal-code conflicts and
//! reconstitution on dehydrated foods.

use std::collections::BTreeMap;

use foodex_catalogue::CatalogueError;
use foodex_catalogue::hierarchy::PROCESS;
use foodex_model::{FacetGroup, FacetRef, TermCode, TermType, Warning, rule_ids};

use crate::config::{DEHYDRATION_NAME_HINTS, RECONSTITUTION_NAME_HINTS};

use super::RuleInput;

/// The generic "Processed" term; descendants of it carry no information
/// beyond "some processing happened".
const PROCESSED_TERM: &str = "A07XS";

/// BR11: an explicit F28 equal to or descending from the generic
/// "Processed" term adds no information.
pub(super) fn br11(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    let processed = TermCode::new(PROCESSED_TERM).expect("constant is well-formed");
    let mut warnings = Vec::new();
    for facet in input.explicit_in(FacetGroup::F28) {
        let generic = facet.descriptor == processed
            || input
                .resolver
                .is_ancestor(&processed, &facet.descriptor, PROCESS)?;
        if generic {
            warnings.push(input.warning(rule_ids::BR11, vec![facet.descriptor.to_string()]));
        }
    }
    Ok(warnings)
}

/// BR13: a physical state (F03) that creates a derivative may not be
/// facet-applied to a raw commodity.
pub(super) fn br13(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    if input.base.term_type != TermType::Raw {
        return Ok(Vec::new());
    }
    let warnings = input
        .explicit_in(FacetGroup::F03)
        .filter(|facet| input.config.derivative_states.contains(&facet.descriptor))
        .map(|facet| input.warning(rule_ids::BR13, vec![facet.descriptor.to_string()]))
        .collect();
    Ok(warnings)
}

/// BR19: an explicit process on a raw commodity must not be forbidden for
/// the base term or any of its reporting-hierarchy ancestors.
pub(super) fn br19(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    if input.base.term_type != TermType::Raw || !input.has_explicit(FacetGroup::F28) {
        return Ok(Vec::new());
    }
    let forbidden = input
        .catalogue
        .forbidden_processes_for(&input.base.code, input.resolver)?;

    let warnings = input
        .explicit_in(FacetGroup::F28)
        .filter(|facet| forbidden.contains(&facet.descriptor))
        .map(|facet| input.warning(rule_ids::BR19, vec![facet.descriptor.to_string()]))
        .collect();
    Ok(warnings)
}

/// BR26: two or more F28 processes share an integer ordinal - mutually
/// exclusive alternatives applied together.
pub(super) fn br26(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    Ok(ordinal_conflicts(input)
        .into_iter()
        .filter(|group| !group.all_fractional)
        .map(|group| input.warning(rule_ids::BR26, group.terms))
        .collect())
}

/// BR27: two or more F28 processes share the integer part of fractional
/// ordinals - each would create a distinct derivative.
pub(super) fn br27(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    Ok(ordinal_conflicts(input)
        .into_iter()
        .filter(|group| group.all_fractional)
        .map(|group| input.warning(rule_ids::BR27, group.terms))
        .collect())
}

struct OrdinalConflict {
    terms: Vec<String>,
    all_fractional: bool,
}

/// Group the derivative's F28 facets (implicit and explicit) by the
/// integer part of their ordinal codes. Ordinal 0 is non-exclusive and
/// ignored; a group only conflicts when it has two or more members and at
/// least one of them is explicit.
fn ordinal_conflicts(input: &RuleInput<'_>) -> Vec<OrdinalConflict> {
    if input.base.term_type != TermType::Derivative {
        return Vec::new();
    }

    let facets: Vec<(&FacetRef, bool)> = input
        .implicit_in(FacetGroup::F28)
        .map(|f| (f, false))
        .chain(input.explicit_in(FacetGroup::F28).map(|f| (f, true)))
        .collect();

    let mut by_integer: BTreeMap<u32, Vec<(&FacetRef, bool, bool)>> = BTreeMap::new();
    for (facet, explicit) in facets {
        let ordinal = input.catalogue.process_ordinal(&facet.descriptor);
        if ordinal.is_non_exclusive() {
            continue;
        }
        by_integer.entry(ordinal.integer_part()).or_default().push((
            facet,
            explicit,
            ordinal.is_fractional(),
        ));
    }

    by_integer
        .into_values()
        .filter(|members| members.len() >= 2 && members.iter().any(|(_, explicit, _)| *explicit))
        .map(|members| OrdinalConflict {
            all_fractional: members.iter().all(|(_, _, fractional)| *fractional),
            terms: members
                .into_iter()
                .map(|(facet, _, _)| facet.descriptor.to_string())
                .collect(),
        })
        .collect()
}

/// BR28: reconstitution or dilution may not be applied to a base term that
/// is already dehydrated or concentrated.
pub(super) fn br28(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    if !base_is_dehydrated(input) {
        return Ok(Vec::new());
    }
    let warnings = input
        .explicit_in(FacetGroup::F28)
        .filter(|facet| is_reconstitution(input, facet))
        .map(|facet| input.warning(rule_ids::BR28, vec![facet.descriptor.to_string()]))
        .collect();
    Ok(warnings)
}

/// Prefer the implicit-facet evidence; the name match is a fallback for
/// terms whose catalogue release predates the dehydration process codes.
fn base_is_dehydrated(input: &RuleInput<'_>) -> bool {
    let by_facet = input
        .implicit_in(FacetGroup::F28)
        .any(|f| input.config.dehydration_processes.contains(&f.descriptor));
    if by_facet {
        return true;
    }
    let name = input.base.extended_name.to_lowercase();
    DEHYDRATION_NAME_HINTS.iter().any(|hint| name.contains(hint))
}

fn is_reconstitution(input: &RuleInput<'_>, facet: &FacetRef) -> bool {
    if input
        .config
        .reconstitution_processes
        .contains(&facet.descriptor)
    {
        return true;
    }
    input
        .catalogue
        .term(&facet.descriptor)
        .is_some_and(|term| {
            let name = term.extended_name.to_lowercase();
            RECONSTITUTION_NAME_HINTS.iter().any(|hint| name.contains(hint))
        })
}
