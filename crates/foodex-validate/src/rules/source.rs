//! Source (F01) and source-commodities (F27) rules.
//!
//! Raw commodities may only narrow their source commodities (BR01);
//! composites carry their composition in the term itself, so explicit
//! source facets are redundant there (BR03, BR04); derivatives must keep
//! explicit source commodities inside the scope of their implicit ones
//! (BR05) and may only carry an F01 source when exactly one source
//! commodity is in play (BR06, BR07).

use foodex_catalogue::CatalogueError;
use foodex_catalogue::hierarchy::RACSOURCE;
use foodex_model::{FacetGroup, TermType, Warning, rule_ids};

use super::RuleInput;

/// BR01: an explicit F27 on a raw commodity must descend from an implicit
/// F27 or from the base term itself in the source-commodities hierarchy.
pub(super) fn br01(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    if input.base.term_type != TermType::Raw || !input.has_explicit(FacetGroup::F27) {
        return Ok(Vec::new());
    }

    let mut warnings = Vec::new();
    for facet in input.explicit_in(FacetGroup::F27) {
        let narrows_implicit = input.resolver.is_descendant_of_any(
            &facet.descriptor,
            input.implicit_in(FacetGroup::F27).map(|f| &f.descriptor),
            RACSOURCE,
        )?;
        let narrows_base =
            input
                .resolver
                .is_ancestor(&input.base.code, &facet.descriptor, RACSOURCE)?;
        if !narrows_implicit && !narrows_base {
            warnings.push(input.warning(rule_ids::BR01, vec![facet.descriptor.to_string()]));
        }
    }
    Ok(warnings)
}

/// BR03: no explicit F01 source on composite foods.
pub(super) fn br03(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    Ok(composite_group_violation(input, FacetGroup::F01, rule_ids::BR03))
}

/// BR04: no explicit F27 source commodities on composite foods.
pub(super) fn br04(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    Ok(composite_group_violation(input, FacetGroup::F27, rule_ids::BR04))
}

fn composite_group_violation(
    input: &RuleInput<'_>,
    group: FacetGroup,
    rule: &str,
) -> Vec<Warning> {
    if !input.base.term_type.is_composite() {
        return Vec::new();
    }
    let offenders: Vec<String> = input
        .explicit_in(group)
        .map(|f| f.descriptor.to_string())
        .collect();
    if offenders.is_empty() {
        Vec::new()
    } else {
        vec![input.warning(rule, offenders)]
    }
}

/// BR05: an explicit F27 on a derivative must descend from one of the
/// derivative's implicit source commodities.
pub(super) fn br05(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    if input.base.term_type != TermType::Derivative {
        return Ok(Vec::new());
    }
    if input.implicit_in(FacetGroup::F27).next().is_none() {
        return Ok(Vec::new());
    }

    let mut warnings = Vec::new();
    for facet in input.explicit_in(FacetGroup::F27) {
        let narrows_implicit = input.resolver.is_descendant_of_any(
            &facet.descriptor,
            input.implicit_in(FacetGroup::F27).map(|f| &f.descriptor),
            RACSOURCE,
        )?;
        if !narrows_implicit {
            warnings.push(input.warning(rule_ids::BR05, vec![facet.descriptor.to_string()]));
        }
    }
    Ok(warnings)
}

/// BR06: F01 on a derivative requires at least one F27 (implicit or
/// explicit) to qualify.
pub(super) fn br06(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    if input.base.term_type != TermType::Derivative || !input.has_explicit(FacetGroup::F01) {
        return Ok(Vec::new());
    }
    if combined_f27_count(input) == 0 {
        return Ok(vec![input.warning(rule_ids::BR06, Vec::new())]);
    }
    Ok(Vec::new())
}

/// BR07: F01 on a derivative is ambiguous when several F27 source
/// commodities are in play.
pub(super) fn br07(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    if input.base.term_type != TermType::Derivative || !input.has_explicit(FacetGroup::F01) {
        return Ok(Vec::new());
    }
    if combined_f27_count(input) > 1 {
        let terms = input
            .implicit_in(FacetGroup::F27)
            .chain(input.explicit_in(FacetGroup::F27))
            .map(|f| f.descriptor.to_string())
            .collect();
        return Ok(vec![input.warning(rule_ids::BR07, terms)]);
    }
    Ok(Vec::new())
}

fn combined_f27_count(input: &RuleInput<'_>) -> usize {
    input.implicit_in(FacetGroup::F27).count() + input.explicit_in(FacetGroup::F27).count()
}
