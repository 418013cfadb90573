//! Hierarchy-position rules: reportability, facet specificity and
//! hierarchy-level base terms.

use foodex_catalogue::CatalogueError;
use foodex_catalogue::hierarchy::{EXPO, REPORT};
use foodex_model::{Warning, rule_ids};

use super::RuleInput;

/// BR08: a non-dismissed base term must be a member of the reporting
/// hierarchy. Dismissed terms are BR21's business.
pub(super) fn br08(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    if input.base.is_dismissed() {
        return Ok(Vec::new());
    }
    if !input.catalogue.is_member(&input.base.code, REPORT) {
        return Ok(vec![
            input.warning(rule_ids::BR08, vec![input.base.code.to_string()]),
        ]);
    }
    Ok(Vec::new())
}

/// BR16: an explicit facet must not be an ancestor of an implicit facet of
/// the same group - the implicit one is already more specific.
pub(super) fn br16(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    let mut warnings = Vec::new();
    for explicit in input.explicit {
        for implicit in input.implicit.iter().filter(|f| f.group == explicit.group) {
            let hierarchy = explicit.group.hierarchy();
            let broader = input.resolver.is_ancestor(
                &explicit.descriptor,
                &implicit.descriptor,
                hierarchy,
            )?;
            let siblings =
                input
                    .resolver
                    .are_siblings(&explicit.descriptor, &implicit.descriptor, hierarchy);
            if broader && !siblings {
                warnings.push(input.warning(
                    rule_ids::BR16,
                    vec![
                        explicit.descriptor.to_string(),
                        implicit.descriptor.to_string(),
                    ],
                ));
            }
        }
    }
    Ok(warnings)
}

/// BR23: a hierarchy-level base term inside the exposure hierarchy is
/// acceptable but flagged.
pub(super) fn br23(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    if input.base.is_hierarchy_detail() && input.catalogue.is_member(&input.base.code, EXPO) {
        return Ok(vec![
            input.warning(rule_ids::BR23, vec![input.base.code.to_string()]),
        ]);
    }
    Ok(Vec::new())
}

/// BR24: a hierarchy-level base term outside the exposure hierarchy is
/// blocking.
pub(super) fn br24(input: &RuleInput<'_>) -> Result<Vec<Warning>, CatalogueError> {
    if input.base.is_hierarchy_detail() && !input.catalogue.is_member(&input.base.code, EXPO) {
        return Ok(vec![
            input.warning(rule_ids::BR24, vec![input.base.code.to_string()]),
        ]);
    }
    Ok(Vec::new())
}
