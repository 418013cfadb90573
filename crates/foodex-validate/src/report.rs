//! Result aggregation: severity roll-up, validity, facet summaries and the
//! interpreted description.

use foodex_catalogue::Catalogue;
use foodex_model::{
    BaseTermSummary, FacetExpression, FacetSummary, Severity, Term, ValidationResult, Warning,
    WarningCounts,
};

use crate::config::ValidatorConfig;

/// Combine all findings for one expression into the caller-facing result.
///
/// `expression` is the post-normalization expression (surviving explicit
/// facets); `cleaned_code` is set only when normalization stripped
/// something.
pub(crate) fn build_result(
    original: &str,
    expression: Option<&FacetExpression>,
    cleaned_code: Option<String>,
    base: Option<&Term>,
    warnings: Vec<Warning>,
    catalogue: &Catalogue,
    config: &ValidatorConfig,
) -> ValidationResult {
    let severity = warnings
        .iter()
        .map(|w| w.severity)
        .max()
        .unwrap_or(Severity::None);
    let valid = !warnings
        .iter()
        .any(|w| w.is_blocking(config.high_is_blocking));
    let warning_counts = WarningCounts::tally(&warnings);

    let base_term = base.map(|term| BaseTermSummary {
        code: term.code.to_string(),
        name: term.name().to_string(),
        term_type: term.term_type.to_string(),
        detail_level: term.detail_level.clone(),
    });

    let facets: Vec<FacetSummary> = expression
        .map(|expr| {
            expr.facets
                .iter()
                .map(|facet| FacetSummary {
                    group: facet.group.to_string(),
                    group_label: facet.group.label().to_string(),
                    descriptor: facet.descriptor.to_string(),
                    descriptor_name: catalogue
                        .term(&facet.descriptor)
                        .map(|t| t.name().to_string()),
                })
                .collect()
        })
        .unwrap_or_default();

    let interpreted_description = base.map(|term| interpret(term, &facets));

    ValidationResult {
        valid,
        original_code: original.to_string(),
        cleaned_code,
        base_term,
        facets,
        interpreted_description,
        warnings,
        severity,
        warning_counts,
    }
}

/// Base-term name followed by `, <group label> = <descriptor name>` for
/// each surviving explicit facet.
fn interpret(base: &Term, facets: &[FacetSummary]) -> String {
    let mut description = base.name().to_string();
    for facet in facets {
        let name = facet
            .descriptor_name
            .as_deref()
            .unwrap_or(facet.descriptor.as_str());
        description.push_str(&format!(", {} = {}", facet.group_label, name));
    }
    description
}
