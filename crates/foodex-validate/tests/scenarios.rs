//! End-to-end validation scenarios against the fixture catalogue.

use std::path::PathBuf;
use std::sync::Arc;

use foodex_catalogue::Catalogue;
use foodex_model::{Severity, ValidationResult};
use foodex_validate::{Validator, ValidatorConfig};

fn validator() -> Validator {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let catalogue = Arc::new(Catalogue::load(&dir).expect("fixture catalogue"));
    Validator::new(catalogue)
}

fn rules_of(result: &ValidationResult) -> Vec<&str> {
    result.warnings.iter().map(|w| w.rule.as_str()).collect()
}

fn assert_rule(result: &ValidationResult, rule: &str) {
    assert!(
        rules_of(result).contains(&rule),
        "expected {rule} in {:?}",
        rules_of(result)
    );
}

fn assert_no_rule(result: &ValidationResult, rule: &str) {
    assert!(
        !rules_of(result).contains(&rule),
        "unexpected {rule} in {:?}",
        rules_of(result)
    );
}

#[test]
fn hierarchy_base_in_expo_is_flagged_low() {
    let result = validator().validate("A0BX1#F28.A07KQ").unwrap();
    assert_rule(&result, "BR23");
    assert_no_rule(&result, "BR24");
    assert!(result.valid, "LOW findings do not block");
    assert_eq!(result.severity, Severity::Low);
}

#[test]
fn hierarchy_base_outside_expo_blocks() {
    let result = validator().validate("A0BX2").unwrap();
    assert_rule(&result, "BR24");
    assert!(!result.valid);
    assert!(result.severity >= Severity::High);
}

#[test]
fn source_facet_on_composite_blocks() {
    let result = validator().validate("A000J#F01.A0F6E").unwrap();
    assert_rule(&result, "BR03");
    assert!(!result.valid);
    let br03 = result.warnings.iter().find(|w| w.rule == "BR03").unwrap();
    assert_eq!(br03.severity, Severity::High);
    assert!(br03.message.contains("composite"));
}

#[test]
fn source_commodity_facet_on_composite_blocks() {
    let result = validator().validate("A000J#F27.A0B9X").unwrap();
    assert_rule(&result, "BR04");
    assert!(!result.valid);
}

#[test]
fn forbidden_process_blocks() {
    let result = validator().validate("A000L#F28.A07LG").unwrap();
    assert_rule(&result, "BR19");
    assert!(!result.valid);
    let br19 = result.warnings.iter().find(|w| w.rule == "BR19").unwrap();
    assert_eq!(br19.terms, vec!["A07LG".to_string()]);
}

#[test]
fn derivative_creating_state_blocks() {
    let result = validator().validate("A0EZJ#F03.A0BZS").unwrap();
    assert_rule(&result, "BR13");
    assert!(!result.valid);
}

#[test]
fn repeated_single_cardinality_group_blocks_despite_unknown_descriptors() {
    let result = validator().validate("A0B9Z#F03.XXXXX$F03.YYYYY").unwrap();
    assert_rule(&result, "VBA-CARDINALITY");
    assert_rule(&result, "VBA-FACET404");
    assert!(!result.valid);
}

#[test]
fn shared_integer_ordinal_is_mutual_exclusion() {
    let result = validator().validate("A01DJ#F28.A07KQ$F28.A07KX").unwrap();
    assert_rule(&result, "BR26");
    assert_no_rule(&result, "BR27");
    assert!(!result.valid);
}

#[test]
fn shared_fractional_ordinals_are_distinct_derivatives() {
    let result = validator().validate("A01DJ#F28.A07KV$F28.A07KW").unwrap();
    assert_rule(&result, "BR27");
    assert_no_rule(&result, "BR26");
    assert!(!result.valid);
}

#[test]
fn lone_exclusive_process_is_fine() {
    let result = validator().validate("A01DJ#F28.A07KQ").unwrap();
    assert_no_rule(&result, "BR26");
    assert_no_rule(&result, "BR27");
    assert!(result.valid);
}

// ---------------------------------------------------------------------------
// Remaining business rules
// ---------------------------------------------------------------------------

#[test]
fn source_commodity_outside_scope_of_raw_base() {
    let result = validator().validate("A0B9Z#F27.A0FXE").unwrap();
    assert_rule(&result, "BR01");
    assert!(!result.valid);
}

#[test]
fn source_commodity_narrowing_implicit_is_accepted() {
    let result = validator().validate("A0B9Z#F27.A0B9X").unwrap();
    assert_no_rule(&result, "BR01");
    assert!(result.valid);
}

#[test]
fn source_commodity_below_base_is_accepted() {
    let result = validator().validate("A0B9Z#F27.A0B9Y").unwrap();
    assert_no_rule(&result, "BR01");
    assert!(result.valid);
}

#[test]
fn derivative_source_commodity_must_narrow_implicit() {
    let result = validator().validate("A0DER#F27.A0FXE").unwrap();
    assert_rule(&result, "BR05");
    assert!(!result.valid);

    let result = validator().validate("A0DER#F27.A0B9X").unwrap();
    assert_no_rule(&result, "BR05");
}

#[test]
fn source_on_derivative_without_source_commodity() {
    let result = validator().validate("A0DRX#F01.A0SRC").unwrap();
    assert_rule(&result, "BR06");
    assert_no_rule(&result, "BR07");
    assert!(!result.valid);
}

#[test]
fn source_on_derivative_with_two_source_commodities() {
    let result = validator().validate("A0DER#F01.A0SRC$F27.A0B9X").unwrap();
    assert_rule(&result, "BR07");
    assert_no_rule(&result, "BR06");
    assert!(!result.valid);
}

#[test]
fn unreportable_base_blocks() {
    let result = validator().validate("A0NRP").unwrap();
    assert_rule(&result, "BR08");
    assert!(!result.valid);
}

#[test]
fn non_specific_base_is_advisory() {
    let result = validator().validate("A0NSP").unwrap();
    assert_rule(&result, "BR10");
    assert!(result.valid);
    assert_eq!(result.severity, Severity::Low);
}

#[test]
fn generic_processed_facet_is_advisory() {
    let result = validator().validate("A000L#F28.A07XS").unwrap();
    assert_rule(&result, "BR11");
    assert!(result.valid);

    // Descendants of the generic term are equally uninformative.
    let result = validator().validate("A000L#F28.A07KG").unwrap();
    assert_rule(&result, "BR11");
}

#[test]
fn ingredient_facet_on_raw_is_advisory() {
    let result = validator().validate("A0B9Z#F04.A0ING").unwrap();
    assert_rule(&result, "BR12");
    assert!(result.valid);
}

#[test]
fn explicit_facet_broader_than_implicit_blocks() {
    // A0MLK inherits F28.A07KG; A07XS is its parent in the process
    // hierarchy, so the explicit facet is strictly less informative.
    let result = validator().validate("A0MLK#F28.A07XS").unwrap();
    assert_rule(&result, "BR16");
    assert!(!result.valid);
}

#[test]
fn facet_term_as_base_blocks() {
    let result = validator().validate("A0FAC").unwrap();
    assert_rule(&result, "BR17");
    assert!(!result.valid);
}

#[test]
fn deprecated_base_and_descriptor_both_surface() {
    let result = validator().validate("A0DEP").unwrap();
    assert_rule(&result, "BR20");
    let br20 = result.warnings.iter().find(|w| w.rule == "BR20").unwrap();
    assert_eq!(br20.terms, vec!["A0DEP".to_string()]);

    let result = validator().validate("A000L#F28.A0DPD").unwrap();
    let br20 = result.warnings.iter().find(|w| w.rule == "BR20").unwrap();
    assert_eq!(br20.terms, vec!["A0DPD".to_string()]);
}

#[test]
fn dismissed_base_blocks_without_reportability_noise() {
    let result = validator().validate("A0OLD").unwrap();
    assert_rule(&result, "BR21");
    assert_no_rule(&result, "BR08");
    assert!(!result.valid);
}

#[test]
fn clean_expression_gets_success_marker() {
    let result = validator().validate("A0B9Z").unwrap();
    assert_rule(&result, "BR22");
    assert!(result.valid);
    assert_eq!(result.severity, Severity::None);
    assert_eq!(result.warning_counts.info, 1);
}

#[test]
fn hierarchy_base_never_gets_success_marker() {
    let result = validator().validate("A0BX1#F28.A07KQ").unwrap();
    assert_no_rule(&result, "BR22");
}

#[test]
fn reconstitution_on_dehydrated_base_blocks() {
    let result = validator().validate("A0MLK#F28.A07MR").unwrap();
    assert_rule(&result, "BR28");
    assert!(!result.valid);
}

// ---------------------------------------------------------------------------
// Normalization and structural findings
// ---------------------------------------------------------------------------

#[test]
fn implicit_facet_is_stripped_with_cleaned_code() {
    let result = validator().validate("A0B9Z#F27.A000F").unwrap();
    assert_rule(&result, "VBA-IMPLICIT");
    assert_eq!(result.cleaned_code.as_deref(), Some("A0B9Z"));
    assert!(!result.valid, "HIGH blocks by default");
}

#[test]
fn high_can_be_downgraded_to_non_blocking() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let catalogue = Arc::new(Catalogue::load(&dir).expect("fixture catalogue"));
    let validator =
        Validator::with_config(catalogue, ValidatorConfig::default().high_is_blocking(false));

    let result = validator.validate("A0B9Z#F27.A000F").unwrap();
    assert!(result.valid);
    assert_eq!(result.severity, Severity::High);
}

#[test]
fn unknown_base_is_structural_error() {
    let result = validator().validate("ZZZZZ").unwrap();
    assert_rule(&result, "VBA-NOTFOUND");
    assert_eq!(result.severity, Severity::Error);
    assert!(!result.valid);
    assert!(result.base_term.is_none());
}

#[test]
fn descriptor_outside_group_hierarchy_is_structural_error() {
    // A0ING exists but lives in 'ingred', not 'source'.
    let result = validator().validate("A0B9Z#F01.A0ING").unwrap();
    assert_rule(&result, "VBA-CATEGORY");
    assert!(!result.valid);
}

#[test]
fn duplicate_facet_is_reported_once() {
    let result = validator().validate("A0B9Z#F28.A07LG$F28.A07LG").unwrap();
    let duplicates = result
        .warnings
        .iter()
        .filter(|w| w.rule == "VBA-DUPLICATE")
        .count();
    assert_eq!(duplicates, 1);
    assert!(!result.valid);
}

#[test]
fn structural_error_skips_business_rules_by_default() {
    // A0FAC would trigger BR17, but the unknown descriptor stops the
    // pipeline at the structural stage.
    let result = validator().validate("A0FAC#F28.QQQQQ").unwrap();
    assert_rule(&result, "VBA-FACET404");
    assert_no_rule(&result, "BR17");
}

#[test]
fn interpreted_description_names_surviving_facets() {
    let result = validator().validate("A0B9Z#F28.A07LG").unwrap();
    assert_eq!(
        result.interpreted_description.as_deref(),
        Some("Wheat grain, Process = Canning")
    );
    assert_eq!(result.facets.len(), 1);
    assert_eq!(result.facets[0].descriptor_name.as_deref(), Some("Canning"));
}
