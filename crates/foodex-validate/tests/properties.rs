//! Engine-wide invariants checked over the whole fixture catalogue.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use foodex_catalogue::Catalogue;
use foodex_model::{FacetExpression, Severity};
use foodex_validate::Validator;

fn catalogue() -> Arc<Catalogue> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    Arc::new(Catalogue::load(&dir).expect("fixture catalogue"))
}

fn validator() -> Validator {
    Validator::new(catalogue())
}

/// Facet multiset of implicit plus surviving explicit facets, as strings.
fn facet_set(catalogue: &Catalogue, expression: &FacetExpression) -> BTreeSet<String> {
    let mut set: BTreeSet<String> = expression.facets.iter().map(|f| f.to_string()).collect();
    for implicit in catalogue.implicit_facets(&expression.base) {
        set.insert(implicit.to_string());
    }
    set
}

#[test]
fn bare_base_never_yields_structural_error() {
    let catalogue = catalogue();
    let validator = Validator::new(Arc::clone(&catalogue));
    for code in catalogue.term_codes() {
        let result = validator.validate(code.as_str()).unwrap();
        assert!(
            result
                .warnings
                .iter()
                .all(|w| w.severity != Severity::Error),
            "structural error for bare base {code}: {:?}",
            result.warnings
        );
    }
}

#[test]
fn blocking_warnings_imply_invalid() {
    let validator = validator();
    for input in [
        "A000J#F01.A0F6E",
        "A000L#F28.A07LG",
        "A0B9Z#F03.XXXXX$F03.YYYYY",
        "A01DJ#F28.A07KQ$F28.A07KX",
        "A0BX2",
        "ZZZZZ",
        "A0B9Z",
        "A0NSP",
        "A0BX1#F28.A07KQ",
    ] {
        let result = validator.validate(input).unwrap();
        let has_blocking = result.warnings.iter().any(|w| w.severity >= Severity::High);
        assert_eq!(
            result.valid, !has_blocking,
            "validity mismatch for {input}: {:?}",
            result.warnings
        );
    }
}

#[test]
fn cleaning_preserves_the_combined_facet_set() {
    let validator = validator();
    let catalogue = catalogue();
    // A0B9Z carries implicit F27.A000F; spelling it out explicitly must not
    // change the combined facet set of the cleaned code.
    let original: FacetExpression = "A0B9Z#F27.A000F$F28.A07LG".parse().unwrap();
    let result = validator
        .validate("A0B9Z#F27.A000F$F28.A07LG")
        .unwrap();
    let cleaned: FacetExpression = result
        .cleaned_code
        .as_deref()
        .expect("implicit facet should be stripped")
        .parse()
        .unwrap();
    assert_eq!(
        facet_set(&catalogue, &original),
        facet_set(&catalogue, &cleaned)
    );
}

#[test]
fn cleaning_is_idempotent() {
    let validator = validator();
    let result = validator.validate("A0B9Z#F27.A000F$F28.A07LG").unwrap();
    let cleaned = result.cleaned_code.expect("cleaned code");

    let again = validator.validate(&cleaned).unwrap();
    assert!(
        again.warnings.iter().all(|w| w.rule != "VBA-IMPLICIT"),
        "re-normalizing a cleaned code must not strip again"
    );
    assert!(again.cleaned_code.is_none());
}

#[test]
fn cleaned_code_respects_single_cardinality() {
    let validator = validator();
    for input in ["A0B9Z#F27.A000F$F28.A07LG", "A0EZJ#F03.A0BZS", "A0B9Z"] {
        let result = validator.validate(input).unwrap();
        let code = result.cleaned_code.unwrap_or(result.original_code);
        let expression: FacetExpression = code.parse().unwrap();
        for facet in &expression.facets {
            if facet.group.single_cardinality() {
                assert_eq!(
                    expression.facets_in_group(facet.group).count(),
                    1,
                    "group {} repeated in {code}",
                    facet.group
                );
            }
        }
    }
}

#[test]
fn duplicate_detection_is_symmetric_under_permutation() {
    let validator = validator();
    let forward = validator
        .validate("A0B9Z#F28.A07LG$F04.A0ING$F28.A07LG")
        .unwrap();
    let backward = validator
        .validate("A0B9Z#F28.A07LG$F28.A07LG$F04.A0ING")
        .unwrap();

    let rules = |r: &foodex_model::ValidationResult| {
        let mut ids: Vec<String> = r.warnings.iter().map(|w| w.rule.clone()).collect();
        ids.sort();
        ids
    };
    assert_eq!(rules(&forward), rules(&backward));
    assert!(rules(&forward).contains(&"VBA-DUPLICATE".to_string()));
}

#[test]
fn composite_source_rules_fire_only_for_f01_and_f27() {
    let validator = validator();
    // Each descriptor is a member of the hierarchy paired with its group,
    // and none is implicit on the composite base A000J.
    let cases = [
        ("F01", "A0SRC", true),
        ("F27", "A0B9X", true),
        ("F28", "A07LG", false),
        ("F03", "A0BZS", false),
        ("F04", "A0ING", false),
    ];
    for (group, descriptor, expect_violation) in cases {
        let input = format!("A000J#{group}.{descriptor}");
        let result = validator.validate(&input).unwrap();
        let fired = result
            .warnings
            .iter()
            .any(|w| w.rule == "BR03" || w.rule == "BR04");
        assert_eq!(fired, expect_violation, "{input}: {:?}", result.warnings);
    }
}

#[test]
fn batch_results_mirror_input_order() {
    let validator = validator();
    let inputs = vec![
        "A0B9Z".to_string(),
        "ZZZZZ".to_string(),
        "A0NSP".to_string(),
        "A000J#F01.A0F6E".to_string(),
    ];
    let results = validator.validate_batch(&inputs).unwrap();
    assert_eq!(results.len(), inputs.len());
    for (input, result) in inputs.iter().zip(&results) {
        assert_eq!(&result.original_code, input);
    }
    let validity: Vec<bool> = results.iter().map(|r| r.valid).collect();
    assert_eq!(validity, [true, false, true, false]);
}

#[test]
fn warning_counts_sum_to_total() {
    let validator = validator();
    for input in ["A0B9Z", "A000J#F01.A0F6E", "A0B9Z#F03.XXXXX$F03.YYYYY"] {
        let result = validator.validate(input).unwrap();
        let counts = result.warning_counts;
        assert_eq!(
            counts.error + counts.high + counts.low + counts.info,
            counts.total
        );
        assert_eq!(counts.total, result.warnings.len());
    }
}
