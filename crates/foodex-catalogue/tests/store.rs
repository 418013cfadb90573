use std::path::PathBuf;
use std::sync::Arc;

use foodex_catalogue::{Catalogue, HierarchyResolver, hierarchy};
use foodex_model::{FacetGroup, ProcessOrdinal, TermCode};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn code(s: &str) -> TermCode {
    TermCode::new(s).expect("term code")
}

#[test]
fn loads_terms_with_parsed_implicit_facets() {
    let catalogue = Catalogue::load(&fixtures_dir()).expect("catalogue");

    let wheat = catalogue.term(&code("A0B9Z")).expect("wheat");
    assert_eq!(wheat.extended_name, "Wheat grain");
    assert_eq!(wheat.implicit_facets.len(), 2);
    assert_eq!(wheat.implicit_facets[0].group, FacetGroup::F27);
    assert_eq!(wheat.implicit_facets[0].descriptor, code("A000A"));
    assert_eq!(wheat.implicit_facets[1].group, FacetGroup::F33);

    let dismissed = catalogue.term(&code("A0OLD")).expect("dismissed");
    assert!(dismissed.deprecated);
    assert!(dismissed.is_dismissed());

    assert!(catalogue.term(&code("ZZZZZ")).is_none());
}

#[test]
fn membership_and_parent_links() {
    let catalogue = Catalogue::load(&fixtures_dir()).expect("catalogue");

    assert!(catalogue.is_member(&code("A0B9Z"), hierarchy::REPORT));
    assert!(!catalogue.is_member(&code("A07KQ"), hierarchy::REPORT));
    assert_eq!(
        catalogue.parent(&code("A0B9Z"), hierarchy::REPORT),
        Some(&code("A000A"))
    );
    assert_eq!(catalogue.parent(&code("A000A"), hierarchy::REPORT), None);
}

#[test]
fn forbidden_processes_union_over_report_ancestors() {
    let catalogue = Arc::new(Catalogue::load(&fixtures_dir()).expect("catalogue"));
    let resolver = HierarchyResolver::new(Arc::clone(&catalogue));

    // A0B9Z inherits A000A's forbidden process via the report hierarchy.
    let forbidden = catalogue
        .forbidden_processes_for(&code("A0B9Z"), &resolver)
        .expect("forbidden");
    assert!(forbidden.contains(&code("A07KQ")));
    assert!(!forbidden.contains(&code("A07LG")));

    // The root itself is included.
    let forbidden = catalogue
        .forbidden_processes_for(&code("A01DJ"), &resolver)
        .expect("forbidden");
    assert!(forbidden.contains(&code("A07LG")));
}

#[test]
fn ordinal_lookup_defaults_to_zero() {
    let catalogue = Catalogue::load(&fixtures_dir()).expect("catalogue");

    let freezing = catalogue.process_ordinal(&code("A07KQ"));
    assert_eq!(freezing.integer_part(), 1);
    assert!(freezing.is_fractional());

    let canning = catalogue.process_ordinal(&code("A07LG"));
    assert_eq!(canning, "2".parse::<ProcessOrdinal>().unwrap());

    assert!(catalogue.process_ordinal(&code("A07XS")).is_non_exclusive());
}

#[test]
fn rule_messages_override_builtin() {
    let catalogue = Catalogue::load(&fixtures_dir()).expect("catalogue");
    assert_eq!(
        catalogue.rule("BR03").message,
        "source facet banned in composite foods"
    );
    // Untouched ids keep the built-in text.
    assert!(catalogue.rule("BR17").message.contains("base term"));
}

#[test]
fn search_prefers_exact_code_matches() {
    let catalogue = Catalogue::load(&fixtures_dir()).expect("catalogue");

    let hits = catalogue.search("A000A", 10);
    assert_eq!(hits[0].code.as_str(), "A000A");

    let hits = catalogue.search("grain", 10);
    assert!(hits.iter().any(|t| t.code.as_str() == "A0B9Z"));
    // Deprecated hits sort after current ones.
    let positions: Vec<&str> = hits.iter().map(|t| t.code.as_str()).collect();
    let wheat = positions.iter().position(|c| *c == "A0B9Z").unwrap();
    let obsolete = positions.iter().position(|c| *c == "A0OLD").unwrap();
    assert!(wheat < obsolete);

    assert!(catalogue.search("", 10).is_empty());
}

#[test]
fn summary_counts() {
    let catalogue = Catalogue::load(&fixtures_dir()).expect("catalogue");
    let summary = catalogue.summary();
    assert_eq!(summary.term_count, 8);
    assert_eq!(summary.hierarchy_count, 4);
    assert_eq!(summary.forbidden_process_count, 2);
}

#[test]
fn missing_directory_is_fatal() {
    let err = Catalogue::load(&fixtures_dir().join("nope")).unwrap_err();
    assert!(matches!(
        err,
        foodex_catalogue::CatalogueError::MissingFile { .. }
    ));
}
