#![allow(missing_docs)]

use vocab_registry::{TermError, TermRegistry, VocabularyCatalog, default_registry};

#[test]
fn test_every_spelling_hands_out_the_same_instance() {
    let registry = default_registry();
    let canonical = registry.resolve("dwc:scientificName").unwrap();

    for spelling in [
        "scientificName",
        "http://rs.tdwg.org/dwc/terms/scientificName",
        "SCIENTIFICNAME",
        "scientific_name",
        " scientificName ",
        "https://rs.tdwg.org/dwc/terms/scientificName",
    ] {
        let term = registry.resolve(spelling).unwrap();
        assert!(
            term.same_instance(&canonical),
            "{spelling:?} resolved to a different instance"
        );
    }

    assert_eq!(
        canonical.qualified_name(),
        "http://rs.tdwg.org/dwc/terms/scientificName"
    );
    assert_eq!(canonical.prefixed_name(), "dwc:scientificName");
}

#[test]
fn test_historic_spellings_reach_the_current_term() {
    let registry = default_registry();

    for (old, current) in [
        ("collectorNumber", "http://rs.tdwg.org/dwc/terms/recordNumber"),
        ("dwc:collectorNumber", "http://rs.tdwg.org/dwc/terms/recordNumber"),
        ("collector", "http://rs.tdwg.org/dwc/terms/recordedBy"),
        ("acceptedTaxonID", "http://rs.tdwg.org/dwc/terms/acceptedNameUsageID"),
        ("latitude", "http://rs.tdwg.org/dwc/terms/decimalLatitude"),
        ("longitude", "http://rs.tdwg.org/dwc/terms/decimalLongitude"),
        ("basionym", "http://rs.tdwg.org/dwc/terms/originalNameUsage"),
        ("weightInGram", "http://rs.gbif.org/terms/1.0/massInGram"),
    ] {
        let term = registry.resolve(old).unwrap();
        assert_eq!(term.qualified_name(), current, "for spelling {old:?}");
    }
}

#[test]
fn test_alternate_prefixes_resolve_like_the_primary_one() {
    let registry = default_registry();
    let by_primary = registry.resolve("dcterms:modified").unwrap();
    let by_alternate = registry.resolve("dct:modified").unwrap();
    assert!(by_primary.same_instance(&by_alternate));
}

#[test]
fn test_class_and_property_spaces_stay_apart() {
    let registry = default_registry();

    // exact match wins over a normalized one, in either space
    let row_type = registry.resolve("Identifier").unwrap();
    assert!(row_type.is_class());
    assert_eq!(row_type.qualified_name(), "http://rs.gbif.org/terms/1.0/Identifier");

    let field = registry.resolve("identifier").unwrap();
    assert!(!field.is_class());
    assert_eq!(field.qualified_name(), "http://purl.org/dc/terms/identifier");

    // a space-qualified probe normalizes within that space only
    let class_only = registry.resolve_class("identifier").unwrap();
    assert!(class_only.same_instance(&row_type));
    let property_only = registry.resolve_property("IDENTIFIER").unwrap();
    assert!(property_only.same_instance(&field));
}

#[test]
fn test_colliding_keys_keep_the_earlier_registration() {
    let registry = TermRegistry::new();

    let mut first = VocabularyCatalog::new("first", "one", "http://example.org/one/");
    first.property("status", &[]);
    let mut second = VocabularyCatalog::new("second", "two", "http://example.org/two/");
    second.property("status", &[]);

    registry.register_vocabulary(&first, &[]);
    registry.register_vocabulary(&second, &[]);

    let term = registry.resolve("status").unwrap();
    assert_eq!(term.qualified_name(), "http://example.org/one/status");
    // the loser stays reachable through its unambiguous spellings
    let other = registry.resolve("two:status").unwrap();
    assert_eq!(other.qualified_name(), "http://example.org/two/status");
}

#[test]
fn test_qualified_only_catalogs_leave_simple_names_alone() {
    let registry = TermRegistry::new();

    // registered first, so its simple names would win any clash had they
    // been indexed
    let mut niche = VocabularyCatalog::new("niche", "niche", "http://example.org/niche/");
    niche.property("country", &[]);
    registry.register_vocabulary_qualified_only(&niche);

    let mut main = VocabularyCatalog::new("main", "main", "http://example.org/main/");
    main.property("country", &[]);
    registry.register_vocabulary(&main, &[]);

    // the bare spelling belongs to the fully indexed catalog
    let bare = registry.resolve("country").unwrap();
    assert_eq!(bare.qualified_name(), "http://example.org/main/country");

    // the qualified-only rows stay reachable through unambiguous spellings
    let by_prefixed = registry.resolve("niche:country").unwrap();
    assert_eq!(by_prefixed.qualified_name(), "http://example.org/niche/country");
    let by_qualified = registry.resolve("http://example.org/niche/country").unwrap();
    assert!(by_qualified.same_instance(&by_prefixed));

    assert_eq!(registry.registered_vocabularies(), vec!["main", "niche"]);
}

#[test]
fn test_registering_the_same_catalog_twice_is_a_noop() {
    let registry = TermRegistry::new();
    let mut catalog = VocabularyCatalog::new("demo", "demo", "http://example.org/demo/");
    catalog.property("thing", &[]);

    registry.register_vocabulary(&catalog, &[]);
    registry.register_vocabulary(&catalog, &[]);

    assert_eq!(registry.registered_vocabularies(), vec!["demo".to_string()]);
}

#[test]
fn test_blank_spellings_are_rejected() {
    let registry = TermRegistry::new();
    assert!(matches!(registry.resolve(""), Err(TermError::BlankSpelling)));
    assert!(matches!(registry.resolve("   "), Err(TermError::BlankSpelling)));
    assert!(matches!(registry.resolve("\t\n"), Err(TermError::BlankSpelling)));
}

#[test]
fn test_fabricated_terms_are_cached_for_the_registry_lifetime() {
    let registry = TermRegistry::new();

    let first = registry.resolve("somethingNeverRegistered").unwrap();
    let second = registry.resolve("somethingNeverRegistered").unwrap();
    assert!(first.same_instance(&second));

    // the fabricated identity is also reachable by its qualified name
    let by_uri = registry.resolve(first.qualified_name()).unwrap();
    assert!(by_uri.same_instance(&first));

    // a re-spelling lands in the same normalized cache slot
    let hello = registry.resolve("hello").unwrap();
    assert_eq!(hello.qualified_name(), "http://unknown.org/hello");
    assert_eq!(hello.simple_name(), "hello");
    let respelled = registry.resolve("Hello").unwrap();
    assert!(respelled.same_instance(&hello));
}

#[test]
fn test_space_qualified_misses_fabricate_into_that_space() {
    let registry = TermRegistry::new();

    let class = registry.resolve_class("MysteryRowType").unwrap();
    assert!(class.is_class());

    let property = registry.resolve_property("mysteryField").unwrap();
    assert!(!property.is_class());

    // an unqualified miss fabricates a property term
    let default_space = registry.resolve("anotherMystery").unwrap();
    assert!(!default_space.is_class());
}

#[test]
fn test_concurrent_resolution_agrees_on_one_instance() {
    let registry = TermRegistry::with_known_vocabularies();

    let terms: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| registry.resolve("sharedFreshSpelling").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = &terms[0];
    for term in &terms {
        assert!(term.same_instance(first));
    }
}

#[test]
fn test_default_registry_is_process_wide() {
    assert!(std::ptr::eq(default_registry(), default_registry()));
}

#[test]
fn test_vocabulary_backed_terms_are_listed_once_each() {
    let backed = default_registry().vocabulary_backed_terms();
    let names: Vec<&str> = backed.iter().map(|t| t.qualified_name()).collect();
    assert_eq!(
        names,
        vec![
            "http://rs.tdwg.org/dwc/terms/degreeOfEstablishment",
            "http://rs.tdwg.org/dwc/terms/establishmentMeans",
            "http://rs.tdwg.org/dwc/terms/lifeStage",
            "http://rs.tdwg.org/dwc/terms/pathway",
        ]
    );
}

#[test]
fn test_deprecated_rows_keep_resolving() {
    let term = default_registry().resolve("gbif:coordinateAccuracy").unwrap();
    assert!(term.is_deprecated());
    assert_eq!(term.qualified_name(), "http://rs.gbif.org/terms/1.0/coordinateAccuracy");
}
