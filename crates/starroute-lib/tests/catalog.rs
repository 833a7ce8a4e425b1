mod common;

use starroute_lib::{
    load_system_records, resolve_anchors, Catalog, Error, NeighbourStrategy, SystemRecord,
};

#[test]
fn csv_and_json_fixtures_describe_the_same_catalog() {
    let json = common::fixture_records();
    let csv = load_system_records(&common::fixtures_dir().join("systems.csv")).unwrap();
    assert_eq!(json, csv);
}

#[test]
fn fixture_anchors_drop_unknown_names() {
    let catalog = common::fixture_catalog();
    let anchors = resolve_anchors(&catalog, &common::fixture_anchors());
    assert_eq!(anchors.len(), 1);
    assert_eq!(anchors[0].name, "Ratraii");
    assert_eq!(anchors[0].radius_ly, 50.0);
}

#[test]
fn fuzzy_suggestions_for_misspelled_names() {
    let catalog = common::fixture_catalog();
    let err = catalog.resolve("Wolf 539").unwrap_err();
    match err {
        Error::UnknownSystem { name, suggestions } => {
            assert_eq!(name, "Wolf 539");
            assert_eq!(suggestions.first().map(String::as_str), Some("Wolf 359"));
            assert!(suggestions.len() <= 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn no_suggestions_for_unrelated_names() {
    let catalog = common::fixture_catalog();
    let err = catalog.resolve("Qzxv").unwrap_err();
    assert!(matches!(err, Error::UnknownSystem { suggestions, .. } if suggestions.is_empty()));
}

#[test]
fn range_query_matches_fixture_geometry() {
    let catalog = common::fixture_catalog();
    let wolf = catalog.system_by_name("Wolf 359").unwrap();
    let names: Vec<(&str, f64)> = catalog
        .systems_within_range(wolf, 8.0)
        .into_iter()
        .map(|(system, distance)| (system.name.as_str(), distance))
        .collect();

    assert_eq!(names, vec![("Luyten's Star", 8.0), ("Ross 128", 8.0)]);
}

#[test]
fn kd_tree_strategy_answers_like_the_scan() {
    let scan = common::fixture_catalog();
    let tree = common::fixture_catalog().with_neighbour_strategy(NeighbourStrategy::KdTree);

    for system in scan.systems().filter(|s| s.position.is_some()) {
        let other = tree.system_by_name(&system.name).unwrap();
        for range in [5.0, 8.0, 12.5, 50.0] {
            let expected: Vec<_> = scan
                .systems_within_range(system, range)
                .into_iter()
                .map(|(s, d)| (s.id, d))
                .collect();
            let actual: Vec<_> = tree
                .systems_within_range(other, range)
                .into_iter()
                .map(|(s, d)| (s.id, d))
                .collect();
            assert_eq!(expected, actual, "{} at {range}", system.name);
        }
    }
}

#[test]
fn whitespace_only_names_reject_the_batch() {
    let err = Catalog::from_records(vec![
        SystemRecord::new("Sol", 0.0, 0.0, 0.0),
        SystemRecord::new("   ", 1.0, 0.0, 0.0),
    ])
    .unwrap_err();
    assert!(matches!(err, Error::InvalidSystemName { index: 1 }));
}

#[test]
fn names_differing_only_by_padding_are_duplicates() {
    let err = Catalog::from_records(vec![
        SystemRecord::new("Sol", 0.0, 0.0, 0.0),
        SystemRecord::new(" Sol ", 1.0, 0.0, 0.0),
    ])
    .unwrap_err();
    assert!(matches!(err, Error::DuplicateSystemName { name } if name == "Sol"));
}
