//! Tests for term/group classification over a built criteria tree

use cohort_criteria::{MatchType, Query, QueryTreeIndex, SearchCategory};

/// `(medication) OR (measurement...)` combined with `NOT (report)`
///
/// The measurement conjunction is authored as a single criterion, so the
/// tree holds three leaf criteria under three combinators.
fn example_tree() -> Query {
    Query::group("root", MatchType::All).with_children(vec![
        Query::group("either", MatchType::Any).with_children(vec![
            Query::term("med-name", SearchCategory::Medication),
            Query::term("ldl-range", SearchCategory::Measurement),
        ]),
        Query::group("excluded", MatchType::None)
            .with_children(vec![Query::term("report-text", SearchCategory::Report)]),
    ])
}

fn ids(nodes: &[&Query]) -> Vec<String> {
    nodes.iter().map(|node| node.id.clone()).collect()
}

#[test]
fn test_terms_and_groups_are_classified_once() {
    let tree = example_tree();
    let index = QueryTreeIndex::new(Some(&tree));

    assert_eq!(ids(index.terms()), ["med-name", "ldl-range", "report-text"]);
    assert_eq!(ids(index.groups()), ["root", "either", "excluded"]);
}

#[test]
fn test_terms_under_combinators_are_parent_terms() {
    let tree = example_tree();
    let index = QueryTreeIndex::new(Some(&tree));

    // Every leaf sits directly under a combinator, so all three qualify
    // and none is recorded as nested.
    assert_eq!(ids(index.parent_terms()), ["med-name", "ldl-range", "report-text"]);
    assert!(index.enclosing_term("med-name").is_none());
    assert!(index.enclosing_term("ldl-range").is_none());
    assert!(index.enclosing_term("report-text").is_none());
}

#[test]
fn test_nested_term_records_its_enclosing_term() {
    let tree = Query::group("root", MatchType::Any).with_children(vec![
        Query::term("outer", SearchCategory::Measurement)
            .with_children(vec![Query::term("inner", SearchCategory::Measurement)]),
    ]);
    let index = QueryTreeIndex::new(Some(&tree));

    assert_eq!(ids(index.terms()), ["outer", "inner"]);
    // The inner criterion is nested, not a parent term.
    assert_eq!(ids(index.parent_terms()), ["outer"]);
    assert_eq!(index.enclosing_term("inner").map(|t| t.id.as_str()), Some("outer"));
    assert!(index.enclosing_term("outer").is_none());
}

#[test]
fn test_disabled_term_is_never_a_parent_term() {
    let tree = Query::group("root", MatchType::Any).with_children(vec![
        Query::term("on", SearchCategory::Demographic),
        Query::term("off", SearchCategory::Demographic).disabled(),
    ]);
    let index = QueryTreeIndex::new(Some(&tree));

    assert_eq!(ids(index.terms()), ["on", "off"]);
    assert_eq!(ids(index.parent_terms()), ["on"]);
}

#[test]
fn test_lookups_follow_traversal_order() {
    let tree = example_tree();
    let index = QueryTreeIndex::new(Some(&tree));

    assert_eq!(index.term("ldl-range").map(|t| t.id.as_str()), Some("ldl-range"));
    assert_eq!(index.group("excluded").map(|g| g.id.as_str()), Some("excluded"));
    assert!(index.term("root").is_none(), "groups are not terms");
    assert!(index.group("med-name").is_none(), "terms are not groups");
    assert!(index.term("missing").is_none());
}

#[test]
fn test_missing_root_yields_empty_index() {
    let index = QueryTreeIndex::new(None);

    assert!(index.terms().is_empty());
    assert!(index.groups().is_empty());
    assert!(index.parent_terms().is_empty());
    assert!(index.term("anything").is_none());
    assert!(index.enclosing_term("anything").is_none());
}

#[test]
fn test_classification_is_idempotent() {
    let tree = example_tree();
    let first = QueryTreeIndex::new(Some(&tree));
    let second = QueryTreeIndex::new(Some(&tree));

    assert_eq!(ids(first.terms()), ids(second.terms()));
    assert_eq!(ids(first.groups()), ids(second.groups()));
    assert_eq!(ids(first.parent_terms()), ids(second.parent_terms()));
}
