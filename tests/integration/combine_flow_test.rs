//! End-to-end flow over the sample project: combine, then classify.

use cohort_criteria::utils::test_utils::{
    InMemoryCriteriaRepository, InMemoryMetadataLoader, sample_descendants, sample_metadata,
};
use cohort_criteria::utils::{count_nodes, find_node};
use cohort_criteria::{QueryCombiner, QueryTreeIndex, SortDirection};

#[tokio::test]
async fn test_sample_project_combines_and_classifies() {
    let combiner = QueryCombiner::new(
        InMemoryMetadataLoader::new(sample_metadata()),
        InMemoryCriteriaRepository::new(sample_descendants()),
    );

    let result = combiner
        .combine("sample")
        .await
        .expect("sample project should combine");
    let combined = result.combined.as_ref().expect("three eligible roots");

    // Roots ordered by owning answer id: a-age, a-med-none, a-med-yes.
    assert_eq!(combined.id, "combined");
    let root_ids: Vec<&str> = combined.groups.iter().map(|root| root.id.as_str()).collect();
    assert_eq!(root_ids, ["r-age", "r-med-none", "r-med"]);
    // The hidden repeated-question answer never participates.
    assert!(find_node(combined, "r-lab").is_none());
    assert!(find_node(combined, "c-lab").is_none());
    assert_eq!(count_nodes(combined), 8);

    // Sort order flows from each question into its answer's subtree.
    assert_eq!(
        find_node(combined, "c-age").map(|n| n.sort_direction),
        Some(SortDirection::Descending)
    );
    assert_eq!(
        find_node(combined, "c-med-dose").map(|n| n.sort_direction),
        Some(SortDirection::Ascending)
    );

    // Term indexes pair each walked node with its owning answer.
    assert_eq!(
        result.term_answers.get("c-med-dose").map(String::as_str),
        Some("a-med-yes")
    );
    assert_eq!(
        result.answer_terms.get_or_empty(&"a-med-yes".to_string()),
        &["c-med".to_string(), "c-med-dose".to_string()][..]
    );
    assert_eq!(
        result.answer_terms.get_or_empty(&"a-age".to_string()),
        &["c-age".to_string()][..]
    );

    // Only the medication criterion has children, one of which collects.
    assert_eq!(result.collected_children.get("c-med"), Some(&true));
    assert_eq!(result.collected_children.len(), 1);

    // Hashing feed: both enabled questions, hidden answer's root included
    // for the multiple-choice question.
    assert_eq!(
        result.question_roots.get(&"q-age".to_string()),
        Some(&["r-age".to_string()][..])
    );
    assert_eq!(
        result.question_roots.get(&"q-med".to_string()),
        Some(&["r-med-none".to_string(), "r-med".to_string()][..])
    );

    assert_eq!(result.diagnostics.hidden_answers_excluded, 1);
    assert!(result.diagnostics.is_clean());
    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.descendants.len(), 4);
    assert_eq!(result.queries_by_id.len(), 4);

    // Classify the combined tree for the search-engine translator.
    let index = QueryTreeIndex::new(result.combined.as_ref());
    let term_ids: Vec<&str> = index.terms().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(term_ids, ["c-age", "c-med-none", "c-med", "c-med-dose"]);

    let group_ids: Vec<&str> = index.groups().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(group_ids, ["combined", "r-age", "r-med-none", "r-med"]);

    let parent_term_ids: Vec<&str> = index.parent_terms().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(parent_term_ids, ["c-age", "c-med-none", "c-med"]);
    assert_eq!(
        index.enclosing_term("c-med-dose").map(|t| t.id.as_str()),
        Some("c-med")
    );
}
