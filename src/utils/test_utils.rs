//! Shared fixtures for tests and demos
//!
//! In-memory implementations of the loader contracts plus a small sample
//! project exercising the root-inclusion rule, collected-children flags,
//! and nested criteria.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::loader::{CriteriaRepository, MetadataLoader, ProjectMetadata};
use crate::models::{
    Answer, MatchType, Query, Question, QuestionType, SearchCategory, Section, SortDirection,
};

/// Metadata loader serving a fixed bundle for any project id
#[derive(Debug, Clone)]
pub struct InMemoryMetadataLoader {
    metadata: ProjectMetadata,
}

impl InMemoryMetadataLoader {
    #[must_use]
    pub fn new(metadata: ProjectMetadata) -> Self {
        Self { metadata }
    }
}

impl MetadataLoader for InMemoryMetadataLoader {
    fn load_project<'a>(
        &'a self,
        _project_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ProjectMetadata>> + Send + 'a>> {
        let metadata = self.metadata.clone();
        Box::pin(async move { Ok(metadata) })
    }
}

/// Criteria repository backed by a flat node list
///
/// `find_descendants` resolves the transitive closure of the given roots by
/// repeatedly following `parent_id` links through the stored nodes, the way
/// a recursive SQL query would. Invocations are counted so tests can assert
/// the fetch was (or was not) issued.
#[derive(Debug)]
pub struct InMemoryCriteriaRepository {
    nodes: Vec<Query>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryCriteriaRepository {
    #[must_use]
    pub fn new(nodes: Vec<Query>) -> Self {
        Self {
            nodes,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle onto the invocation counter, usable after the repository has
    /// been moved into a combiner
    #[must_use]
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl CriteriaRepository for InMemoryCriteriaRepository {
    fn find_descendants<'a>(
        &'a self,
        root_ids: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Query>>> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut reachable: FxHashSet<&str> = root_ids.iter().map(String::as_str).collect();
        let mut matched = vec![false; self.nodes.len()];
        // Fixed point over the flat list; nodes with no parent id are
        // returned as-is so orphan handling stays testable.
        loop {
            let mut grew = false;
            for (idx, node) in self.nodes.iter().enumerate() {
                if matched[idx] {
                    continue;
                }
                let parent_known = node
                    .parent_id
                    .as_deref()
                    .is_none_or(|parent| reachable.contains(parent));
                if parent_known {
                    matched[idx] = true;
                    grew = reachable.insert(node.id.as_str()) || grew;
                }
            }
            if !grew {
                break;
            }
        }
        let descendants: Vec<Query> = self
            .nodes
            .iter()
            .zip(&matched)
            .filter(|(_, included)| **included)
            .map(|(node, _)| node.clone())
            .collect();
        Box::pin(async move { Ok(descendants) })
    }
}

/// Sample questionnaire metadata: three questions crossing the
/// root-inclusion rule
///
/// - `q-age` (single answer): visible answer with an age criterion.
/// - `q-med` (multiple choice): a visible answer plus a hidden
///   "nothing found" answer, both with criteria, both eligible.
/// - `q-lab` (repeated): hidden answer with criteria, excluded.
#[must_use]
pub fn sample_metadata() -> ProjectMetadata {
    let mut metadata = ProjectMetadata::new();
    metadata
        .sections
        .insert("s1".into(), Section::new("s1").with_name("Inclusion"));

    metadata.questions.insert(
        "q-age".into(),
        Question::new("q-age", QuestionType::SingleAnswer)
            .with_answers(vec!["a-age".into()])
            .with_sort_direction(SortDirection::Descending),
    );
    metadata.questions.insert(
        "q-med".into(),
        Question::new("q-med", QuestionType::MultipleChoiceSingleAnswer)
            .with_answers(vec!["a-med-yes".into(), "a-med-none".into()]),
    );
    metadata.questions.insert(
        "q-lab".into(),
        Question::new("q-lab", QuestionType::Repeated).with_answers(vec!["a-lab".into()]),
    );

    metadata.answers.insert(
        "a-age".into(),
        Answer::new("a-age", "q-age").with_query(Query::group("r-age", MatchType::All)),
    );
    metadata.answers.insert(
        "a-med-yes".into(),
        Answer::new("a-med-yes", "q-med").with_query(Query::group("r-med", MatchType::Any)),
    );
    metadata.answers.insert(
        "a-med-none".into(),
        Answer::new("a-med-none", "q-med")
            .hidden()
            .with_query(Query::group("r-med-none", MatchType::NoneAll)),
    );
    metadata.answers.insert(
        "a-lab".into(),
        Answer::new("a-lab", "q-lab")
            .hidden()
            .with_query(Query::group("r-lab", MatchType::Any)),
    );

    metadata
}

/// Flat descendants matching [`sample_metadata`]
///
/// The medication criterion nests a collected dose criterion, so the
/// collected-children map gets an entry for it.
#[must_use]
pub fn sample_descendants() -> Vec<Query> {
    vec![
        Query::term("c-age", SearchCategory::Demographic).with_parent("r-age"),
        Query::term("c-med", SearchCategory::Medication).with_parent("r-med"),
        Query::term("c-med-dose", SearchCategory::Medication)
            .with_parent("c-med")
            .collected(),
        Query::term("c-med-none", SearchCategory::Medication).with_parent("r-med-none"),
        Query::term("c-lab", SearchCategory::Measurement).with_parent("r-lab"),
    ]
}
