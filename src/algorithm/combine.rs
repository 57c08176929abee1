//! Combination of answer-owned criteria subtrees into one query tree
//!
//! Every questionnaire answer may own the root of a small boolean criteria
//! tree. The `QueryCombiner` selects the eligible roots for a project,
//! fetches all of their descendants in one batched call, and assembles a
//! single combined tree under a synthetic match-any root while building the
//! term and answer indexes downstream translators consume.
//!
//! Everything produced here is rebuilt from scratch on each call; a changed
//! questionnaire requires a full recombination, never an incremental patch.

use std::fmt;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::algorithm::walker::WalkContext;
use crate::collections::MultiMap;
use crate::config::CombinerConfig;
use crate::error::{CriteriaError, Result};
use crate::loader::{CriteriaRepository, MetadataLoader};
use crate::models::{Answer, MatchType, Query, Question, QuestionType, Section};

/// Counters for data-integrity skew encountered during one combination
///
/// Skew is never fatal; these counters exist so operators can tell a clean
/// run from one that silently dropped input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombineDiagnostics {
    /// Descendant nodes dropped for lacking a resolvable parent id
    pub orphaned_nodes: usize,
    /// Root nodes skipped because their answer or question was missing
    pub unresolved_roots: usize,
    /// Nodes skipped because their id had already been walked
    pub revisited_nodes: usize,
    /// Hidden answers whose criteria were excluded by the question type
    pub hidden_answers_excluded: usize,
}

impl CombineDiagnostics {
    /// Whether the run encountered any data-integrity skew
    ///
    /// Hidden-answer exclusion is a business rule, not skew, and does not
    /// count here.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.orphaned_nodes == 0 && self.unresolved_roots == 0 && self.revisited_nodes == 0
    }
}

impl fmt::Display for CombineDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Combination diagnostics:")?;
        writeln!(f, "  Orphaned Nodes: {}", self.orphaned_nodes)?;
        writeln!(f, "  Unresolved Roots: {}", self.unresolved_roots)?;
        writeln!(f, "  Revisited Nodes: {}", self.revisited_nodes)?;
        writeln!(f, "  Hidden Answers Excluded: {}", self.hidden_answers_excluded)?;
        Ok(())
    }
}

/// Result of combining a project's criteria trees
///
/// All maps are ephemeral: rebuilt per invocation, intended for read-only
/// fan-out to downstream consumers, never persisted.
#[derive(Debug, Clone, Default)]
pub struct CombinedQueries {
    /// The synthetic match-any root, or `None` when the project has no
    /// eligible criteria yet
    pub combined: Option<Query>,
    /// answer id -> ids of the terms registered for that answer
    pub answer_terms: MultiMap<String, String>,
    /// term id -> id of the owning answer (last write wins)
    pub term_answers: FxHashMap<String, String>,
    /// Answers by answer id
    pub answers: FxHashMap<String, Answer>,
    /// Every descendant node exactly as fetched, flat and unordered
    pub descendants: Vec<Query>,
    /// Descendant nodes by id (orphans excluded)
    pub queries_by_id: FxHashMap<String, Query>,
    /// category node id -> whether any direct child collects
    pub collected_children: FxHashMap<String, bool>,
    /// Sections by section id
    pub sections: FxHashMap<String, Section>,
    /// question id -> root query ids, feed for per-question hashing
    pub question_roots: MultiMap<String, String>,
    /// Skip counters for this run
    pub diagnostics: CombineDiagnostics,
}

impl CombinedQueries {
    /// Whether the project produced no combined tree
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.combined.is_none()
    }
}

/// Combiner over a metadata loader and a criteria repository
#[derive(Debug)]
pub struct QueryCombiner<M, R> {
    metadata: M,
    repository: R,
    config: CombinerConfig,
}

impl<M: MetadataLoader, R: CriteriaRepository> QueryCombiner<M, R> {
    /// Create a combiner with the default configuration
    #[must_use]
    pub fn new(metadata: M, repository: R) -> Self {
        Self::with_config(metadata, repository, CombinerConfig::default())
    }

    /// Create a combiner with an explicit configuration
    #[must_use]
    pub const fn with_config(metadata: M, repository: R, config: CombinerConfig) -> Self {
        Self {
            metadata,
            repository,
            config,
        }
    }

    /// Combine all eligible criteria trees of a project
    ///
    /// An empty root set is a normal outcome and yields an empty result
    /// without touching the repository. Loader failures abort the whole
    /// operation; no partial result is returned.
    pub async fn combine(&self, project_id: &str) -> Result<CombinedQueries> {
        let metadata = self.metadata.load_project(project_id).await?;

        let mut diagnostics = CombineDiagnostics::default();
        let roots = self.select_roots(&metadata.answers, &metadata.questions, &mut diagnostics);

        if roots.is_empty() {
            log::info!("No eligible criteria roots for project {project_id}");
            return Ok(CombinedQueries {
                diagnostics,
                ..CombinedQueries::default()
            });
        }
        log::info!(
            "Combining {} criteria roots for project {project_id}",
            roots.len()
        );

        let root_ids: Vec<String> = roots.iter().map(|root| root.id.clone()).collect();
        let descendants = self.repository.find_descendants(&root_ids).await?;

        let mut child_index: MultiMap<String, Query> = MultiMap::new();
        let mut queries_by_id: FxHashMap<String, Query> = FxHashMap::default();
        for node in &descendants {
            if let Some(parent_id) = &node.parent_id {
                queries_by_id.insert(node.id.clone(), node.clone());
                child_index.insert(parent_id.clone(), node.clone());
            } else {
                diagnostics.orphaned_nodes += 1;
                if self.config.log_integrity_warnings {
                    log::warn!("Dropping criteria node {} with no resolvable parent", node.id);
                }
            }
        }

        let mut combined = Query::group(self.config.combined_root_id.clone(), MatchType::Any)
            .with_children(roots);

        let mut term_answers: FxHashMap<String, String> = FxHashMap::default();
        let mut answer_terms: MultiMap<String, String> = MultiMap::new();
        let mut collected_children: FxHashMap<String, bool> = FxHashMap::default();
        let mut question_roots: MultiMap<String, String> = MultiMap::new();

        let mut context = WalkContext::new(
            &mut child_index,
            &mut term_answers,
            &mut answer_terms,
            &mut collected_children,
            &mut diagnostics,
            self.config.track_visited,
            self.config.log_integrity_warnings,
        );

        for root in &mut combined.groups {
            let answer = root
                .answer_id
                .as_ref()
                .and_then(|id| metadata.answers.get(id));
            let Some(answer) = answer else {
                context.diagnostics.unresolved_roots += 1;
                if self.config.log_integrity_warnings {
                    log::warn!("Skipping criteria root {} with no resolvable answer", root.id);
                }
                continue;
            };
            let Some(question) = metadata.questions.get(&answer.question_id) else {
                context.diagnostics.unresolved_roots += 1;
                if self.config.log_integrity_warnings {
                    log::warn!(
                        "Skipping criteria root {} with no resolvable question",
                        root.id
                    );
                }
                continue;
            };

            root.sort_direction = question.sort_direction;
            root.groups = context.child_index.remove(&root.id).unwrap_or_default();
            for child in &mut root.groups {
                context.walk(child, answer, question);
            }

            // Disabled questions are excluded from per-question hashing.
            if !question.disabled {
                question_roots.insert(question.id.clone(), root.id.clone());
            }
        }

        if !diagnostics.is_clean() && self.config.log_integrity_warnings {
            log::warn!(
                "Combination for project {project_id} dropped input: {} orphaned, {} unresolved, {} revisited",
                diagnostics.orphaned_nodes,
                diagnostics.unresolved_roots,
                diagnostics.revisited_nodes
            );
        }

        Ok(CombinedQueries {
            combined: Some(combined),
            answer_terms,
            term_answers,
            answers: metadata.answers,
            descendants,
            queries_by_id,
            collected_children,
            sections: metadata.sections,
            question_roots,
            diagnostics,
        })
    }

    /// Blocking wrapper around [`QueryCombiner::combine`]
    pub fn combine_blocking(&self, project_id: &str) -> Result<CombinedQueries> {
        if tokio::runtime::Handle::try_current().is_ok() {
            // Already inside a tokio runtime, drive the future directly
            futures::executor::block_on(self.combine(project_id))
        } else {
            let rt = tokio::runtime::Runtime::new()
                .map_err(|e| CriteriaError::Other(e.into()))?;
            rt.block_on(self.combine(project_id))
        }
    }

    /// Select the root set for a project
    ///
    /// Every answer with an attached criteria node participates, except
    /// hidden answers whose owning question is not multiple choice (those
    /// exist only to carry a custom "nothing found" label). Candidates are
    /// ordered by answer id so the combined tree is deterministic.
    fn select_roots(
        &self,
        answers: &FxHashMap<String, Answer>,
        questions: &FxHashMap<String, Question>,
        diagnostics: &mut CombineDiagnostics,
    ) -> Vec<Query> {
        let mut roots = Vec::new();
        for answer in answers
            .values()
            .sorted_by(|a, b| a.id.cmp(&b.id))
        {
            let Some(root) = &answer.query else {
                continue;
            };
            if answer.hidden {
                let multiple_choice = questions
                    .get(&answer.question_id)
                    .is_some_and(|q| q.question_type == QuestionType::MultipleChoiceSingleAnswer);
                if !multiple_choice {
                    diagnostics.hidden_answers_excluded += 1;
                    continue;
                }
            }
            let mut root = root.clone();
            root.answer_id = Some(answer.id.clone());
            roots.push(root);
        }
        roots
    }
}
