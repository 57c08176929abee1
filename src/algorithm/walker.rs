//! Recursive criteria tree walk
//!
//! The walk runs once per direct child of every combined-tree root. It
//! attaches deeper descendants by taking them out of the parent index
//! (which also guarantees a node is owned at most once), propagates the
//! owning question's sort direction downward, registers every entered node
//! in the term indexes, and computes the collected-children flag for
//! category nodes.
//!
//! The index set is threaded through the walk as mutable state rather than
//! held globally; each combination run builds its own.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::algorithm::combine::CombineDiagnostics;
use crate::collections::MultiMap;
use crate::models::{Answer, Query, Question};

/// Mutable state shared by one combination run's walks
pub(crate) struct WalkContext<'a> {
    /// parent id -> not-yet-attached children, drained as the tree builds
    pub child_index: &'a mut MultiMap<String, Query>,
    /// term id -> owning answer id
    pub term_answers: &'a mut FxHashMap<String, String>,
    /// answer id -> term ids
    pub answer_terms: &'a mut MultiMap<String, String>,
    /// category node id -> any direct child collects
    pub collected_children: &'a mut FxHashMap<String, bool>,
    /// Skip counters surfaced to the caller
    pub diagnostics: &'a mut CombineDiagnostics,
    track_visited: bool,
    log_warnings: bool,
    visited: FxHashSet<String>,
}

impl<'a> WalkContext<'a> {
    pub fn new(
        child_index: &'a mut MultiMap<String, Query>,
        term_answers: &'a mut FxHashMap<String, String>,
        answer_terms: &'a mut MultiMap<String, String>,
        collected_children: &'a mut FxHashMap<String, bool>,
        diagnostics: &'a mut CombineDiagnostics,
        track_visited: bool,
        log_warnings: bool,
    ) -> Self {
        Self {
            child_index,
            term_answers,
            answer_terms,
            collected_children,
            diagnostics,
            track_visited,
            log_warnings,
            visited: FxHashSet::default(),
        }
    }

    /// Walk one node and the non-disabled part of its subtree
    ///
    /// The node is registered in both term indexes even when disabled;
    /// disabling only halts descent. Acyclicity is a repository contract,
    /// so a revisited id is treated as a data-integrity inconsistency and
    /// skipped instead of recursed.
    pub fn walk(&mut self, node: &mut Query, answer: &Answer, question: &Question) {
        if self.track_visited && !self.visited.insert(node.id.clone()) {
            self.diagnostics.revisited_nodes += 1;
            if self.log_warnings {
                log::warn!("Criteria node {} visited twice, skipping revisit", node.id);
            }
            return;
        }

        // Inheritance is an unconditional override: every node reachable
        // from an answer carries that answer's question's sort order.
        node.sort_direction = question.sort_direction;

        self.term_answers
            .insert(node.id.clone(), answer.id.clone());
        self.answer_terms.insert(answer.id.clone(), node.id.clone());

        node.groups = self.child_index.remove(&node.id).unwrap_or_default();
        if node.disabled || node.groups.is_empty() {
            return;
        }

        for child in node.groups.iter_mut().filter(|child| !child.disabled) {
            self.walk(child, answer, question);
        }

        if node.category.is_some() {
            let any_collect = node.groups.iter().any(|child| child.collect);
            self.collected_children.insert(node.id.clone(), any_collect);
        }
    }
}
