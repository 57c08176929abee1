//! Question entity model

use serde::{Deserialize, Serialize};

use crate::models::types::{QuestionType, SortDirection};

/// One questionnaire question
///
/// The question's `sort_direction` is authoritative: during combination it
/// is propagated into every criteria node reachable from the question's
/// answers, overriding whatever the nodes were authored with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Question identifier, unique within a project
    pub id: String,
    /// Disabled questions are excluded from per-question hashing
    #[serde(default)]
    pub disabled: bool,
    /// How the question collects its answers
    pub question_type: QuestionType,
    /// Ids of the answers belonging to this question
    #[serde(default)]
    pub answers: Vec<String>,
    /// Authoritative result ordering for all reachable criteria nodes
    #[serde(default)]
    pub sort_direction: SortDirection,
}

impl Question {
    /// Create an enabled question with no answers yet
    #[must_use]
    pub fn new(id: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            id: id.into(),
            disabled: false,
            question_type,
            answers: Vec::new(),
            sort_direction: SortDirection::Ascending,
        }
    }

    /// Register the ids of the answers belonging to this question
    #[must_use]
    pub fn with_answers(mut self, answers: Vec<String>) -> Self {
        self.answers = answers;
        self
    }

    /// Set the authoritative sort direction
    #[must_use]
    pub const fn with_sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = direction;
        self
    }

    /// Mark the question as disabled
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}
