//! Answer entity model
//!
//! An answer belongs to a question and may own the root node of a criteria
//! subtree. Hidden answers normally exist only to carry a custom "nothing
//! found" label for multiple-choice questions; the combiner decides per
//! question type whether their criteria participate.

use serde::{Deserialize, Serialize};

use crate::models::query::Query;

/// One authored answer to a questionnaire question
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Answer identifier, unique within a project
    pub id: String,
    /// Hidden answers are excluded from combination unless the owning
    /// question is multiple choice
    #[serde(default)]
    pub hidden: bool,
    /// Id of the owning question (lookup only)
    pub question_id: String,
    /// Root node of this answer's criteria subtree, if any
    #[serde(default)]
    pub query: Option<Query>,
}

impl Answer {
    /// Create a visible answer with no criteria attached
    #[must_use]
    pub fn new(id: impl Into<String>, question_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hidden: false,
            question_id: question_id.into(),
            query: None,
        }
    }

    /// Attach a root criteria node
    #[must_use]
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }

    /// Mark the answer as hidden
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}
