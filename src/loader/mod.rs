//! External data contracts for the criteria combination core
//!
//! This module defines the two capabilities the combiner depends on but
//! does not implement: loading questionnaire metadata for a project, and
//! resolving the descendants of a set of criteria roots. Any store capable
//! of closure queries (a recursive SQL query, a document store walk) can
//! back the repository; the core only relies on the `parent_id` carried by
//! each returned node and derives its own parent index from it.
//!
//! Both operations are the sole suspension points of a combination run and
//! execute strictly in sequence. Callers wanting timeouts impose them at
//! this boundary and surface expiry as a fetch failure.

use std::future::Future;
use std::pin::Pin;

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::models::{Answer, Query, Question, Section};

/// Questionnaire metadata for one project, keyed by id
#[derive(Debug, Clone, Default)]
pub struct ProjectMetadata {
    /// Sections by section id
    pub sections: FxHashMap<String, Section>,
    /// Questions by question id
    pub questions: FxHashMap<String, Question>,
    /// Answers by answer id
    pub answers: FxHashMap<String, Answer>,
}

impl ProjectMetadata {
    /// Create an empty metadata bundle
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Loader for a project's sections, questions, and answers
pub trait MetadataLoader: Send + Sync {
    /// Load all sections, questions, and answers for a project
    fn load_project<'a>(
        &'a self,
        project_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ProjectMetadata>> + Send + 'a>>;
}

/// Resolver for the descendants of a set of criteria roots
pub trait CriteriaRepository: Send + Sync {
    /// Find every strict descendant of the given root nodes
    ///
    /// The returned collection is flat and unordered; no ordering guarantee
    /// is assumed by the core.
    fn find_descendants<'a>(
        &'a self,
        root_ids: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Query>>> + Send + 'a>>;
}
