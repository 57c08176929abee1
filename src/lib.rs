//! A Rust library for combining questionnaire-authored boolean search
//! criteria into a single query tree, with term and group indexes for
//! downstream translation into storage and search-engine queries.

pub mod algorithm;
pub mod collections;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::CombinerConfig;
pub use error::{CriteriaError, Result};
pub use models::{
    Answer, MatchType, Query, Question, QuestionType, SearchCategory, Section, SortDirection,
};

// Combination and indexing
pub use algorithm::{ClassifiedNode, CombineDiagnostics, CombinedQueries, QueryCombiner, QueryTreeIndex};

// External contracts
pub use loader::{CriteriaRepository, MetadataLoader, ProjectMetadata};

// Collection utilities
pub use collections::MultiMap;
