//! Domain models for the criteria combination core
//!
//! This module contains the entity models the combiner and indexers operate
//! on: the criteria node itself plus the questionnaire entities (section,
//! question, answer) that own and shape the criteria trees.

// Entity models
pub mod answer;
pub mod query;
pub mod question;
pub mod section;
pub mod types;

// Re-export commonly used types
pub use answer::Answer;
pub use query::Query;
pub use question::Question;
pub use section::Section;
pub use types::{MatchType, QuestionType, SearchCategory, SortDirection};
