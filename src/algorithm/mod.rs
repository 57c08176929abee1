//! Core criteria tree algorithms
//!
//! This module contains the combination and indexing algorithms: selecting
//! and merging answer-owned criteria subtrees into one combined tree,
//! walking that tree to build the term indexes, and classifying the nodes
//! of any built tree into terms and groups for downstream translation.

pub mod classify;
pub mod combine;
pub mod walker;

pub use classify::{ClassifiedNode, QueryTreeIndex};
pub use combine::{CombineDiagnostics, CombinedQueries, QueryCombiner};
