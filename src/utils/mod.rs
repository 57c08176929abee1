//! Utility helpers for working with criteria trees

pub mod test_utils;
pub mod tree;

pub use tree::{count_nodes, find_node, render_tree};
