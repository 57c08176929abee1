//! Criteria node entity model
//!
//! This module contains the `Query` model, representing one node of a
//! boolean search-criteria tree. A node carrying a [`SearchCategory`] is a
//! concrete, evaluable criterion (a term); a node without one is a pure
//! combinator over its children (a group).
//!
//! Ownership of a node lies exactly once with its parent's `groups` list.
//! The `parent_id` and `answer_id` fields are weak lookup references into
//! id-keyed maps and must never be treated as owning links.

use serde::{Deserialize, Serialize};

use crate::models::types::{MatchType, SearchCategory, SortDirection};

/// One node of a criteria tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Node identifier, unique within a project
    pub id: String,
    /// Disabled nodes halt traversal below themselves
    #[serde(default)]
    pub disabled: bool,
    /// Marks a node whose match should be counted by an ancestor
    #[serde(default)]
    pub collect: bool,
    /// Id of the containing node, if any (lookup only)
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Owned, ordered child nodes
    #[serde(default)]
    pub groups: Vec<Query>,
    /// Id of the owning answer, if any (lookup only)
    #[serde(default)]
    pub answer_id: Option<String>,
    /// Searchable domain; present on terms, absent on groups
    #[serde(default)]
    pub category: Option<SearchCategory>,
    /// Combinator applied to the children
    #[serde(default, rename = "match")]
    pub match_type: MatchType,
    /// Result ordering, inherited from the owning question during combination
    #[serde(default)]
    pub sort_direction: SortDirection,
}

impl Query {
    /// Create a new group node with the default `Any` combinator
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            disabled: false,
            collect: false,
            parent_id: None,
            groups: Vec::new(),
            answer_id: None,
            category: None,
            match_type: MatchType::Any,
            sort_direction: SortDirection::Ascending,
        }
    }

    /// Create a term node evaluating against the given category
    #[must_use]
    pub fn term(id: impl Into<String>, category: SearchCategory) -> Self {
        let mut query = Self::new(id);
        query.category = Some(category);
        query
    }

    /// Create a group node with an explicit combinator
    #[must_use]
    pub fn group(id: impl Into<String>, match_type: MatchType) -> Self {
        let mut query = Self::new(id);
        query.match_type = match_type;
        query
    }

    /// Attach child nodes, recording this node as their parent reference
    #[must_use]
    pub fn with_children(mut self, children: Vec<Query>) -> Self {
        self.groups = children;
        for child in &mut self.groups {
            child.parent_id = Some(self.id.clone());
        }
        self
    }

    /// Set the parent reference without transferring ownership
    #[must_use]
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Mark the node as disabled
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Mark the node's matches for counting by an ancestor
    #[must_use]
    pub fn collected(mut self) -> Self {
        self.collect = true;
        self
    }

    /// Set the authored sort direction
    #[must_use]
    pub const fn with_sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = direction;
        self
    }

    /// Whether this node is a concrete criterion
    #[must_use]
    pub const fn is_term(&self) -> bool {
        self.category.is_some()
    }

    /// Whether this node is a pure combinator
    #[must_use]
    pub const fn is_group(&self) -> bool {
        self.category.is_none()
    }
}
