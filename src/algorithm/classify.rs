//! Term and group classification over a built criteria tree
//!
//! Given any criteria tree root, `QueryTreeIndex` classifies every node
//! once, at construction, into concrete criteria (terms) and pure
//! combinators (groups), and records which terms sit directly under a
//! combinator versus nested inside another term. Consumers translating the
//! tree into a search-engine query read these lists instead of re-deriving
//! the classification per node.
//!
//! The index borrows the tree it was built from and performs no further
//! traversal after construction.

use rustc_hash::FxHashMap;

use crate::models::Query;

/// Classification of one tree node, decided once during construction
#[derive(Debug, Clone, Copy)]
pub enum ClassifiedNode<'a> {
    /// A node carrying a category: a concrete, evaluable criterion
    Term(&'a Query),
    /// A node without a category: a pure boolean combinator
    Group(&'a Query),
}

/// Pre-order classification index over one criteria tree
#[derive(Debug, Clone, Default)]
pub struct QueryTreeIndex<'a> {
    terms: Vec<&'a Query>,
    groups: Vec<&'a Query>,
    parent_terms: Vec<&'a Query>,
    /// nested term id -> the term enclosing it
    nested_terms: FxHashMap<&'a str, &'a Query>,
}

impl<'a> QueryTreeIndex<'a> {
    /// Build the index from an optional tree root
    ///
    /// A `None` root yields an index that answers every query with an
    /// empty result. The traversal is a single depth-first pre-order pass,
    /// so repeated construction from the same tree yields identical,
    /// order-stable lists.
    #[must_use]
    pub fn new(root: Option<&'a Query>) -> Self {
        let mut index = Self {
            terms: Vec::new(),
            groups: Vec::new(),
            parent_terms: Vec::new(),
            nested_terms: FxHashMap::default(),
        };
        if let Some(root) = root {
            index.visit(root, None);
        }
        index
    }

    fn visit(&mut self, node: &'a Query, parent: Option<&'a Query>) {
        match self.classify(node, parent) {
            ClassifiedNode::Term(term) => self.terms.push(term),
            ClassifiedNode::Group(group) => self.groups.push(group),
        }
        for child in &node.groups {
            self.visit(child, Some(node));
        }
    }

    fn classify(&mut self, node: &'a Query, parent: Option<&'a Query>) -> ClassifiedNode<'a> {
        if node.is_group() {
            return ClassifiedNode::Group(node);
        }
        let enclosing_term = parent.filter(|p| p.is_term());
        match enclosing_term {
            Some(enclosing) => {
                // First match wins on duplicate ids, preserving traversal order.
                self.nested_terms.entry(node.id.as_str()).or_insert(enclosing);
            }
            None if !node.disabled => self.parent_terms.push(node),
            None => {}
        }
        ClassifiedNode::Term(node)
    }

    /// All terms in traversal order
    #[must_use]
    pub fn terms(&self) -> &[&'a Query] {
        &self.terms
    }

    /// All groups in traversal order
    #[must_use]
    pub fn groups(&self) -> &[&'a Query] {
        &self.groups
    }

    /// Non-disabled terms sitting directly under a combinator or at the top
    #[must_use]
    pub fn parent_terms(&self) -> &[&'a Query] {
        &self.parent_terms
    }

    /// Look up a term by id, first match in traversal order
    #[must_use]
    pub fn term(&self, id: &str) -> Option<&'a Query> {
        self.terms.iter().find(|term| term.id == id).copied()
    }

    /// Look up a group by id, first match in traversal order
    #[must_use]
    pub fn group(&self, id: &str) -> Option<&'a Query> {
        self.groups.iter().find(|group| group.id == id).copied()
    }

    /// Look up the term enclosing a nested term id, if any
    #[must_use]
    pub fn enclosing_term(&self, id: &str) -> Option<&'a Query> {
        self.nested_terms.get(id).copied()
    }
}
