//! Small traversal helpers over a criteria tree

use std::fmt::Write as _;

use crate::models::Query;

/// Render a tree as one indented line per node, for logs and demos
#[must_use]
pub fn render_tree(root: &Query) -> String {
    let mut out = String::new();
    render_node(root, 0, &mut out);
    out
}

fn render_node(node: &Query, depth: usize, out: &mut String) {
    let kind = match node.category {
        Some(category) => format!("term {category:?}"),
        None => format!("group {:?}", node.match_type),
    };
    let flags = match (node.disabled, node.collect) {
        (true, true) => " [disabled, collect]",
        (true, false) => " [disabled]",
        (false, true) => " [collect]",
        (false, false) => "",
    };
    let _ = writeln!(out, "{}{} ({kind}){flags}", "  ".repeat(depth), node.id);
    for child in &node.groups {
        render_node(child, depth + 1, out);
    }
}

/// Count the nodes of a tree, root included
#[must_use]
pub fn count_nodes(root: &Query) -> usize {
    1 + root.groups.iter().map(count_nodes).sum::<usize>()
}

/// Find a node by id, pre-order first match
#[must_use]
pub fn find_node<'a>(root: &'a Query, id: &str) -> Option<&'a Query> {
    if root.id == id {
        return Some(root);
    }
    root.groups.iter().find_map(|child| find_node(child, id))
}
