//! Synthetic game tree.
//!
//! A tree is built once by [`generate_tree`] and is read-only afterwards:
//! every search borrows it immutably, so the same root can be searched any
//! number of times.

mod generator;

use serde::Serialize;

pub use generator::{generate_tree, TreeParams, VALUE_LIMIT};

/// A node of the evaluation tree.
///
/// For a leaf `estimated_value` is its static evaluation. For an internal node
/// it is the perturbed true value the node was seeded with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(rename = "ev")]
    estimated_value: i64,
    children: Vec<Node>,
}

impl Node {
    #[must_use]
    pub fn leaf(estimated_value: i64) -> Self {
        Node {
            estimated_value,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(estimated_value: i64, children: Vec<Node>) -> Self {
        Node {
            estimated_value,
            children,
        }
    }

    #[inline]
    #[must_use]
    pub fn estimated_value(&self) -> i64 {
        self.estimated_value
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Length of the longest path from this node down to a leaf
    #[must_use]
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in this subtree, including `self`
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Node::leaf_count).sum()
        }
    }

    /// JSON view of the tree, `{"ev": <value>, "children": [...]}` per node.
    ///
    /// The output can be pasted into any generic JSON tree viewer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
