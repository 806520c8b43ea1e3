//! Search module tests.
//!
//! Tests are organized into separate files by category:
//! - `alpha_beta.rs` - Pruning, counting and sign convention
//! - `quiescence.rs` - Null-move quiescence search
//! - `trace.rs` - Trace recording and report rendering
//! - `proptest.rs` - Property-based tests against an unpruned reference

mod trace;

use super::INF;
use crate::tree::Node;

/// Full-width negamax without pruning
pub(super) fn minimax(node: &Node, height: u32) -> i64 {
    if height == 0 {
        return node.estimated_value();
    }
    node.children()
        .iter()
        .map(|c| -minimax(c, height - 1))
        .max()
        .unwrap_or(-INF)
}

/// Two-ply tree where the last leaf is pruned by a full-window search
pub(super) fn pruning_tree() -> Node {
    Node::with_children(
        0,
        vec![
            Node::with_children(0, vec![Node::leaf(3), Node::leaf(5)]),
            Node::with_children(0, vec![Node::leaf(2), Node::leaf(9)]),
        ],
    )
}
