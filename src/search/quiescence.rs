use super::{SearchContext, TraceEvent, TraceKind};
use crate::tree::Node;

impl SearchContext {
    /// Null-move quiescence search.
    ///
    /// The stand-pat score comes from evaluating a null move: a virtual node
    /// holding the negated value of `node`. It counts as one static evaluation
    /// although it is never attached to the tree. Children are then searched
    /// inside `(lower, upper)` until the bound fails high.
    ///
    /// There is no depth limit; recursion ends at the leaves of the finite tree.
    /// `depth` only drives trace indentation and goes negative as the search
    /// descends.
    pub fn null_move_quiesce(&mut self, node: &Node, lower: i64, upper: i64, depth: i32) -> i64 {
        let null_move = Node::leaf(-node.estimated_value());
        self.static_evaluations += 1;

        let mut best = -null_move.estimated_value();

        for child in node.children() {
            if best >= upper {
                if self.trace.is_enabled() {
                    self.trace.record(TraceEvent {
                        kind: TraceKind::QuiesceCutoff,
                        node_value: node.estimated_value(),
                        depth,
                        window: (lower, upper),
                        result: best,
                    });
                }
                return best;
            }

            let score = -self.null_move_quiesce(child, -upper, -best, depth - 1);
            best = best.max(score);
        }

        if self.trace.is_enabled() {
            self.trace.record(TraceEvent {
                kind: TraceKind::Quiesce,
                node_value: node.estimated_value(),
                depth,
                window: (lower, upper),
                result: best,
            });
        }
        best
    }
}
