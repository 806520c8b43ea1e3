//! Negamax alpha-beta search over a synthetic tree.
//!
//! Features:
//! - Fixed-depth alpha-beta with fail-hard beta cutoffs
//! - Optional null-move quiescence search at the horizon
//! - Static evaluation counting per top-level search
//! - Trace recording for diagnostic output
//!
//! All mutable search state lives in a [`SearchContext`] that is created fresh
//! for every top-level call, so nothing carries over between searches.

mod constants;
pub mod log;
mod quiescence;
pub mod trace;

#[cfg(test)]
mod tests;

pub use constants::INF;
pub use self::log::{BufferLogger, SearchLogger, StdoutLogger};
pub use trace::{TraceEvent, TraceKind, TraceLog};

use crate::tree::Node;

/// Result of one top-level search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Negamax value of the root from the side to move
    pub value: i64,
    /// Number of static evaluations performed
    pub static_evaluations: u64,
    /// Recorded trace; empty when tracing was off
    pub trace: TraceLog,
}

/// Per-search state: evaluation counter and trace recorder
#[derive(Debug, Default)]
pub struct SearchContext {
    pub static_evaluations: u64,
    pub trace: TraceLog,
}

impl SearchContext {
    #[must_use]
    pub fn new(tracing: bool) -> Self {
        SearchContext {
            static_evaluations: 0,
            trace: TraceLog::new(tracing),
        }
    }

    #[must_use]
    pub fn into_outcome(self, value: i64) -> SearchOutcome {
        SearchOutcome {
            value,
            static_evaluations: self.static_evaluations,
            trace: self.trace,
        }
    }

    /// Static evaluation of a leaf
    #[inline]
    pub fn evaluate(&mut self, node: &Node) -> i64 {
        self.static_evaluations += 1;
        node.estimated_value()
    }

    /// Negamax alpha-beta search to `height` plies.
    ///
    /// Returns the value from the perspective of the side to move at `node`.
    /// At the horizon the node is either statically evaluated or handed to
    /// [`SearchContext::null_move_quiesce`] with a full window.
    pub fn alpha_beta(
        &mut self,
        node: &Node,
        height: u32,
        mut alpha: i64,
        beta: i64,
        use_quiescence: bool,
    ) -> i64 {
        let depth = i32::try_from(height).unwrap_or(i32::MAX);

        if height == 0 {
            if use_quiescence {
                return self.null_move_quiesce(node, -INF, INF, 0);
            }
            let eval = self.evaluate(node);
            if self.trace.is_enabled() {
                self.trace.record(TraceEvent {
                    kind: TraceKind::Static,
                    node_value: node.estimated_value(),
                    depth,
                    window: (alpha, beta),
                    result: eval,
                });
            }
            return eval;
        }

        for child in node.children() {
            let score = -self.alpha_beta(child, height - 1, -beta, -alpha, use_quiescence);

            if score >= beta {
                if self.trace.is_enabled() {
                    self.trace.record(TraceEvent {
                        kind: TraceKind::Cutoff,
                        node_value: node.estimated_value(),
                        depth,
                        window: (score, beta),
                        result: score,
                    });
                }
                return score;
            }
            alpha = alpha.max(score);
        }

        if self.trace.is_enabled() {
            self.trace.record(TraceEvent {
                kind: TraceKind::Search,
                node_value: node.estimated_value(),
                depth,
                window: (alpha, beta),
                result: alpha,
            });
        }
        alpha
    }
}

/// Run one top-level alpha-beta search with a full window.
///
/// A new [`SearchContext`] is created for the call and returned inside the
/// outcome, so the counter and trace always start from zero.
#[must_use]
pub fn search(root: &Node, height: u32, use_quiescence: bool, tracing: bool) -> SearchOutcome {
    let mut ctx = SearchContext::new(tracing);
    let value = ctx.alpha_beta(root, height, -INF, INF, use_quiescence);
    ::log::debug!(
        "search h={} quiescence={}: value {} after {} static evaluations",
        height,
        use_quiescence,
        value,
        ctx.static_evaluations
    );
    ctx.into_outcome(value)
}
