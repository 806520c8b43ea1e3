//! Fixed-width, fixed-depth tree generation.
//!
//! Every internal node picks one "lucky" child that inherits the exact negated
//! value of its parent; the other children are the same or worse for the side
//! to move by up to `spread`. Internal values are blurred by up to
//! `inaccuracy` so that shallow static evaluations are noisy.

use rand::Rng;

use super::Node;

/// Largest magnitude a generated value may take.
///
/// Keeps every value far from the search sentinels so negation never
/// overflows, whatever the caller supplies.
pub const VALUE_LIMIT: i64 = 1 << 48;

/// Shape and value parameters of a generated tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    /// Children per internal node
    pub branching: u32,
    /// Distance from the root to every leaf
    pub height: u32,
    /// True value of the root
    pub value: i64,
    /// Maximum perturbation applied to internal node values
    pub inaccuracy: u32,
    /// Maximum amount a non-lucky child may be worse than the lucky one
    pub spread: u32,
}

/// Build a tree of `params.height` plies with `params.branching` children per
/// internal node, drawing all randomness from `rng`.
pub fn generate_tree<R: Rng>(params: &TreeParams, rng: &mut R) -> Node {
    let root = build(params, params.height, clamp(params.value), rng);
    log::debug!(
        "generated tree b={} h={}: {} nodes, {} leaves",
        params.branching,
        params.height,
        root.node_count(),
        root.leaf_count()
    );
    root
}

fn build<R: Rng>(params: &TreeParams, height: u32, value: i64, rng: &mut R) -> Node {
    if height == 0 {
        return Node::leaf(value);
    }

    let inaccuracy = i64::from(params.inaccuracy);
    let noise = rng.gen_range(-inaccuracy..=inaccuracy);
    let estimated = clamp(value.saturating_add(noise));

    let branching = params.branching as usize;
    let mut children = Vec::with_capacity(branching);
    if branching > 0 {
        let lucky = rng.gen_range(0..branching);
        for j in 0..branching {
            let child_value = if j == lucky {
                -value
            } else {
                let worse = i64::from(rng.gen_range(0..=params.spread));
                clamp((-value).saturating_add(worse))
            };
            children.push(build(params, height - 1, child_value, rng));
        }
    }

    Node::with_children(estimated, children)
}

#[inline]
fn clamp(value: i64) -> i64 {
    value.clamp(-VALUE_LIMIT, VALUE_LIMIT)
}
