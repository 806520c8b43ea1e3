//! Depth sweep: build one tree and search it at every depth, with and without
//! quiescence, reporting each run.

use rand::Rng;

use crate::config::SearchConfig;
use crate::search::log::section_title;
use crate::search::{search, SearchLogger};
use crate::tree::generate_tree;

/// Outcome of one search in the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepRow {
    pub depth: u32,
    pub use_quiescence: bool,
    pub value: i64,
    pub static_evaluations: u64,
}

#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    pub rows: Vec<SweepRow>,
}

impl SweepReport {
    pub fn plain(&self) -> impl Iterator<Item = &SweepRow> {
        self.rows.iter().filter(|r| !r.use_quiescence)
    }

    pub fn quiescence(&self) -> impl Iterator<Item = &SweepRow> {
        self.rows.iter().filter(|r| r.use_quiescence)
    }
}

/// Generate a tree from `config` and search it at depths `0..=height`.
pub fn run_sweep<R: Rng>(
    config: &SearchConfig,
    rng: &mut R,
    logger: &dyn SearchLogger,
) -> SweepReport {
    let tracing = config.tracing();
    if config.debug && !tracing {
        log::info!(
            "tree b={} h={} is too large to trace, debug output disabled",
            config.branching,
            config.height
        );
    }

    logger.emit(&section_title("TOP NODE VALUES"));
    for line in config.describe() {
        logger.emit(&line);
    }
    for notice in &config.notices {
        logger.emit(&format!("note: {notice}"));
    }

    let root = generate_tree(&config.tree_params(), rng);

    if tracing {
        logger.emit(&section_title("JSON REPRESENTATION OF THE TREE"));
        match root.to_json() {
            Ok(json) => logger.emit(&json),
            Err(e) => {
                log::warn!("could not serialize tree: {e}");
                logger.emit(&format!("(tree not available: {e})"));
            }
        }
    }

    let mut report = SweepReport::default();
    for depth in 0..=config.height {
        for use_quiescence in [false, true] {
            let mut outcome = search(&root, depth, use_quiescence, tracing);
            let title = if use_quiescence {
                format!("A-B with Null Move Quiescence (depth = {depth})")
            } else {
                format!("Simple Alpha-Beta (depth = {depth})")
            };
            logger.emit(&outcome.trace.render_report(
                &title,
                outcome.value,
                outcome.static_evaluations,
            ));
            report.rows.push(SweepRow {
                depth,
                use_quiescence,
                value: outcome.value,
                static_evaluations: outcome.static_evaluations,
            });
        }
    }

    logger.emit(&section_title("DONE"));
    report
}
