//! Search trace recording.
//!
//! Events are stored as structured records and only turned into text when a
//! report is rendered. Alpha-beta events use the remaining height as depth;
//! quiescence events use a counter that starts at 0 and goes negative, so lines
//! are indented relative to the smallest depth seen in the run.

use std::fmt;

use super::log::section_title;
use super::INF;

/// What produced a trace event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    /// Plain static evaluation at the horizon
    Static,
    /// Beta cutoff in alpha-beta
    Cutoff,
    /// Alpha-beta node searched to completion
    Search,
    /// Quiescence bound failed high before all children were searched
    QuiesceCutoff,
    /// Quiescence node searched to completion
    Quiesce,
}

impl TraceKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TraceKind::Static => "Static (regular)",
            TraceKind::Cutoff | TraceKind::Search => "Search",
            TraceKind::QuiesceCutoff | TraceKind::Quiesce => "Static (NMQuiesce)",
        }
    }

    #[inline]
    #[must_use]
    pub fn is_quiescence(self) -> bool {
        matches!(self, TraceKind::QuiesceCutoff | TraceKind::Quiesce)
    }
}

/// One recorded search event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent {
    pub kind: TraceKind,
    /// Stored value of the node the event refers to
    pub node_value: i64,
    /// Remaining height for alpha-beta, printing depth for quiescence
    pub depth: i32,
    /// `(alpha, beta)`, `(score, beta)` on a cutoff, `(lower, upper)` in quiescence
    pub window: (i64, i64),
    pub result: i64,
}

/// Score formatter that prints the search bounds as infinity
struct Score(i64);

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            INF => f.write_str("∞"),
            v if v == -INF => f.write_str("-∞"),
            v => write!(f, "{v}"),
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.window;
        if self.kind.is_quiescence() {
            write!(
                f,
                "{{estValue: {}, depth: {}, lower: {}, upper: {}, best: {}, method: \"{}\"}}",
                self.node_value,
                self.depth,
                Score(a),
                Score(b),
                Score(self.result),
                self.kind.label()
            )
        } else {
            write!(
                f,
                "{{estValue: {}, h: {}, ab: ({}, {}), eval: {}, method: \"{}\"}}",
                self.node_value,
                self.depth,
                Score(a),
                Score(b),
                Score(self.result),
                self.kind.label()
            )
        }
    }
}

/// Ordered trace of one top-level search.
///
/// When disabled, [`TraceLog::record`] does nothing.
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    enabled: bool,
    events: Vec<TraceEvent>,
    min_depth: i32,
}

impl TraceLog {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        TraceLog {
            enabled,
            events: Vec::new(),
            min_depth: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.enabled {
            return;
        }
        self.min_depth = self.min_depth.min(event.depth);
        self.events.push(event);
    }

    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Smallest depth recorded since the last drain, never above 0
    #[must_use]
    pub fn min_depth(&self) -> i32 {
        self.min_depth
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Render the recorded events as a titled block ending in a result line,
    /// then clear the log and reset the depth baseline.
    pub fn render_report(&mut self, title: &str, result: i64, static_evaluations: u64) -> String {
        let mut out = section_title(title);
        out.push('\n');
        for event in &self.events {
            let indent = usize::try_from(event.depth - self.min_depth).unwrap_or(0);
            out.push_str(&"\t".repeat(indent));
            out.push_str(&event.to_string());
            out.push('\n');
        }
        if !self.events.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!(
            "-> RESULT: value = {result}, static evaluations = {static_evaluations}"
        ));

        self.events.clear();
        self.min_depth = 0;
        out
    }
}
