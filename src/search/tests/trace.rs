use super::pruning_tree;
use crate::search::{search, TraceEvent, TraceKind, TraceLog, INF};

#[test]
fn test_disabled_log_records_nothing() {
    let outcome = search(&pruning_tree(), 2, true, false);
    assert!(outcome.trace.is_empty());
    assert!(!outcome.trace.is_enabled());
}

#[test]
fn test_event_sequence_with_cutoff() {
    let outcome = search(&pruning_tree(), 2, false, true);
    let kinds: Vec<TraceKind> = outcome.trace.events().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TraceKind::Static,
            TraceKind::Static,
            TraceKind::Search,
            TraceKind::Static,
            TraceKind::Cutoff,
            TraceKind::Search,
        ]
    );

    let cutoff = outcome.trace.events()[4];
    assert_eq!(cutoff.depth, 1);
    assert_eq!(cutoff.window, (-2, -3));
    assert_eq!(cutoff.result, -2);

    let root = outcome.trace.events()[5];
    assert_eq!(root.window, (3, INF));
    assert_eq!(root.result, 3);
}

#[test]
fn test_static_events_match_evaluation_count() {
    let outcome = search(&pruning_tree(), 2, false, true);
    let statics = outcome
        .trace
        .events()
        .iter()
        .filter(|e| e.kind == TraceKind::Static)
        .count();
    assert_eq!(statics as u64, outcome.static_evaluations);
}

#[test]
fn test_line_format_renders_infinity() {
    let event = TraceEvent {
        kind: TraceKind::Static,
        node_value: 3,
        depth: 0,
        window: (-INF, INF),
        result: 3,
    };
    assert_eq!(
        event.to_string(),
        "{estValue: 3, h: 0, ab: (-∞, ∞), eval: 3, method: \"Static (regular)\"}"
    );

    let event = TraceEvent {
        kind: TraceKind::Quiesce,
        node_value: -7,
        depth: -1,
        window: (-INF, 4),
        result: 9,
    };
    assert_eq!(
        event.to_string(),
        "{estValue: -7, depth: -1, lower: -∞, upper: 4, best: 9, method: \"Static (NMQuiesce)\"}"
    );
}

#[test]
fn test_report_indents_relative_to_shallowest_depth() {
    let mut log = TraceLog::new(true);
    for depth in [-2, -1, 0] {
        log.record(TraceEvent {
            kind: TraceKind::Quiesce,
            node_value: 1,
            depth,
            window: (0, 1),
            result: 1,
        });
    }
    let report = log.render_report("Title", 1, 3);
    let lines: Vec<&str> = report.lines().collect();
    assert!(lines.contains(&" Title:"));
    assert!(lines.iter().any(|l| l.starts_with("{estValue") && l.contains("depth: -2")));
    assert!(lines.iter().any(|l| l.starts_with("\t{estValue") && l.contains("depth: -1")));
    assert!(lines.iter().any(|l| l.starts_with("\t\t{estValue") && l.contains("depth: 0")));
    assert_eq!(
        lines.last().copied(),
        Some("-> RESULT: value = 1, static evaluations = 3")
    );
}

#[test]
fn test_report_drains_log() {
    let mut outcome = search(&pruning_tree(), 0, true, true);
    assert!(!outcome.trace.is_empty());
    assert!(outcome.trace.min_depth() < 0);

    let _ = outcome.trace.render_report("run", outcome.value, outcome.static_evaluations);
    assert!(outcome.trace.is_empty());
    assert_eq!(outcome.trace.min_depth(), 0);

    let empty = outcome.trace.render_report("again", 0, 0);
    assert!(!empty.contains("estValue"));
    assert!(empty.ends_with("-> RESULT: value = 0, static evaluations = 0"));
}
