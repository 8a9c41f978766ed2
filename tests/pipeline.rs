use pretty_assertions::assert_eq;
use reasoning_graph::graph::compute_levels;
use reasoning_graph::log::{EventKind, parse_log_file, reconcile};
use reasoning_graph::model::{PresentationOptions, VisualCategory, build_presentation};
use std::io::Write;

const MERGE: &str = r#"{"event":"GraphMergeEvent","data":{"graph":{"nodes":{"n1":{"id":"n1","conclusion":"A","justification":"j","premises":[],"references":[],"is_refutation":false}},"references":{}}}}"#;

const FINISH: &str = r#"{"event":"SystemFinishEvent","data":{"graph":{"nodes":{"n1":{"id":"n1","conclusion":"A","justification":"j","premises":[],"references":[],"is_refutation":false},"n2":{"id":"n2","conclusion":"B","justification":"j2","premises":["n1"],"references":[],"is_refutation":false}},"references":{}}}}"#;

#[test]
fn merge_then_finish_end_to_end() {
    let log = format!("{}\n{}\n", MERGE, FINISH);
    let reconciled = reconcile(log.as_bytes()).unwrap();
    assert_eq!(reconciled.snapshot.as_ref().unwrap().kind, EventKind::SystemFinish);

    let graph = reconciled.into_graph().unwrap();
    assert_eq!(graph.node_count(), 2);

    let levels = compute_levels(&graph);
    let pairs: Vec<(&str, usize)> = levels.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(pairs, vec![("n1", 0), ("n2", 1)]);

    let p = build_presentation(&graph, &levels, &PresentationOptions::default());
    let edges: Vec<(&str, &str)> = p
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    assert_eq!(edges, vec![("n1", "n2")]);

    assert_eq!(p.nodes[0].label, "n1\nA");
    assert_eq!(p.nodes[0].category, VisualCategory::Root);
    assert_eq!(p.nodes[1].category, VisualCategory::Normal);
    assert_eq!(p.nodes[1].level, 1);
}

#[test]
fn reads_log_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{}", MERGE).unwrap();
    writeln!(file, "garbage line").unwrap();
    writeln!(file).unwrap();
    file.flush().unwrap();

    let reconciled = parse_log_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(reconciled.skipped.len(), 1);
    assert_eq!(reconciled.skipped[0].line, 2);

    let snapshot = reconciled.snapshot.unwrap();
    assert_eq!(snapshot.kind, EventKind::GraphMerge);
    assert_eq!(snapshot.graph.node_count(), 1);
}

#[test]
fn presentation_serializes_for_renderer() {
    let graph = reconcile(FINISH.as_bytes()).unwrap().into_graph().unwrap();
    let levels = compute_levels(&graph);
    let p = build_presentation(&graph, &levels, &PresentationOptions::default());

    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["stats"]["nodes"], 2);
    assert_eq!(json["stats"]["roots"], 1);
    assert_eq!(json["nodes"][0]["category"], "root");
    assert_eq!(json["edges"][0]["from"], "n1");
    assert_eq!(json["edges"][0]["to"], "n2");
}
