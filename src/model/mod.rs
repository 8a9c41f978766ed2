//! Presentation model: combine the reconciled graph with its levels into
//! node/edge records for an external renderer.

use crate::graph::{Graph, LevelMap, Node, Reference};
use crate::title::{TitleBounds, smart_title};
use serde::Serialize;

/// Knobs for building presentation records.
#[derive(Debug, Clone, Serialize)]
pub struct PresentationOptions {
    pub label: TitleBounds,
    pub tooltip: TitleBounds,
    pub reference_statement: TitleBounds,
    pub base_size: u32,
    pub size_per_reference: u32,
    pub reference_id_chars: usize,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            label: TitleBounds::new(8, 2),
            tooltip: TitleBounds::new(12, 8),
            reference_statement: TitleBounds::new(10, 1),
            base_size: 25,
            size_per_reference: 100,
            reference_id_chars: 8,
        }
    }
}

/// How the renderer should style a node. Refutation dominates root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualCategory {
    Root,
    Refutation,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    pub id: String,
    pub label: String,
    pub tooltip: String,
    pub category: VisualCategory,
    pub size: u32,
    pub level: usize,
}

/// Directed premise -> conclusion edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub references: usize,
    pub roots: usize,
    pub refutations: usize,
    pub edges: usize,
    pub dangling_premises: usize,
    pub max_level: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Presentation {
    pub stats: GraphStats,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

/// Build node and edge records, in node id order.
///
/// Premises or references missing from the graph are left out silently.
pub fn build_presentation(
    graph: &Graph,
    levels: &LevelMap,
    opts: &PresentationOptions,
) -> Presentation {
    let nodes: Vec<NodeView> = graph
        .nodes()
        .map(|(id, node)| NodeView {
            id: id.clone(),
            label: format!("{}\n{}", node.id, smart_title(&node.conclusion, opts.label)),
            tooltip: tooltip(graph, node, opts),
            category: category(node),
            size: size_hint(node, opts),
            level: levels.get(id).copied().unwrap_or(0),
        })
        .collect();

    let edges = build_edges(graph);

    Presentation {
        stats: graph_stats(graph, levels, edges.len()),
        nodes,
        edges,
    }
}

pub fn build_edges(graph: &Graph) -> Vec<EdgeView> {
    let mut edges = Vec::new();
    for (id, node) in graph.nodes() {
        for premise in &node.premises {
            if graph.contains_node(premise) {
                edges.push(EdgeView {
                    from: premise.clone(),
                    to: id.clone(),
                });
            }
        }
    }
    edges
}

pub fn category(node: &Node) -> VisualCategory {
    if node.is_refutation {
        VisualCategory::Refutation
    } else if node.is_root() {
        VisualCategory::Root
    } else {
        VisualCategory::Normal
    }
}

fn size_hint(node: &Node, opts: &PresentationOptions) -> u32 {
    let refs = u32::try_from(node.references.len()).unwrap_or(u32::MAX);
    opts.base_size.saturating_add(refs.saturating_mul(opts.size_per_reference))
}

fn tooltip(graph: &Graph, node: &Node, opts: &PresentationOptions) -> String {
    let mut out = format!(
        "ID: {}\n\nConclusion: {}\n\nJustification: {}",
        node.id,
        smart_title(&node.conclusion, opts.tooltip),
        smart_title(&node.justification, opts.tooltip),
    );

    if !node.references.is_empty() {
        out.push_str(&format!(
            "\n\n--- References ({}) ---",
            node.references.len()
        ));
        for reference in node.references.iter().filter_map(|r| graph.reference(r)) {
            out.push_str("\n\n");
            out.push_str(&reference_summary(reference, opts));
        }
    }

    if node.is_refutation {
        out.push_str("\n\n[REFUTATION]");
    }

    out
}

/// `[short-id] Title (by A and B)` followed by a one-line statement excerpt.
fn reference_summary(reference: &Reference, opts: &PresentationOptions) -> String {
    let short_id: String = reference.id.chars().take(opts.reference_id_chars).collect();
    let mut out = format!("[{}] {}", short_id, reference.source_citation.title);
    if let Some(authors) = compact_authors(&reference.source_citation.authors) {
        out.push_str(&format!(" (by {})", authors));
    }
    out.push('\n');
    out.push_str(&smart_title(&reference.statement, opts.reference_statement));
    out
}

/// "A", "A and B", or "A, B, et al."; `None` without authors.
pub fn compact_authors(authors: &[String]) -> Option<String> {
    match authors {
        [] => None,
        [only] => Some(only.clone()),
        [first, second] => Some(format!("{} and {}", first, second)),
        [first, second, ..] => Some(format!("{}, {}, et al.", first, second)),
    }
}

pub fn graph_stats(graph: &Graph, levels: &LevelMap, edges: usize) -> GraphStats {
    let mut stats = GraphStats {
        nodes: graph.node_count(),
        references: graph.reference_count(),
        roots: 0,
        refutations: 0,
        edges,
        dangling_premises: 0,
        max_level: levels.values().copied().max().unwrap_or(0),
    };
    for (_, node) in graph.nodes() {
        if node.is_root() {
            stats.roots += 1;
        }
        if node.is_refutation {
            stats.refutations += 1;
        }
        stats.dangling_premises += node
            .premises
            .iter()
            .filter(|p| !graph.contains_node(p))
            .count();
    }
    stats
}
