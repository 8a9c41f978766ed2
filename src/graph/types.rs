//! Graph data model.
//!
//! JSON shape (the `graph` payload of a log event):
//! {
//!   "nodes": {
//!     "n2": {
//!       "id": "n2",
//!       "conclusion": "...",
//!       "justification": "...",
//!       "premises": ["n1"],          // may name nodes that do not exist
//!       "references": ["r1"],
//!       "is_refutation": false
//!     }
//!   },
//!   "references": {
//!     "r1": {
//!       "statement": "...",
//!       "source_citation": { "title": "...", "authors": ["..."] },
//!       "context": null
//!     }
//!   }
//! }
//!
//! We deserialize into the raw shapes, then key everything by map id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw graph shape as it appears in the log.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphSpec {
    #[serde(default)]
    pub nodes: BTreeMap<String, RawNode>,

    #[serde(default)]
    pub references: BTreeMap<String, RawReference>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    /// Falls back to the map key when absent.
    #[serde(default)]
    pub id: Option<String>,

    pub conclusion: String,

    pub justification: String,

    #[serde(default)]
    pub premises: Vec<String>,

    #[serde(default)]
    pub references: Vec<String>,

    #[serde(default)]
    pub is_refutation: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawReference {
    pub statement: String,

    pub source_citation: SourceCitation,

    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCitation {
    pub title: String,

    #[serde(default)]
    pub authors: Vec<String>,
}

/// A single reasoning step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub conclusion: String,
    pub justification: String,
    pub premises: Vec<String>,
    pub references: Vec<String>,
    pub is_refutation: bool,
}

impl Node {
    /// Nodes without premises are roots, refutation or not.
    pub fn is_root(&self) -> bool {
        self.premises.is_empty()
    }
}

/// A cited source backing one or more nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub id: String,
    pub statement: String,
    pub source_citation: SourceCitation,
    pub context: Option<String>,
}

/// Reconciled graph snapshot. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    nodes: BTreeMap<String, Node>,
    references: BTreeMap<String, Reference>,
}

impl GraphSpec {
    /// Key nodes and references by their map ids.
    pub fn build(self) -> Graph {
        let nodes = self
            .nodes
            .into_iter()
            .map(|(key, raw)| {
                let node = Node {
                    id: raw.id.unwrap_or_else(|| key.clone()),
                    conclusion: raw.conclusion,
                    justification: raw.justification,
                    premises: raw.premises,
                    references: raw.references,
                    is_refutation: raw.is_refutation,
                };
                (key, node)
            })
            .collect();

        let references = self
            .references
            .into_iter()
            .map(|(key, raw)| {
                let reference = Reference {
                    id: key.clone(),
                    statement: raw.statement,
                    source_citation: raw.source_citation,
                    context: raw.context,
                };
                (key, reference)
            })
            .collect();

        Graph { nodes, references }
    }
}

impl Graph {
    /// Build a graph keyed by each `Node::id` and `Reference::id`.
    ///
    /// [`GraphSpec::build`] keys by the JSON map keys instead, which can differ
    /// from the ids carried inside the records. Later duplicates replace earlier ones.
    pub fn new(
        nodes: impl IntoIterator<Item = Node>,
        references: impl IntoIterator<Item = Reference>,
    ) -> Self {
        Self {
            nodes: nodes.into_iter().map(|n| (n.id.clone(), n)).collect(),
            references: references.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn reference(&self, id: &str) -> Option<&Reference> {
        self.references.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.nodes.iter()
    }

    pub fn references(&self) -> impl Iterator<Item = (&String, &Reference)> {
        self.references.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn reference_count(&self) -> usize {
        self.references.len()
    }

    /// Premises of `node` that resolve to nodes in this graph.
    pub fn existing_premises<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> {
        node.premises.iter().filter_map(|p| self.nodes.get(p))
    }
}
