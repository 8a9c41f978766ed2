//! Layout depth for every node.
//!
//! level(n) = 0 if n has no premise present in the graph,
//! otherwise 1 + max(level(p)) over the present premises.
//!
//! The premise relation should be acyclic but is not trusted to be. We walk it
//! with an explicit stack and mark nodes in progress; a premise requested again
//! while still in progress contributes level 0, which breaks the cycle.

use crate::graph::{Graph, Node};
use std::collections::{BTreeMap, HashMap};

/// Node id -> depth. Covers every node in the graph.
pub type LevelMap = BTreeMap<String, usize>;

#[derive(Copy, Clone, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done(usize),
}

struct Frame<'a> {
    id: &'a str,
    node: &'a Node,
    next: usize,
    deepest: Option<usize>,
}

impl<'a> Frame<'a> {
    fn new(id: &'a str, node: &'a Node) -> Self {
        Self {
            id,
            node,
            next: 0,
            deepest: None,
        }
    }

    fn absorb(&mut self, premise_level: usize) {
        self.deepest = Some(self.deepest.map_or(premise_level, |d| d.max(premise_level)));
    }
}

/// Compute the level of every node. Nodes are visited in id order, so the
/// result is deterministic even when cycles are broken.
pub fn compute_levels(graph: &Graph) -> LevelMap {
    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut stack: Vec<Frame<'_>> = Vec::new();

    for (id, node) in graph.nodes() {
        if marks.contains_key(id.as_str()) {
            continue;
        }
        marks.insert(id.as_str(), Mark::InProgress);
        stack.push(Frame::new(id.as_str(), node));

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let Some(premise_id) = node.premises.get(frame.next) else {
                // All premises seen: settle this node and hand its level up.
                let level = frame.deepest.map_or(0, |d| d + 1);
                let settled = frame.id;
                stack.pop();
                marks.insert(settled, Mark::Done(level));
                if let Some(parent) = stack.last_mut() {
                    parent.absorb(level);
                }
                continue;
            };
            frame.next += 1;

            let Some(premise) = graph.node(premise_id) else {
                continue;
            };

            match marks.get(premise_id.as_str()).copied() {
                Some(Mark::Done(level)) => frame.absorb(level),
                Some(Mark::InProgress) => {
                    tracing::debug!(
                        "premise cycle: {} -> {}, counting {} as level 0",
                        frame.id,
                        premise_id,
                        premise_id
                    );
                    frame.absorb(0);
                }
                None => {
                    marks.insert(premise_id.as_str(), Mark::InProgress);
                    stack.push(Frame::new(premise_id.as_str(), premise));
                }
            }
        }
    }

    marks
        .into_iter()
        .filter_map(|(id, mark)| match mark {
            Mark::Done(level) => Some((id.to_string(), level)),
            Mark::InProgress => None,
        })
        .collect()
}
