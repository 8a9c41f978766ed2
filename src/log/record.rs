use crate::graph::Graph;
use serde::Serialize;
use std::fmt;

/// Event tags that carry a graph. Everything else in the log is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventKind {
    /// Terminal full snapshot; wins outright and ends the scan.
    SystemFinish,
    /// Incremental merge; the latest one wins unless a terminal event follows.
    GraphMerge,
}

impl EventKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "SystemFinishEvent" => Some(Self::SystemFinish),
            "GraphMergeEvent" => Some(Self::GraphMerge),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::SystemFinish => "SystemFinishEvent",
            Self::GraphMerge => "GraphMergeEvent",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::SystemFinish)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Why a log line was skipped.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("{kind} has a `data` field that is not an object")]
    DataNotAnObject { kind: EventKind },

    #[error("{kind} has a `graph` payload that is not an object")]
    GraphNotAnObject { kind: EventKind },

    #[error("{kind} carries a malformed graph: {source}")]
    BadGraph {
        kind: EventKind,
        source: serde_json::Error,
    },
}

/// A recoverable problem with one log line.
#[derive(Debug)]
pub struct SkippedRecord {
    /// 1-based line number.
    pub line: usize,
    pub reason: SkipReason,
}

/// The graph accepted from the log, and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub graph: Graph,
    pub kind: EventKind,
    pub line: usize,
}

/// Outcome of a full log scan. `snapshot` is `None` when no usable event was found.
#[derive(Debug, Default)]
pub struct Reconciliation {
    pub snapshot: Option<Snapshot>,
    pub skipped: Vec<SkippedRecord>,
}

impl Reconciliation {
    pub fn graph(&self) -> Option<&Graph> {
        self.snapshot.as_ref().map(|s| &s.graph)
    }

    pub fn into_graph(self) -> Option<Graph> {
        self.snapshot.map(|s| s.graph)
    }
}
