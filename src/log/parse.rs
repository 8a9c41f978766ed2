use crate::Result;
use crate::diagnostics;
use crate::graph::GraphSpec;
use crate::log::record::{EventKind, Reconciliation, SkipReason, SkippedRecord, Snapshot};
use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Reconcile a JSONL event log file into its final graph.
///
/// Expected line shape:
/// {"event": "GraphMergeEvent", "data": {"graph": {...}}}
///
/// Only an unreadable file is an error; bad lines are skipped with a warning.
pub fn parse_log_file(path: &str) -> Result<Reconciliation> {
    let file = File::open(path)
        .with_context(|| diagnostics::error_message(format!("read log file {}", path)))?;
    reconcile(BufReader::new(file))
        .with_context(|| diagnostics::error_message(format!("read log file {}", path)))
}

/// Scan records oldest to newest. Stops reading at the first accepted
/// terminal event; later lines are never consumed.
///
/// Lines are read as raw bytes so one line of bad UTF-8 is skipped like any
/// other malformed record instead of failing the whole read.
pub fn reconcile<R: BufRead>(mut reader: R) -> Result<Reconciliation> {
    let mut state = Reconciler::default();
    let mut buf = Vec::new();
    let mut lno = 0;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("line {}", lno + 1))?;
        if read == 0 {
            break;
        }
        lno += 1;

        let flow = match std::str::from_utf8(&buf) {
            Ok(line) => state.feed(lno, line.trim_end_matches(&['\r', '\n'][..])),
            Err(err) => state.skip(lno, SkipReason::InvalidUtf8(err)),
        };
        if flow == Flow::Stop {
            break;
        }
    }
    Ok(state.finish())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Two-state reducer: the current candidate, and whether a terminal event closed the scan.
#[derive(Default)]
struct Reconciler {
    out: Reconciliation,
    done: bool,
}

impl Reconciler {
    fn feed(&mut self, lno: usize, line: &str) -> Flow {
        if self.done {
            return Flow::Stop;
        }
        if line.trim().is_empty() {
            return Flow::Continue;
        }

        match read_record(line) {
            Ok(None) => Flow::Continue,
            Ok(Some((kind, spec))) => {
                tracing::debug!(
                    "line {}: accepted {} with {} nodes",
                    lno,
                    kind,
                    spec.nodes.len()
                );
                self.out.snapshot = Some(Snapshot {
                    graph: spec.build(),
                    kind,
                    line: lno,
                });
                if kind.is_terminal() {
                    self.done = true;
                    Flow::Stop
                } else {
                    Flow::Continue
                }
            }
            Err(reason) => self.skip(lno, reason),
        }
    }

    fn skip(&mut self, lno: usize, reason: SkipReason) -> Flow {
        diagnostics::warn(format!("skipping malformed line {}: {}", lno, reason));
        self.out.skipped.push(SkippedRecord { line: lno, reason });
        Flow::Continue
    }

    fn finish(self) -> Reconciliation {
        self.out
    }
}

/// Decode one line. `Ok(None)` means the line carries no graph we care about.
fn read_record(line: &str) -> std::result::Result<Option<(EventKind, GraphSpec)>, SkipReason> {
    let record: Value = serde_json::from_str(line)?;
    let Some(fields) = record.as_object() else {
        return Err(SkipReason::NotAnObject);
    };

    let Some(kind) = fields
        .get("event")
        .and_then(Value::as_str)
        .and_then(EventKind::from_tag)
    else {
        return Ok(None);
    };

    let data = match fields.get("data") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Object(data)) => data,
        Some(_) => return Err(SkipReason::DataNotAnObject { kind }),
    };

    // Only a non-empty object counts as an embedded graph.
    let graph = match data.get("graph") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Object(m)) if m.is_empty() => return Ok(None),
        Some(Value::Array(a)) if a.is_empty() => return Ok(None),
        Some(g) if g.is_object() => g,
        Some(_) => return Err(SkipReason::GraphNotAnObject { kind }),
    };

    let spec = GraphSpec::deserialize(graph)
        .map_err(|source| SkipReason::BadGraph { kind, source })?;
    Ok(Some((kind, spec)))
}
