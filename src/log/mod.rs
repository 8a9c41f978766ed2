//! Event log reconciliation: JSONL records -> final graph snapshot.

pub mod parse;
pub mod record;

pub use parse::{parse_log_file, reconcile};
pub use record::{EventKind, Reconciliation, SkipReason, SkippedRecord, Snapshot};
