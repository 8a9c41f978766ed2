//! Graph layer: the reconciled graph model and its layout levels.
//!
//! It owns:
//! - the serde shapes of the `graph` payload and the keyed [`Graph`]
//! - level computation over the premise relation

pub mod levels;
pub mod types;

pub use levels::{LevelMap, compute_levels};
pub use types::{Graph, GraphSpec, Node, Reference, SourceCitation};
