//! Reasoning graph viewer core.
//!
//! Pipeline: event log -> [`log::reconcile`] -> [`graph::Graph`] ->
//! {[`graph::compute_levels`], [`model::build_presentation`]} -> external renderer.
//!
//! Nothing here draws anything. The presentation records carry labels,
//! tooltips, sizes and levels; styling is up to the consumer.

pub mod diagnostics;
pub mod graph;
pub mod log;
pub mod model;
pub mod title;

pub type Result<T> = anyhow::Result<T>;
