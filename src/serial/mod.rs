//! Markup serialization and persistence.
//!
//! This module serializes a [`Tree`](crate::tree::Tree) into its textual
//! markup form and writes the result to disk. The layout is fixed — one
//! deterministic rendering per tree, with no formatting options.

pub mod xml;

pub use xml::{save, serialize, serialize_node};
