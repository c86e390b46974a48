#![forbid(unsafe_code)]

//! Directed graph container used by `kosaraju`.
//!
//! Vertices and edges live in flat arenas and refer to each other by index, so the graph has
//! no reference cycles. Vertices are keyed by an integer [`Label`] and are created lazily the
//! first time a label is referenced.

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{DiGraph, Edge, EdgeId, GraphBuilder, GraphOptions, Label, Vertex, VertexId};
