#![forbid(unsafe_code)]

//! Strongly connected components of a directed graph.
//!
//! The graph container lives in [`graphlib`]. This crate adds a direction-agnostic iterative
//! depth-first search ([`traversal`]), the two-pass Kosaraju driver ([`scc`]), and a few
//! helpers built on the same search.

pub use kosaraju_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod alg;
pub mod condensation;
pub mod scc;
pub mod traversal;

pub use condensation::condensation;
pub use scc::{
    Component, Kosaraju, Phase, RootOrder, SccOptions, SccResult, strongly_connected_components,
};
pub use traversal::{Direction, SearchState, depth_first};
