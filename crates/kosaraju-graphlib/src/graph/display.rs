//! Plain-text rendering of vertices and graphs.

use super::{DiGraph, Vertex};
use std::fmt;

impl<N> fmt::Display for Vertex<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// One line per vertex in ascending label order: `label -> head, head`.
impl<N> fmt::Display for DiGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.vertices() {
            write!(f, "{} ->", self.label(v))?;
            for (i, w) in self.successors(v).enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{sep}{}", self.label(w))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
