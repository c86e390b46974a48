//! Graph configuration options.

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphOptions {
    /// Keep parallel `(tail, head)` edges as distinct entries. When `false`, adding an edge
    /// that already exists returns the existing edge.
    pub multigraph: bool,
}
