//! Arena entries for [`DiGraph`](super::DiGraph).

use std::fmt;

/// Caller-visible vertex identity. Unique within a graph.
pub type Label = i32;

/// Index of a vertex in its graph's vertex arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v#{}", self.0)
    }
}

/// Index of an edge in its graph's edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Vertex<N> {
    pub(in crate::graph) label: Label,
    pub(in crate::graph) payload: N,
    // This vertex is the tail.
    pub(in crate::graph) outgoing: Vec<EdgeId>,
    // This vertex is the head.
    pub(in crate::graph) incoming: Vec<EdgeId>,
}

impl<N> Vertex<N> {
    pub(in crate::graph) fn new(label: Label, payload: N) -> Self {
        Self {
            label,
            payload,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn payload(&self) -> &N {
        &self.payload
    }

    pub fn outgoing_edges(&self) -> &[EdgeId] {
        &self.outgoing
    }

    pub fn incoming_edges(&self) -> &[EdgeId] {
        &self.incoming
    }

    /// Incident edges of a directed vertex are its outgoing edges.
    pub fn edges(&self) -> &[EdgeId] {
        self.outgoing_edges()
    }

    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }
}

/// A directed edge between two vertices of the same graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub(in crate::graph) tail: VertexId,
    pub(in crate::graph) head: VertexId,
}

impl Edge {
    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn first(&self) -> VertexId {
        self.tail
    }

    pub fn second(&self) -> VertexId {
        self.head
    }

    pub fn is_self_loop(&self) -> bool {
        self.tail == self.head
    }

    /// Whether both `a` and `b` are endpoints of this edge, in either order.
    pub fn contains(&self, a: VertexId, b: VertexId) -> bool {
        let ends = [self.tail, self.head];
        ends.contains(&a) && ends.contains(&b)
    }

    /// Returns the endpoint opposite `v`, or `None` if `v` is not an endpoint.
    ///
    /// For a self-loop the opposite of its only vertex is the vertex itself.
    pub fn opposite(&self, v: VertexId) -> Option<VertexId> {
        if v == self.tail {
            Some(self.head)
        } else if v == self.head {
            Some(self.tail)
        } else {
            None
        }
    }
}
