//! Directed graph container.
//!
//! Vertices and edges are stored in flat arenas. Adjacency is kept per vertex as two edge
//! index lists (`outgoing` / `incoming`), so both the graph and its transpose can be walked
//! without building a second structure.

use rustc_hash::FxBuildHasher;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

mod display;
mod entries;
mod options;

pub use entries::{Edge, EdgeId, Label, Vertex, VertexId};
pub use options::GraphOptions;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

type VertexFactory<N> = Box<dyn Fn(Label) -> N + Send + Sync>;

pub struct DiGraph<N = ()> {
    options: GraphOptions,
    vertex_factory: VertexFactory<N>,

    vertices: Vec<Vertex<N>>,
    // Ordered by label; drives ascending/descending iteration.
    label_index: BTreeMap<Label, VertexId>,

    edges: Vec<Edge>,
    // First edge for each `(tail, head)` pair. Only consulted when `multigraph` is off.
    edge_index: HashMap<(VertexId, VertexId), EdgeId>,
}

impl<N> Default for DiGraph<N>
where
    N: Default + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for DiGraph<N>
where
    N: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiGraph")
            .field("options", &self.options)
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish_non_exhaustive()
    }
}

impl<N> DiGraph<N>
where
    N: Default + 'static,
{
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    pub fn with_options(options: GraphOptions) -> Self {
        Self::from_parts(options, Box::new(|_| N::default()))
    }
}

impl<N> DiGraph<N> {
    fn from_parts(options: GraphOptions, vertex_factory: VertexFactory<N>) -> Self {
        Self {
            options,
            vertex_factory,
            vertices: Vec::new(),
            label_index: BTreeMap::new(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
        }
    }

    pub fn with_vertex_factory<F>(options: GraphOptions, f: F) -> Self
    where
        F: Fn(Label) -> N + Send + Sync + 'static,
    {
        Self::from_parts(options, Box::new(f))
    }

    pub fn builder() -> GraphBuilder<N> {
        GraphBuilder::new()
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_multigraph(&self) -> bool {
        self.options.multigraph
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn has_vertex(&self, label: Label) -> bool {
        self.label_index.contains_key(&label)
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v.0 < self.vertices.len()
    }

    pub fn vertex_id(&self, label: Label) -> Option<VertexId> {
        self.label_index.get(&label).copied()
    }

    pub fn vertex(&self, v: VertexId) -> Option<&Vertex<N>> {
        self.vertices.get(v.0)
    }

    pub fn vertex_by_label(&self, label: Label) -> Option<&Vertex<N>> {
        let v = self.vertex_id(label)?;
        self.vertex(v)
    }

    pub fn payload_mut(&mut self, v: VertexId) -> Option<&mut N> {
        self.vertices.get_mut(v.0).map(|vertex| &mut vertex.payload)
    }

    /// Label of `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` was not issued by this graph.
    pub fn label(&self, v: VertexId) -> Label {
        self.vertices[v.0].label
    }

    /// Returns the vertex for `label`, creating it through the vertex factory on first use.
    pub fn get_or_create_vertex(&mut self, label: Label) -> VertexId {
        if let Some(&v) = self.label_index.get(&label) {
            return v;
        }
        let v = VertexId(self.vertices.len());
        let payload = (self.vertex_factory)(label);
        self.vertices.push(Vertex::new(label, payload));
        self.label_index.insert(label, v);
        tracing::trace!(label, index = v.0, "created vertex");
        v
    }

    /// Vertices in ascending label order.
    pub fn vertices(&self) -> impl DoubleEndedIterator<Item = VertexId> + '_ {
        self.label_index.values().copied()
    }

    /// Vertices in descending label order.
    pub fn vertices_descending(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices().rev()
    }

    pub fn labels(&self) -> impl DoubleEndedIterator<Item = Label> + '_ {
        self.label_index.keys().copied()
    }

    pub fn edge(&self, e: EdgeId) -> Option<&Edge> {
        self.edges.get(e.0)
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    fn require_vertex(&self, v: VertexId) -> Result<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(Error::MissingEndpoint { vertex: v })
        }
    }

    fn require_edge(&self, e: EdgeId) -> Result<&Edge> {
        self.edges.get(e.0).ok_or(Error::UnknownEdge { edge: e })
    }

    /// Adds the edge `tail -> head` and registers it with both endpoints.
    pub fn add_edge(&mut self, tail: VertexId, head: VertexId) -> Result<EdgeId> {
        self.require_vertex(tail)?;
        self.require_vertex(head)?;
        Ok(self.push_edge(tail, head))
    }

    /// Adds `tail -> head`, creating either endpoint if it does not exist yet.
    pub fn add_edge_between(&mut self, tail: Label, head: Label) -> EdgeId {
        let tail = self.get_or_create_vertex(tail);
        let head = self.get_or_create_vertex(head);
        self.push_edge(tail, head)
    }

    fn push_edge(&mut self, tail: VertexId, head: VertexId) -> EdgeId {
        if !self.options.multigraph {
            if let Some(&e) = self.edge_index.get(&(tail, head)) {
                return e;
            }
        }

        let e = EdgeId(self.edges.len());
        self.edges.push(Edge { tail, head });
        self.vertices[tail.0].outgoing.push(e);
        self.vertices[head.0].incoming.push(e);
        self.edge_index.entry((tail, head)).or_insert(e);
        e
    }

    pub fn set_path(&mut self, labels: &[Label]) -> &mut Self {
        if labels.len() < 2 {
            return self;
        }
        for pair in labels.windows(2) {
            self.add_edge_between(pair[0], pair[1]);
        }
        self
    }

    /// First outgoing edge of `from` whose head is `to`.
    pub fn edge_to(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        let vertex = self.vertex(from)?;
        vertex
            .outgoing
            .iter()
            .copied()
            .find(|&e| self.edges[e.0].head == to)
    }

    pub fn has_edge(&self, tail: Label, head: Label) -> bool {
        match (self.vertex_id(tail), self.vertex_id(head)) {
            (Some(t), Some(h)) => self.edge_to(t, h).is_some(),
            _ => false,
        }
    }

    /// The endpoint of `e` opposite `v`.
    pub fn opposite(&self, e: EdgeId, v: VertexId) -> Result<VertexId> {
        self.require_edge(e)?
            .opposite(v)
            .ok_or(Error::NotAnEndpoint { edge: e, vertex: v })
    }

    /// Rewires one endpoint of `e` from `old` to `new`.
    ///
    /// The replaced position keeps its role: replacing the tail yields a new tail. On a
    /// self-loop only the tail is replaced.
    pub fn replace_endpoint(&mut self, e: EdgeId, old: VertexId, new: VertexId) -> Result<()> {
        let edge = *self.require_edge(e)?;
        self.require_vertex(new)?;

        let replaced = if edge.tail == old {
            Edge {
                tail: new,
                head: edge.head,
            }
        } else if edge.head == old {
            Edge {
                tail: edge.tail,
                head: new,
            }
        } else {
            return Err(Error::NotAnEndpoint {
                edge: e,
                vertex: old,
            });
        };

        if replaced.tail != edge.tail {
            self.vertices[edge.tail.0].outgoing.retain(|&x| x != e);
            self.vertices[replaced.tail.0].outgoing.push(e);
        }
        if replaced.head != edge.head {
            self.vertices[edge.head.0].incoming.retain(|&x| x != e);
            self.vertices[replaced.head.0].incoming.push(e);
        }

        let old_key = (edge.tail, edge.head);
        if self.edge_index.get(&old_key) == Some(&e) {
            self.edge_index.remove(&old_key);
            // Another parallel edge may still carry the old key.
            if let Some(other) = self.edges.iter().enumerate().find_map(|(i, x)| {
                (i != e.0 && x.tail == edge.tail && x.head == edge.head).then_some(EdgeId(i))
            }) {
                self.edge_index.insert(old_key, other);
            }
        }
        self.edges[e.0] = replaced;
        self.edge_index
            .entry((replaced.tail, replaced.head))
            .or_insert(e);
        Ok(())
    }

    pub fn successors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .get(v.0)
            .map(|vertex| vertex.outgoing.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&e| self.edges[e.0].head)
    }

    pub fn predecessors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .get(v.0)
            .map(|vertex| vertex.incoming.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&e| self.edges[e.0].tail)
    }
}

pub struct GraphBuilder<N> {
    options: GraphOptions,
    vertex_factory: Option<VertexFactory<N>>,
}

impl<N> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> GraphBuilder<N> {
    pub fn new() -> Self {
        Self {
            options: GraphOptions::default(),
            vertex_factory: None,
        }
    }

    pub fn options(mut self, options: GraphOptions) -> Self {
        self.options = options;
        self
    }

    pub fn multigraph(mut self, multigraph: bool) -> Self {
        self.options.multigraph = multigraph;
        self
    }

    pub fn vertex_factory<F>(mut self, f: F) -> Self
    where
        F: Fn(Label) -> N + Send + Sync + 'static,
    {
        self.vertex_factory = Some(Box::new(f));
        self
    }

    pub fn build(self) -> Result<DiGraph<N>> {
        let factory = self.vertex_factory.ok_or(Error::MissingVertexFactory)?;
        Ok(DiGraph::from_parts(self.options, factory))
    }
}
