//! Direction-agnostic iterative depth-first search.
//!
//! One search routine serves both the graph and its transpose: [`Direction`] decides which
//! adjacency list of a vertex is followed and which endpoint of an edge is visited next.
//! Per-run marks live in [`SearchState`], never on the graph.

use crate::graphlib::{DiGraph, Edge, EdgeId, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Follow outgoing edges to their heads.
    #[default]
    Forward,
    /// Follow incoming edges to their tails, i.e. walk the transpose graph.
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Edges explored from `v`. Empty for a vertex the graph does not know.
    pub fn edges_of<N>(self, graph: &DiGraph<N>, v: VertexId) -> &[EdgeId] {
        let Some(vertex) = graph.vertex(v) else {
            return &[];
        };
        match self {
            Direction::Forward => vertex.outgoing_edges(),
            Direction::Backward => vertex.incoming_edges(),
        }
    }

    /// The vertex reached by crossing `edge`.
    pub fn next(self, edge: &Edge) -> VertexId {
        match self {
            Direction::Forward => edge.head(),
            Direction::Backward => edge.tail(),
        }
    }
}

/// Per-run scratch state indexed by vertex index: a visited mark and a finish index.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    visited: Vec<bool>,
    finish: Vec<Option<usize>>,
    next_finish: usize,
}

impl SearchState {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            finish: vec![None; vertex_count],
            next_finish: 0,
        }
    }

    pub fn for_graph<N>(graph: &DiGraph<N>) -> Self {
        Self::new(graph.vertex_count())
    }

    fn fit(&mut self, vertex_count: usize) {
        if self.visited.len() < vertex_count {
            self.visited.resize(vertex_count, false);
            self.finish.resize(vertex_count, None);
        }
    }

    pub fn is_visited(&self, v: VertexId) -> bool {
        self.visited.get(v.index()).copied().unwrap_or(false)
    }

    /// Marks `v` visited. Returns `false` if it already was.
    pub fn mark_visited(&mut self, v: VertexId) -> bool {
        self.fit(v.index() + 1);
        !std::mem::replace(&mut self.visited[v.index()], true)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&b| b).count()
    }

    pub fn finish_index(&self, v: VertexId) -> Option<usize> {
        self.finish.get(v.index()).copied().flatten()
    }

    /// Stamps `v` with the next finish index and returns it.
    pub fn record_finish(&mut self, v: VertexId) -> usize {
        self.fit(v.index() + 1);
        let idx = self.next_finish;
        self.finish[v.index()] = Some(idx);
        self.next_finish += 1;
        idx
    }

    /// Clears visited marks and keeps finish indices.
    pub fn clear_visited(&mut self) {
        self.visited.fill(false);
    }

    /// Clears visited marks and finish indices.
    pub fn reset(&mut self) {
        self.visited.fill(false);
        self.finish.fill(None);
        self.next_finish = 0;
    }
}

/// Depth-first search from `root` along `direction`.
///
/// Unvisited vertices are marked and reported to `on_discover` when first reached, and to
/// `on_finish` once every edge leaving them in `direction` has been explored. Already
/// visited vertices (including `root`) are not entered again, so self-loops and cycles
/// terminate. The search keeps its frames on a heap stack, so path depth is bounded only
/// by memory.
pub fn depth_first<N, D, F>(
    graph: &DiGraph<N>,
    root: VertexId,
    direction: Direction,
    state: &mut SearchState,
    mut on_discover: D,
    mut on_finish: F,
) where
    D: FnMut(VertexId),
    F: FnMut(&mut SearchState, VertexId),
{
    if !graph.contains_vertex(root) || !state.mark_visited(root) {
        return;
    }
    state.fit(graph.vertex_count());
    on_discover(root);

    // (vertex, index of the next edge to explore)
    let mut stack: Vec<(VertexId, usize)> = vec![(root, 0)];
    while let Some(frame) = stack.last_mut() {
        let (v, cursor) = *frame;
        let edges = direction.edges_of(graph, v);
        if let Some(&e) = edges.get(cursor) {
            frame.1 += 1;
            let Some(edge) = graph.edge(e) else {
                continue;
            };
            let w = direction.next(edge);
            if state.mark_visited(w) {
                on_discover(w);
                stack.push((w, 0));
            }
            continue;
        }
        stack.pop();
        on_finish(state, v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_finish_hands_out_increasing_indices() {
        let mut g: DiGraph = DiGraph::new();
        let a = g.get_or_create_vertex(0);
        let b = g.get_or_create_vertex(1);
        let c = g.get_or_create_vertex(2);

        let mut state = SearchState::for_graph(&g);
        assert_eq!(state.record_finish(c), 0);
        assert_eq!(state.record_finish(a), 1);
        assert_eq!(state.finish_index(c), Some(0));
        assert_eq!(state.finish_index(b), None);
    }

    #[test]
    fn clear_visited_keeps_finish_indices() {
        let mut g: DiGraph = DiGraph::new();
        g.set_path(&[1, 2, 3]);
        let mut state = SearchState::for_graph(&g);
        let root = g.vertex_id(1).unwrap();
        depth_first(&g, root, Direction::Forward, &mut state, |_| {}, |s, v| {
            s.record_finish(v);
        });
        assert_eq!(state.visited_count(), 3);

        state.clear_visited();
        assert_eq!(state.visited_count(), 0);
        assert_eq!(state.finish_index(root), Some(2));

        state.reset();
        assert_eq!(state.finish_index(root), None);
    }
}
