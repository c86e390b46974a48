//! Strongly connected components (Kosaraju).
//!
//! Pass 1 runs a forward search from every unvisited vertex in label order and stamps each
//! vertex with a post-order finish index. Pass 2 clears the visited marks (finish indices
//! stay) and runs a backward search, i.e. a search of the transpose graph, from every
//! unvisited vertex in decreasing finish order. Each pass-2 search yields one component.
//!
//! A component with an edge into another component always finishes later in pass 1, so in
//! pass 2 a backward search can only run into components that were already extracted. With
//! the default directions components therefore come out in topological order of the
//! condensation: sources first.

use crate::graphlib::{DiGraph, Label, VertexId};
use crate::traversal::{Direction, SearchState, depth_first};
use std::collections::{BTreeMap, BTreeSet};

/// Labels of the vertices in one strongly connected component.
pub type Component = BTreeSet<Label>;

/// Order in which pass 1 picks its search roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootOrder {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SccOptions {
    pub pass1_order: RootOrder,
    /// Direction of the pass-1 search. Pass 2 walks the opposite direction. `Backward` yields
    /// the same components in reverse topological order (sinks first).
    pub pass1_direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pass1Running,
    Pass1Done,
    Pass2Running,
    Done,
}

/// Two-pass SCC driver over a borrowed graph.
///
/// All scratch state belongs to the engine, so several engines can analyze the same graph,
/// and the graph cannot change while an engine holds it.
pub struct Kosaraju<'g, N> {
    graph: &'g DiGraph<N>,
    options: SccOptions,
    state: SearchState,
    phase: Phase,
    finish_order: Vec<VertexId>,
}

impl<'g, N> Kosaraju<'g, N> {
    pub fn new(graph: &'g DiGraph<N>) -> Self {
        Self::with_options(graph, SccOptions::default())
    }

    pub fn with_options(graph: &'g DiGraph<N>, options: SccOptions) -> Self {
        Self {
            graph,
            options,
            state: SearchState::for_graph(graph),
            phase: Phase::Idle,
            finish_order: Vec::with_capacity(graph.vertex_count()),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn options(&self) -> SccOptions {
        self.options
    }

    /// Pass-1 finish index of `v`, once pass 1 has run.
    pub fn finish_index(&self, v: VertexId) -> Option<usize> {
        self.state.finish_index(v)
    }

    /// Vertices in increasing finish index.
    pub fn finish_order(&self) -> &[VertexId] {
        &self.finish_order
    }

    /// Drops visited marks and finish indices and returns to [`Phase::Idle`].
    pub fn reset(&mut self) {
        self.state.reset();
        self.finish_order.clear();
        self.phase = Phase::Idle;
    }

    /// Computes the finish order. Starts over from a clean state if anything ran before.
    pub fn run_pass1(&mut self) -> &[VertexId] {
        if self.phase != Phase::Idle {
            self.reset();
        }
        self.phase = Phase::Pass1Running;

        let graph = self.graph;
        let roots: Box<dyn Iterator<Item = VertexId> + '_> = match self.options.pass1_order {
            RootOrder::Ascending => Box::new(graph.vertices()),
            RootOrder::Descending => Box::new(graph.vertices_descending()),
        };
        let finish_order = &mut self.finish_order;
        for root in roots {
            depth_first(
                graph,
                root,
                self.options.pass1_direction,
                &mut self.state,
                |_| {},
                |state, v| {
                    state.record_finish(v);
                    finish_order.push(v);
                },
            );
        }

        self.phase = Phase::Pass1Done;
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "scc pass 1 finished"
        );
        &self.finish_order
    }

    /// Extracts components in decreasing finish order, running pass 1 first if needed.
    pub fn run_pass2(&mut self) -> Vec<Component> {
        if self.phase != Phase::Pass1Done {
            self.run_pass1();
        }
        self.state.clear_visited();
        self.phase = Phase::Pass2Running;

        let graph = self.graph;
        let pass2_direction = self.options.pass1_direction.reversed();
        let mut components: Vec<Component> = Vec::new();
        for &root in self.finish_order.iter().rev() {
            if self.state.is_visited(root) {
                continue;
            }
            let mut component = Component::new();
            depth_first(
                graph,
                root,
                pass2_direction,
                &mut self.state,
                |v| {
                    component.insert(graph.label(v));
                },
                |_, _| {},
            );
            tracing::trace!(root = graph.label(root), size = component.len(), "scc component");
            components.push(component);
        }

        self.phase = Phase::Done;
        tracing::debug!(components = components.len(), "scc pass 2 finished");
        components
    }

    /// Runs both passes from a clean state.
    pub fn run(&mut self) -> Vec<Component> {
        self.reset();
        self.run_pass1();
        self.run_pass2()
    }
}

/// Components of `graph` in the order their pass-2 roots were picked.
pub fn strongly_connected_components<N>(graph: &DiGraph<N>) -> Vec<Component> {
    Kosaraju::new(graph).run()
}

/// Components plus a label → component index lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SccResult {
    components: Vec<Component>,
    component_of: BTreeMap<Label, usize>,
}

impl SccResult {
    pub fn analyze<N>(graph: &DiGraph<N>) -> Self {
        Self::from_components(strongly_connected_components(graph))
    }

    pub fn from_components(components: Vec<Component>) -> Self {
        let component_of = components
            .iter()
            .enumerate()
            .flat_map(|(i, c)| c.iter().map(move |&label| (label, i)))
            .collect();
        Self {
            components,
            component_of,
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn component_of(&self, label: Label) -> Option<usize> {
        self.component_of.get(&label).copied()
    }

    pub fn same_component(&self, a: Label, b: Label) -> bool {
        match (self.component_of(a), self.component_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}
