//! Condensation of a graph: one vertex per strongly connected component.

use crate::graphlib::{DiGraph, GraphOptions, Label};
use crate::scc::{Component, SccResult};

/// Builds the condensation DAG of `graph` from its `components`.
///
/// Vertex `i` stands for `components[i]` and carries the member labels as payload. Every
/// edge between two different components becomes one edge of the result; edges inside a
/// component are dropped.
pub fn condensation<N>(graph: &DiGraph<N>, components: &[Component]) -> DiGraph<Component> {
    let result = SccResult::from_components(components.to_vec());
    let members = components.to_vec();

    let mut dag = DiGraph::with_vertex_factory(GraphOptions::default(), move |label: Label| {
        usize::try_from(label)
            .ok()
            .and_then(|i| members.get(i).cloned())
            .unwrap_or_default()
    });

    for i in 0..components.len() {
        dag.get_or_create_vertex(component_label(i));
    }

    for (_, edge) in graph.edges() {
        let from = result.component_of(graph.label(edge.tail()));
        let to = result.component_of(graph.label(edge.head()));
        if let (Some(from), Some(to)) = (from, to) {
            if from != to {
                dag.add_edge_between(component_label(from), component_label(to));
            }
        }
    }

    tracing::debug!(
        components = dag.vertex_count(),
        edges = dag.edge_count(),
        "condensation built"
    );
    dag
}

fn component_label(index: usize) -> Label {
    Label::try_from(index).unwrap_or(Label::MAX)
}
