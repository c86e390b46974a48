use kosaraju::alg::postorder;
use kosaraju::graphlib::{DiGraph, Label};
use kosaraju::{Component, condensation, strongly_connected_components};

#[test]
fn condensation_collapses_each_component() {
    let mut g: DiGraph = DiGraph::new();
    g.set_path(&[1, 2, 3, 1]);
    g.set_path(&[4, 5, 4]);
    g.add_edge_between(3, 4);
    g.add_edge_between(2, 5);
    g.add_edge_between(6, 1);

    let comps = strongly_connected_components(&g);
    assert_eq!(comps.len(), 3);
    let dag = condensation(&g, &comps);

    assert_eq!(dag.vertex_count(), 3);
    // 3 -> 4 and 2 -> 5 join the same pair of components.
    assert_eq!(dag.edge_count(), 2);
    for (i, c) in comps.iter().enumerate() {
        let label = Label::try_from(i).unwrap();
        assert_eq!(dag.vertex_by_label(label).unwrap().payload(), c);
    }

    // Source-first emission means every condensation edge points to a later component.
    for (_, e) in dag.edges() {
        assert!(dag.label(e.tail()) < dag.label(e.head()));
    }
}

#[test]
fn condensation_is_acyclic() {
    let mut g: DiGraph = DiGraph::new();
    g.set_path(&[1, 2, 1, 3, 4, 3, 5]);
    g.add_edge_between(5, 5);
    let comps = strongly_connected_components(&g);
    let dag = condensation(&g, &comps);

    let dag_comps = strongly_connected_components(&dag);
    assert_eq!(dag_comps.len(), dag.vertex_count());
    assert_eq!(postorder(&dag, &[0]).len(), dag.vertex_count());
}

#[test]
fn condensation_of_empty_graph_is_empty() {
    let g: DiGraph = DiGraph::new();
    let comps: Vec<Component> = strongly_connected_components(&g);
    assert!(condensation(&g, &comps).is_empty());
}
