//! Traversal helpers built on [`depth_first`].

use crate::graphlib::{DiGraph, Label};
use crate::traversal::{Direction, SearchState, depth_first};
use std::collections::BTreeSet;

/// Labels in depth-first discovery order, searching forward from each root in turn.
///
/// Unknown roots are skipped.
pub fn preorder<N>(g: &DiGraph<N>, roots: &[Label]) -> Vec<Label> {
    let mut state = SearchState::for_graph(g);
    let mut out: Vec<Label> = Vec::with_capacity(g.vertex_count());
    for &r in roots {
        let Some(root) = g.vertex_id(r) else {
            continue;
        };
        depth_first(
            g,
            root,
            Direction::Forward,
            &mut state,
            |v| out.push(g.label(v)),
            |_, _| {},
        );
    }
    out
}

/// Labels in depth-first finish order, searching forward from each root in turn.
pub fn postorder<N>(g: &DiGraph<N>, roots: &[Label]) -> Vec<Label> {
    let mut state = SearchState::for_graph(g);
    let mut out: Vec<Label> = Vec::with_capacity(g.vertex_count());
    for &r in roots {
        let Some(root) = g.vertex_id(r) else {
            continue;
        };
        depth_first(
            g,
            root,
            Direction::Forward,
            &mut state,
            |_| {},
            |_, v| out.push(g.label(v)),
        );
    }
    out
}

/// Labels reachable from `from` along `direction`, including `from` itself.
pub fn reachable<N>(g: &DiGraph<N>, from: Label, direction: Direction) -> BTreeSet<Label> {
    let mut out: BTreeSet<Label> = BTreeSet::new();
    let Some(root) = g.vertex_id(from) else {
        return out;
    };
    let mut state = SearchState::for_graph(g);
    depth_first(
        g,
        root,
        direction,
        &mut state,
        |v| {
            out.insert(g.label(v));
        },
        |_, _| {},
    );
    out
}

/// Whether every vertex reaches every other vertex. The empty graph counts as connected.
pub fn is_strongly_connected<N>(g: &DiGraph<N>) -> bool {
    let Some(first) = g.labels().next() else {
        return true;
    };
    let n = g.vertex_count();
    reachable(g, first, Direction::Forward).len() == n
        && reachable(g, first, Direction::Backward).len() == n
}
