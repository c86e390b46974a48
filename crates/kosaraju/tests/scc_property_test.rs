use kosaraju::graphlib::{DiGraph, Label};
use kosaraju::{Kosaraju, SccResult, strongly_connected_components};
use quickcheck::{QuickCheck, TestResult};
use std::collections::BTreeSet;

const MAX_VERTICES: u8 = 9;

fn build(n: u8, edges: &[(u8, u8)]) -> DiGraph {
    let mut g: DiGraph = DiGraph::new();
    for l in 0..n {
        g.get_or_create_vertex(Label::from(l));
    }
    for &(a, b) in edges {
        g.add_edge_between(Label::from(a % n), Label::from(b % n));
    }
    g
}

/// Transitive closure by Floyd-Warshall; `reach[i][j]` iff a path of length >= 0 exists.
fn closure(n: usize, edges: &[(u8, u8)]) -> Vec<Vec<bool>> {
    let mut reach = vec![vec![false; n]; n];
    for (i, row) in reach.iter_mut().enumerate() {
        row[i] = true;
    }
    for &(a, b) in edges {
        reach[a as usize % n][b as usize % n] = true;
    }
    for k in 0..n {
        for i in 0..n {
            if !reach[i][k] {
                continue;
            }
            for j in 0..n {
                if reach[k][j] {
                    reach[i][j] = true;
                }
            }
        }
    }
    reach
}

fn prop_components_match_mutual_reachability(n: u8, edges: Vec<(u8, u8)>) -> TestResult {
    let n = n % (MAX_VERTICES + 1);
    if n == 0 {
        let g: DiGraph = DiGraph::new();
        return TestResult::from_bool(strongly_connected_components(&g).is_empty());
    }
    let g = build(n, &edges);
    let result = SccResult::analyze(&g);
    let reach = closure(n as usize, &edges);

    // Partition: every vertex exactly once.
    let total: usize = result.components().iter().map(BTreeSet::len).sum();
    let union: BTreeSet<Label> = result.components().iter().flatten().copied().collect();
    if total != n as usize || union.len() != n as usize {
        return TestResult::failed();
    }

    for i in 0..n as usize {
        for j in 0..n as usize {
            let mutual = reach[i][j] && reach[j][i];
            if mutual != result.same_component(i as Label, j as Label) {
                return TestResult::failed();
            }
        }
    }
    TestResult::passed()
}

fn prop_components_are_emitted_in_topological_order(n: u8, edges: Vec<(u8, u8)>) -> TestResult {
    let n = n % (MAX_VERTICES + 1);
    if n == 0 {
        return TestResult::discard();
    }
    let g = build(n, &edges);
    let result = SccResult::analyze(&g);
    for &(a, b) in &edges {
        let (Some(from), Some(to)) = (
            result.component_of(Label::from(a % n)),
            result.component_of(Label::from(b % n)),
        ) else {
            return TestResult::failed();
        };
        if from > to {
            return TestResult::failed();
        }
    }
    TestResult::passed()
}

fn prop_rerun_is_repeatable(n: u8, edges: Vec<(u8, u8)>) -> TestResult {
    let n = n % (MAX_VERTICES + 1);
    if n == 0 {
        return TestResult::discard();
    }
    let g = build(n, &edges);
    let mut engine = Kosaraju::new(&g);
    let first = engine.run();
    engine.reset();
    TestResult::from_bool(first == engine.run())
}

#[test]
fn components_match_mutual_reachability() {
    QuickCheck::new().quickcheck(
        prop_components_match_mutual_reachability as fn(u8, Vec<(u8, u8)>) -> TestResult,
    );
}

#[test]
fn components_are_emitted_in_topological_order() {
    QuickCheck::new().quickcheck(
        prop_components_are_emitted_in_topological_order as fn(u8, Vec<(u8, u8)>) -> TestResult,
    );
}

#[test]
fn rerun_is_repeatable() {
    QuickCheck::new().quickcheck(prop_rerun_is_repeatable as fn(u8, Vec<(u8, u8)>) -> TestResult);
}

#[test]
fn acyclic_graphs_have_only_singletons() {
    fn prop(n: u8, edges: Vec<(u8, u8)>) -> TestResult {
        let n = n % (MAX_VERTICES + 1);
        if n == 0 {
            return TestResult::discard();
        }
        // Only keep forward edges so the graph is a DAG.
        let forward: Vec<(u8, u8)> = edges
            .into_iter()
            .map(|(a, b)| (a % n, b % n))
            .filter(|(a, b)| a < b)
            .collect();
        let g = build(n, &forward);
        let comps = strongly_connected_components(&g);
        TestResult::from_bool(comps.len() == n as usize && comps.iter().all(|c| c.len() == 1))
    }
    QuickCheck::new().quickcheck(prop as fn(u8, Vec<(u8, u8)>) -> TestResult);
}
