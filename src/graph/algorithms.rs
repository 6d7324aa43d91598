//! Graph algorithms for threshold analysis

use crate::graph::{Distance, DistanceGraph};
use itertools::Itertools;
use petgraph::graph::{EdgeReference, NodeIndex};
use petgraph::visit::{Bfs, EdgeFiltered};

/// An edge over dense node positions
pub type WeightedEdge = (usize, usize, Distance);

/// Distinct edge weights in ascending order
///
/// These are exactly the thresholds a cluster table reports. A graph without
/// edges has none.
pub fn distinct_distances(graph: &DistanceGraph) -> Vec<Distance> {
    graph
        .edges()
        .map(|(_, _, distance)| distance)
        .sorted_unstable()
        .dedup()
        .collect()
}

/// All edges sorted by ascending weight
///
/// The sort is stable, so edges of equal weight keep graph order.
pub fn sorted_edges(graph: &DistanceGraph) -> Vec<WeightedEdge> {
    graph.edges().sorted_by_key(|&(_, _, distance)| distance).collect()
}

/// Connected components using only edges of weight `<= threshold`
///
/// Computed from scratch by breadth-first search. Components are ordered by
/// their smallest node position and list their nodes in ascending order.
pub fn components_within(graph: &DistanceGraph, threshold: Distance) -> Vec<Vec<usize>> {
    let inner = graph.inner();
    let filtered = EdgeFiltered::from_fn(inner, |edge: EdgeReference<'_, Distance>| {
        *edge.weight() <= threshold
    });

    let mut visited = vec![false; graph.node_count()];
    let mut components = Vec::new();

    for start in 0..graph.node_count() {
        if visited[start] {
            continue;
        }

        let mut component = Vec::new();
        let mut bfs = Bfs::new(&filtered, NodeIndex::new(start));
        while let Some(node) = bfs.next(&filtered) {
            visited[node.index()] = true;
            component.push(node.index());
        }

        component.sort_unstable();
        components.push(component);
    }

    components
}
