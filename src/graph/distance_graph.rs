//! Weighted undirected distance graph with samples attached to nodes

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// A finite, non-negative edge weight
///
/// Construction rejects NaN and infinities, which gives distances a total
/// order and lets them be used directly as sort and group keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance(f64);

impl Distance {
    /// Wrap a raw weight, or `None` if it is negative or not finite
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        // -0.0 and 0.0 must compare equal under total_cmp
        Some(Self(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

/// Per-node payload: the identifier and the samples sharing this profile
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeData {
    pub id: String,

    /// Sample names in attachment order
    pub strains: Vec<String>,
}

/// Distance graph keyed by node identifier
///
/// Nodes are numbered densely in creation order; that numbering is what the
/// clustering code uses to order components deterministically.
#[derive(Debug, Clone, Default)]
pub struct DistanceGraph {
    graph: UnGraph<NodeData, Distance>,
    id_to_index: HashMap<String, NodeIndex>,
}

impl DistanceGraph {
    /// Create an empty graph with pre-allocated capacity
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(node_count, edge_count),
            id_to_index: HashMap::with_capacity(node_count),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Total number of attached sample names, excluded ones included
    pub fn sample_count(&self) -> usize {
        self.graph.node_weights().map(|node| node.strains.len()).sum()
    }

    /// Dense position of a node identifier
    pub fn position(&self, id: &str) -> Option<usize> {
        self.id_to_index.get(id).map(|idx| idx.index())
    }

    /// Node payload at a dense position
    pub fn node(&self, position: usize) -> Option<&NodeData> {
        self.graph.node_weight(NodeIndex::new(position))
    }

    /// Samples attached to the node at a dense position
    pub fn strains(&self, position: usize) -> &[String] {
        self.node(position)
            .map(|node| node.strains.as_slice())
            .unwrap_or(&[])
    }

    /// All edges as `(source, target, distance)` over dense positions
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Distance)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index(), *edge.weight()))
    }

    pub(crate) fn inner(&self) -> &UnGraph<NodeData, Distance> {
        &self.graph
    }

    pub(crate) fn get_or_create_node(&mut self, id: &str) -> usize {
        if let Some(idx) = self.id_to_index.get(id) {
            return idx.index();
        }

        let idx = self.graph.add_node(NodeData {
            id: id.to_string(),
            strains: Vec::new(),
        });
        self.id_to_index.insert(id.to_string(), idx);

        idx.index()
    }

    /// Insert an edge, overwriting the weight of an existing one
    pub(crate) fn update_edge(&mut self, source: usize, target: usize, distance: Distance) {
        self.graph
            .update_edge(NodeIndex::new(source), NodeIndex::new(target), distance);
    }

    pub(crate) fn attach(&mut self, position: usize, sample: &str) {
        if let Some(node) = self.graph.node_weight_mut(NodeIndex::new(position)) {
            node.strains.push(sample.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, true)]
    #[case(3.5, true)]
    #[case(-1.0, false)]
    #[case(f64::NAN, false)]
    #[case(f64::INFINITY, false)]
    fn distance_validation(#[case] value: f64, #[case] valid: bool) {
        assert_eq!(Distance::new(value).is_some(), valid);
    }

    #[test]
    fn negative_zero_equals_zero() {
        let neg = Distance::new(-0.0).unwrap();
        let pos = Distance::new(0.0).unwrap();
        assert_eq!(neg, pos);
        assert_eq!(neg.cmp(&pos), Ordering::Equal);
    }

    #[rstest]
    #[case(1.0, "1")]
    #[case(1.5, "1.5")]
    #[case(0.0, "0")]
    fn distance_display(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(Distance::new(value).unwrap().to_string(), expected);
    }

    #[test]
    fn update_edge_overwrites_weight() {
        let mut graph = DistanceGraph::default();
        let a = graph.get_or_create_node("A");
        let b = graph.get_or_create_node("B");
        graph.update_edge(a, b, Distance::new(4.0).unwrap());
        graph.update_edge(b, a, Distance::new(2.0).unwrap());

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].2, Distance::new(2.0).unwrap());
    }

    #[test]
    fn nodes_are_numbered_in_creation_order() {
        let mut graph = DistanceGraph::default();
        assert_eq!(graph.get_or_create_node("X"), 0);
        assert_eq!(graph.get_or_create_node("Y"), 1);
        assert_eq!(graph.get_or_create_node("X"), 0);
        assert_eq!(graph.position("Y"), Some(1));
        assert_eq!(graph.position("Z"), None);
        assert!(graph.strains(5).is_empty());
    }
}
