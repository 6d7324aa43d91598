//! Graph construction module

use crate::data::{GraphDocument, Link, NodeId};
use crate::error::{MalformedInputError, Result};
use crate::graph::{Distance, DistanceGraph};
use std::collections::HashMap;

/// Builder for incrementally constructing a DistanceGraph
pub struct GraphBuilder {
    graph: DistanceGraph,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::with_capacity(0, 0)
    }
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            graph: DistanceGraph::with_capacity(node_count, edge_count),
        }
    }

    /// Get or create the dense position for the given node identifier
    pub fn get_or_create_node(&mut self, id: &str) -> usize {
        self.graph.get_or_create_node(id)
    }

    /// Add an undirected edge, creating missing endpoints
    ///
    /// A repeated pair keeps the last weight seen.
    pub fn add_edge(&mut self, source: &str, target: &str, distance: Distance) {
        let src_idx = self.get_or_create_node(source);
        let dst_idx = self.get_or_create_node(target);

        self.graph.update_edge(src_idx, dst_idx, distance);
    }

    /// Append a sample to a node's sample list, creating the node if absent
    pub fn attach_sample(&mut self, sample: &str, node: &str) {
        let idx = self.get_or_create_node(node);
        self.graph.attach(idx, sample);
    }

    /// Build the distance graph
    pub fn build(self) -> DistanceGraph {
        self.graph
    }

    /// Build a graph from a full input document
    ///
    /// Edges are added in document order, then samples are attached in
    /// metadata order. Any structural problem aborts before a graph is
    /// returned.
    pub fn from_document(document: &GraphDocument) -> Result<DistanceGraph> {
        let declared = declared_nodes(&document.nodes)?;

        let mut builder = Self::with_capacity(document.nodes.len(), document.links.len());

        for (link_no, link) in document.links.iter().enumerate() {
            builder.add_link(&document.nodes, link_no, link)?;
        }

        for (sample, metadata) in &document.metadata {
            let node = GraphDocument::sample_node(metadata).ok_or_else(|| {
                MalformedInputError::parse(format!(
                    "sample '{}' has no string or numeric `__Node` field",
                    sample
                ))
            })?;

            if !declared.contains_key(node.as_str()) {
                return Err(MalformedInputError::UnknownNode {
                    sample: sample.clone(),
                    node: node.to_string(),
                });
            }

            builder.attach_sample(sample, node.as_str());
        }

        let graph = builder.build();

        log::info!(
            "Built distance graph with {} nodes, {} edges and {} samples",
            graph.node_count(),
            graph.edge_count(),
            graph.sample_count()
        );

        Ok(graph)
    }

    /// Resolve a link's endpoint positions and add it
    fn add_link(&mut self, nodes: &[NodeId], link_no: usize, link: &Link) -> Result<()> {
        let resolve = |index: usize| {
            nodes
                .get(index)
                .ok_or_else(|| MalformedInputError::NodeIndexOutOfRange {
                    link: link_no,
                    index,
                    node_count: nodes.len(),
                })
        };

        let source = resolve(link.source)?;
        let target = resolve(link.target)?;
        let distance = Distance::new(link.distance).ok_or(MalformedInputError::InvalidDistance {
            link: link_no,
            distance: link.distance,
        })?;

        self.add_edge(source.as_str(), target.as_str(), distance);

        Ok(())
    }
}

/// Map each declared node identifier to its position, rejecting duplicates
fn declared_nodes(nodes: &[NodeId]) -> Result<HashMap<&str, usize>> {
    let mut declared = HashMap::with_capacity(nodes.len());

    for (position, node) in nodes.iter().enumerate() {
        if let Some(first) = declared.insert(node.as_str(), position) {
            return Err(MalformedInputError::DuplicateNode {
                node: node.to_string(),
                first,
                second: position,
            });
        }
    }

    Ok(declared)
}
