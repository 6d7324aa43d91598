//! Single-linkage cluster tables from GrapeTree distance graphs
//!
//! A distance graph (nodes are genotype profiles, edges are pairwise
//! distances, samples hang off nodes) is swept over every distinct edge
//! weight. At each weight the connected components of the subgraph with
//! edges `<=` that weight become clusters, and the result is a table of
//! cluster ids with a row per sample and a column per threshold.

pub mod cluster;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod storage;
pub mod table;

pub use cluster::{ClusterAssignment, ClusterId, ClusterSweep};
pub use config::Config;
pub use data::GraphDocument;
pub use error::{MalformedInputError, Result};
pub use graph::{Distance, DistanceGraph, GraphBuilder};
pub use table::{assemble_table, ClusterTable, TableAssembler};

/// Build the cluster table for an in-memory document
pub fn build_cluster_table(document: &GraphDocument, config: &Config) -> Result<ClusterTable> {
    let graph = GraphBuilder::from_document(document)?;
    let assignments = ClusterSweep::new(&graph, config).run();
    Ok(assemble_table(&assignments))
}
