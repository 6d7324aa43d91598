//! Graph representation and algorithms module

pub mod algorithms;
pub mod builder;
pub mod distance_graph;

pub use builder::GraphBuilder;
pub use distance_graph::{Distance, DistanceGraph, NodeData};
