//! Cluster analysis module

pub mod detection;
pub mod metrics;

pub use detection::{ClusterSweep, DisjointSets, Partition};
pub use metrics::ThresholdMetrics;

use crate::graph::Distance;
use serde::Serialize;

/// Cluster label at one threshold, starting at 1
pub type ClusterId = u32;

/// Sample to cluster mapping at a single distance threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterAssignment {
    /// Edges with weight up to and including this value were merged
    pub threshold: Distance,

    /// `(sample, cluster)` pairs in cluster order, then node order
    pub members: Vec<(String, ClusterId)>,
}

impl ClusterAssignment {
    /// Cluster of a sample, if it was emitted at this threshold
    pub fn cluster_of(&self, sample: &str) -> Option<ClusterId> {
        self.members
            .iter()
            .find(|(name, _)| name == sample)
            .map(|&(_, cluster)| cluster)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
