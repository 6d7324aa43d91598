//! Cluster statistics and metrics

use crate::cluster::{ClusterAssignment, ClusterId};
use crate::graph::Distance;
use serde::Serialize;
use std::collections::HashMap;

/// Summary of the emitted clusters at one threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdMetrics {
    pub threshold: Distance,

    /// Number of clusters with at least one emitted sample
    pub cluster_count: usize,

    /// Sample count of the largest cluster
    pub largest_cluster: usize,

    /// Clusters holding exactly one sample
    pub singleton_count: usize,
}

/// Calculate cluster size metrics for one threshold
pub fn calculate_threshold_metrics(assignment: &ClusterAssignment) -> ThresholdMetrics {
    let mut sizes: HashMap<ClusterId, usize> = HashMap::new();
    for &(_, cluster) in &assignment.members {
        *sizes.entry(cluster).or_insert(0) += 1;
    }

    ThresholdMetrics {
        threshold: assignment.threshold,
        cluster_count: sizes.len(),
        largest_cluster: sizes.values().copied().max().unwrap_or(0),
        singleton_count: sizes.values().filter(|&&size| size == 1).count(),
    }
}

/// Calculate metrics for every threshold, logging each at debug level
pub fn calculate_sweep_metrics(assignments: &[ClusterAssignment]) -> Vec<ThresholdMetrics> {
    assignments
        .iter()
        .map(|assignment| {
            let metrics = calculate_threshold_metrics(assignment);
            log::debug!(
                "Threshold {}: {} clusters, largest {}, {} singletons",
                metrics.threshold,
                metrics.cluster_count,
                metrics.largest_cluster,
                metrics.singleton_count
            );
            metrics
        })
        .collect()
}
