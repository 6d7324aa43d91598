//! Threshold sweep cluster detection

use crate::cluster::{ClusterAssignment, ClusterId};
use crate::config::Config;
use crate::graph::algorithms::sorted_edges;
use crate::graph::{Distance, DistanceGraph};
use itertools::Itertools;
use rayon::prelude::*;

/// Union-Find data structure for incremental connected component analysis
#[derive(Debug, Clone)]
pub struct DisjointSets {
    /// Parent pointers (parent[i] = parent of node i)
    parent: Vec<usize>,

    /// Size of each set, valid at roots only (for union by size)
    size: Vec<usize>,
}

impl DisjointSets {
    /// Create a new DisjointSets data structure
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            size: vec![1; size],
        }
    }

    /// Find the root of the set containing x with path compression
    pub fn find(&mut self, mut x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }

        root
    }

    /// Union the sets containing x and y, returning whether they were apart
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        // Attach smaller tree under root of larger tree
        let (big, small) = if self.size[root_x] >= self.size[root_y] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];

        true
    }

    /// Get the size of the set containing x
    pub fn size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

/// Component membership of every node at one threshold
///
/// Cluster ids are numbered from 1 in order of each component's smallest
/// node position, so two runs over the same graph label identically.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    threshold: Distance,
    labels: Vec<ClusterId>,
    cluster_count: usize,
}

impl Partition {
    /// Capture the current state of the disjoint sets
    fn snapshot(threshold: Distance, sets: &mut DisjointSets) -> Self {
        const UNSEEN: ClusterId = 0;

        let mut root_labels = vec![UNSEEN; sets.len()];
        let mut labels = Vec::with_capacity(sets.len());
        let mut next: ClusterId = 0;

        for node in 0..sets.len() {
            let root = sets.find(node);
            if root_labels[root] == UNSEEN {
                next += 1;
                root_labels[root] = next;
            }
            labels.push(root_labels[root]);
        }

        Self {
            threshold,
            labels,
            cluster_count: next as usize,
        }
    }

    pub fn threshold(&self) -> Distance {
        self.threshold
    }

    /// Cluster id per node position
    pub fn labels(&self) -> &[ClusterId] {
        &self.labels
    }

    pub fn cluster_of(&self, node: usize) -> Option<ClusterId> {
        self.labels.get(node).copied()
    }

    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Node positions grouped by cluster, in cluster id order
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut components = vec![Vec::new(); self.cluster_count];
        for (node, &label) in self.labels.iter().enumerate() {
            components[label as usize - 1].push(node);
        }
        components
    }
}

/// Single-linkage sweep over every distinct edge weight of a graph
///
/// Edges are merged in ascending weight order into one disjoint-set forest;
/// all edges sharing a weight are merged before that threshold is recorded.
/// The graph itself is only read.
pub struct ClusterSweep<'a> {
    graph: &'a DistanceGraph,
    config: &'a Config,
}

impl<'a> ClusterSweep<'a> {
    pub fn new(graph: &'a DistanceGraph, config: &'a Config) -> Self {
        Self { graph, config }
    }

    /// Partition snapshots, one per distinct edge weight, ascending
    pub fn partitions(&self) -> Vec<Partition> {
        let edges = sorted_edges(self.graph);
        let mut sets = DisjointSets::new(self.graph.node_count());
        let mut partitions = Vec::new();

        for (threshold, group) in &edges.iter().group_by(|&&(_, _, distance)| distance) {
            let merges = group
                .filter(|&&(source, target, _)| sets.union(source, target))
                .count();

            let partition = Partition::snapshot(threshold, &mut sets);
            log::debug!(
                "Threshold {}: {} merges, {} components",
                threshold,
                merges,
                partition.cluster_count()
            );
            partitions.push(partition);
        }

        partitions
    }

    /// Emit the non-excluded samples of every component in a partition
    pub fn assign(&self, partition: &Partition) -> ClusterAssignment {
        let mut members = Vec::new();

        for (idx, component) in partition.components().into_iter().enumerate() {
            let cluster = idx as ClusterId + 1;
            for node in component {
                members.extend(
                    self.graph
                        .strains(node)
                        .iter()
                        .filter(|strain| !self.config.is_excluded(strain))
                        .map(|strain| (strain.clone(), cluster)),
                );
            }
        }

        ClusterAssignment {
            threshold: partition.threshold(),
            members,
        }
    }

    /// Run the full sweep
    ///
    /// Snapshots are taken sequentially, then rendered into sample
    /// assignments in parallel. Output order follows threshold order.
    pub fn run(&self) -> Vec<ClusterAssignment> {
        log::info!(
            "Sweeping {} edges over {} nodes",
            self.graph.edge_count(),
            self.graph.node_count()
        );

        let partitions = self.partitions();

        log::info!("Found {} distinct distance thresholds", partitions.len());

        partitions
            .par_iter()
            .map(|partition| self.assign(partition))
            .collect()
    }
}
