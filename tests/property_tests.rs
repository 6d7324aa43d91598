//! Property-based tests using proptest

use grapetree_cluster::cluster::Partition;
use grapetree_cluster::graph::algorithms::{components_within, distinct_distances};
use grapetree_cluster::storage::write_table;
use grapetree_cluster::*;
use proptest::prelude::*;

/// Build a graph over `node_count` nodes; every third node is a placeholder
fn random_graph(node_count: usize, edges: &[(usize, usize, u8)]) -> DistanceGraph {
    let mut builder = GraphBuilder::default();

    for node in 0..node_count {
        builder.get_or_create_node(&format!("n{}", node));
    }
    for &(source, target, weight) in edges {
        builder.add_edge(
            &format!("n{}", source % node_count),
            &format!("n{}", target % node_count),
            Distance::new(f64::from(weight)).unwrap(),
        );
    }
    for node in 0..node_count {
        let name = if node % 3 == 2 {
            format!("_hypo_{}", node)
        } else {
            format!("s{}", node)
        };
        builder.attach_sample(&name, &format!("n{}", node));
    }
    builder.attach_sample("FILE", "n0");

    builder.build()
}

fn graph_strategy() -> impl Strategy<Value = DistanceGraph> {
    (1usize..12).prop_flat_map(|node_count| {
        prop::collection::vec((0usize..12, 0usize..12, 0u8..6), 0..24)
            .prop_map(move |edges| random_graph(node_count, &edges))
    })
}

fn partitions(graph: &DistanceGraph) -> Vec<Partition> {
    ClusterSweep::new(graph, &Config::default()).partitions()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn incremental_sweep_matches_from_scratch(graph in graph_strategy()) {
        let partitions = partitions(&graph);
        prop_assert_eq!(partitions.len(), distinct_distances(&graph).len());

        for partition in &partitions {
            prop_assert_eq!(
                partition.components(),
                components_within(&graph, partition.threshold())
            );
        }
    }

    #[test]
    fn clusters_only_merge_as_threshold_grows(graph in graph_strategy()) {
        let partitions = partitions(&graph);

        for pair in partitions.windows(2) {
            let (low, high) = (&pair[0], &pair[1]);
            prop_assert!(low.threshold() < high.threshold());
            prop_assert!(low.cluster_count() >= high.cluster_count());

            for component in low.components() {
                let first = high.cluster_of(component[0]);
                for &node in &component {
                    prop_assert_eq!(high.cluster_of(node), first);
                }
            }
        }
    }

    #[test]
    fn excluded_names_never_emitted(graph in graph_strategy()) {
        let config = Config::default();
        let assignments = ClusterSweep::new(&graph, &config).run();
        let table = assemble_table(&assignments);

        for sample in table.samples() {
            prop_assert!(!config.is_excluded(sample));
        }
        for assignment in &assignments {
            prop_assert_eq!(assignment.len(), table.row_count());
        }
    }

    #[test]
    fn output_is_deterministic(graph in graph_strategy()) {
        let config = Config::default();
        let render = || {
            let table = assemble_table(&ClusterSweep::new(&graph, &config).run());
            let mut out = Vec::new();
            write_table(&table, &config, &mut out).unwrap();
            out
        };

        prop_assert_eq!(render(), render());
    }
}
