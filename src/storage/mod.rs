//! Results persistence module

use crate::cluster::metrics::ThresholdMetrics;
use crate::config::Config;
use crate::graph::DistanceGraph;
use crate::table::ClusterTable;
use anyhow::{Context, Result};
use itertools::Itertools;
use serde_json::{json, to_string_pretty};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write a cluster table as delimited text
///
/// The header row holds the label column name followed by each threshold.
/// Missing cells are written as the configured marker.
pub fn write_table<W: Write>(table: &ClusterTable, config: &Config, mut writer: W) -> io::Result<()> {
    let delimiter = config.delimiter.to_string();

    let header = std::iter::once(config.label_column.clone())
        .chain(table.thresholds().iter().map(|threshold| threshold.to_string()))
        .join(&delimiter);
    writeln!(writer, "{}", header)?;

    for (sample, cells) in table.rows() {
        let row = std::iter::once(sample.to_string())
            .chain(cells.iter().map(|cell| match cell {
                Some(cluster) => cluster.to_string(),
                None => config.missing_marker.clone(),
            }))
            .join(&delimiter);
        writeln!(writer, "{}", row)?;
    }

    writer.flush()
}

/// Save a cluster table to the given path
pub fn save_table(table: &ClusterTable, config: &Config, path: &Path) -> Result<()> {
    log::info!(
        "Saving {} x {} cluster table to {}",
        table.row_count(),
        table.column_count(),
        path.display()
    );

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_table(table, config, BufWriter::new(file))
        .with_context(|| format!("writing {}", path.display()))?;

    Ok(())
}

/// Save a JSON summary of the graph and per-threshold cluster metrics
pub fn save_summary(
    graph: &DistanceGraph,
    table: &ClusterTable,
    metrics: &[ThresholdMetrics],
    path: &Path,
) -> Result<()> {
    log::info!("Saving run summary to {}", path.display());

    let summary = json!({
        "graph_stats": {
            "node_count": graph.node_count(),
            "edge_count": graph.edge_count(),
            "sample_count": graph.sample_count(),
        },
        "table_stats": {
            "row_count": table.row_count(),
            "threshold_count": table.column_count(),
        },
        "thresholds": metrics,
    });

    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::ClusterAssignment;
    use crate::graph::Distance;
    use crate::table::assemble_table;

    fn table() -> ClusterTable {
        assemble_table(&[
            ClusterAssignment {
                threshold: Distance::new(1.0).unwrap(),
                members: vec![("s2".to_string(), 2), ("s1".to_string(), 1)],
            },
            ClusterAssignment {
                threshold: Distance::new(2.5).unwrap(),
                members: vec![("s1".to_string(), 1)],
            },
        ])
    }

    #[test]
    fn writes_tab_separated_table() {
        let mut out = Vec::new();
        write_table(&table(), &Config::default(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "genome\t1\t2.5\ns1\t1\t1\ns2\t2\t\n"
        );
    }

    #[test]
    fn honours_delimiter_and_missing_marker() {
        let config = Config {
            delimiter: ',',
            missing_marker: "NA".to_string(),
            ..Config::default()
        };
        let mut out = Vec::new();
        write_table(&table(), &config, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "genome,1,2.5\ns1,1,1\ns2,2,NA\n"
        );
    }

    #[test]
    fn empty_table_writes_header_only() {
        let mut out = Vec::new();
        write_table(&ClusterTable::default(), &Config::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "genome\n");
    }

    #[test]
    fn summary_is_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");

        let table = table();
        save_summary(&DistanceGraph::default(), &table, &[], &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["table_stats"]["threshold_count"], 2);
        assert_eq!(value["graph_stats"]["node_count"], 0);
    }
}
