//! Cluster table assembly
//!
//! Collates per-threshold assignments into one table with a row per sample
//! and a column per threshold.

use crate::cluster::{ClusterAssignment, ClusterId};
use crate::graph::Distance;
use std::collections::HashMap;

/// Samples by thresholds, each cell a cluster id or missing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterTable {
    thresholds: Vec<Distance>,
    samples: Vec<String>,
    cells: Vec<Vec<Option<ClusterId>>>,
}

impl ClusterTable {
    /// Column labels, ascending
    pub fn thresholds(&self) -> &[Distance] {
        &self.thresholds
    }

    /// Row labels in output order
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Rows as `(sample, cells)` in output order
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Option<ClusterId>])> + '_ {
        self.samples
            .iter()
            .zip(&self.cells)
            .map(|(sample, cells)| (sample.as_str(), cells.as_slice()))
    }

    /// Cell for a sample at a column position
    pub fn cell(&self, sample: &str, column: usize) -> Option<ClusterId> {
        let row = self.samples.iter().position(|name| name == sample)?;
        self.cells[row].get(column).copied().flatten()
    }

    pub fn row_count(&self) -> usize {
        self.samples.len()
    }

    pub fn column_count(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty() && self.thresholds.is_empty()
    }
}

/// Incrementally collects threshold columns into a ClusterTable
#[derive(Debug, Default)]
pub struct TableAssembler {
    thresholds: Vec<Distance>,
    samples: Vec<String>,
    row_index: HashMap<String, usize>,
    cells: Vec<Vec<Option<ClusterId>>>,
}

impl TableAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one threshold's assignment as a new column
    pub fn push(&mut self, assignment: &ClusterAssignment) {
        let column = self.thresholds.len();
        self.thresholds.push(assignment.threshold);
        for row in &mut self.cells {
            row.push(None);
        }

        for (sample, cluster) in &assignment.members {
            let row = match self.row_index.get(sample) {
                Some(&row) => row,
                None => {
                    let row = self.samples.len();
                    self.row_index.insert(sample.clone(), row);
                    self.samples.push(sample.clone());
                    self.cells.push(vec![None; column + 1]);
                    row
                }
            };
            self.cells[row][column] = Some(*cluster);
        }
    }

    /// Order columns by threshold and rows by first-column cluster id
    ///
    /// Both sorts are stable. Rows missing from the first column sort last.
    pub fn finish(self) -> ClusterTable {
        let Self {
            thresholds,
            samples,
            cells,
            ..
        } = self;

        let mut column_order: Vec<usize> = (0..thresholds.len()).collect();
        column_order.sort_by_key(|&column| thresholds[column]);

        let mut rows: Vec<(String, Vec<Option<ClusterId>>)> = samples
            .into_iter()
            .zip(cells)
            .map(|(sample, row)| {
                let ordered = column_order.iter().map(|&column| row[column]).collect();
                (sample, ordered)
            })
            .collect();

        rows.sort_by_key(|(_, row)| match row.first().copied().flatten() {
            Some(cluster) => (false, cluster),
            None => (true, 0),
        });

        let (samples, cells) = rows.into_iter().unzip();

        ClusterTable {
            thresholds: column_order.iter().map(|&column| thresholds[column]).collect(),
            samples,
            cells,
        }
    }
}

/// Assemble a table from a full set of threshold assignments
pub fn assemble_table(assignments: &[ClusterAssignment]) -> ClusterTable {
    let mut assembler = TableAssembler::new();
    for assignment in assignments {
        assembler.push(assignment);
    }

    let table = assembler.finish();
    log::info!(
        "Assembled cluster table with {} samples and {} thresholds",
        table.row_count(),
        table.column_count()
    );

    table
}
