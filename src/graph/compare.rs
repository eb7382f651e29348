//! comparative timing of the four traversal variants

use std::time::{Duration, Instant};

use crate::graph::{DualGraph, Variant};

/// Timing and distances for one variant swept over every source vertex.
///
/// `distances` is an n×n matrix: row `i` holds the distance vector produced
/// from source `i`.
pub struct VariantReport {
    pub variant: Variant,
    pub elapsed: Duration,
    pub distances: Vec<Vec<i32>>,
}

impl VariantReport {
    pub fn elapsed_micros(&self) -> u128 {
        self.elapsed.as_micros()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Runs every variant from every source and times each variant's full sweep.
///
/// The silent traversal forms are used so the measurement reflects traversal
/// cost, not output cost. Variants run in the fixed order DFS-matrix,
/// DFS-list, BFS-matrix, BFS-list; the result carries one report per variant
/// in that order. Purely observational, no pass/fail semantics.
pub fn compare(graph: &DualGraph) -> Vec<VariantReport> {
    Variant::COMPARE_ORDER
        .iter()
        .map(|&variant| {
            let start = Instant::now();
            let distances = (0..graph.order())
                .map(|source| variant.run(graph, source))
                .collect();
            let elapsed = start.elapsed();

            VariantReport {
                variant,
                elapsed,
                distances,
            }
        })
        .collect()
}
