//! Reduction of a closure matrix into disjoint clusters.
//!
//! After closure, every connected component shares one column vector, so
//! the distinct columns of the closure matrix are exactly the clusters of
//! the frame. Singleton sites keep their own column and come out as
//! singleton clusters.

use pairing_core::{Cluster, ClusterSet, ClosureMatrix, Label, SizeStatistics};

/// Collapses closure matrices into canonical cluster sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusterReducer;

impl ClusterReducer {
    pub fn new() -> Self {
        Self
    }

    /// Extracts the distinct columns of the closure matrix in first-seen
    /// order; each becomes one cluster whose members are the rows with a
    /// nonzero entry. The result partitions the sites: every site belongs
    /// to exactly one cluster.
    pub fn reduce(&self, closure: &ClosureMatrix) -> ClusterSet {
        let n = closure.site_count();
        let mut seen: Vec<Vec<Label>> = Vec::new();
        let mut clusters: Vec<Cluster> = Vec::new();

        for j in 0..n {
            let column = closure.label_column(j);
            if seen.contains(&column) {
                continue;
            }
            let members: Vec<usize> = column
                .iter()
                .enumerate()
                .filter(|(_, &v)| v != 0)
                .map(|(i, _)| i)
                .collect();
            seen.push(column);
            clusters.push(Cluster { members });
        }

        let statistics = Self::analyze(&clusters);
        ClusterSet {
            clusters,
            statistics,
        }
    }

    /// Population mean and population standard deviation of the cluster
    /// cardinalities (no Bessel correction). Empty input yields zeros.
    pub fn analyze(clusters: &[Cluster]) -> SizeStatistics {
        if clusters.is_empty() {
            return SizeStatistics { mean: 0.0, stdev: 0.0 };
        }
        let count = clusters.len() as f64;
        let sizes: Vec<f64> = clusters.iter().map(|c| c.size() as f64).collect();
        let mean = sizes.iter().sum::<f64>() / count;
        let variance = sizes.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / count;
        SizeStatistics {
            mean,
            stdev: variance.sqrt(),
        }
    }
}
