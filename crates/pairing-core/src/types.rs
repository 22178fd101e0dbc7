//! Core data types for pairing and cluster analysis.
//!
//! Sites are abstract indices `0..N-1` (one per logical pairing entity,
//! e.g. a molecule's center of mass). Direct pairing lives in
//! [`AdjacencyMatrix`], transitive connectivity in [`ClosureMatrix`], and
//! the per-frame partition in [`ClusterSet`].

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::errors::PairingError;

/// Integral connectivity label. Non-negative; combined by element-wise max,
/// so an existing connectivity marker is never overwritten by zero.
pub type Label = i32;

/// Symmetric 0/1 direct-pairing matrix with unit diagonal.
///
/// Invariants are enforced at construction: the matrix is square, every
/// entry is 0 or 1, `A[i][i] == 1`, and `A[i][j] == A[j][i]`. Mutation goes
/// through [`AdjacencyMatrix::clear_edge`], which preserves all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    matrix: DMatrix<Label>,
}

impl AdjacencyMatrix {
    /// Wraps a raw label matrix, validating every invariant.
    pub fn from_labels(matrix: DMatrix<Label>) -> Result<Self, PairingError> {
        if !matrix.is_square() {
            return Err(PairingError::shape(format!(
                "adjacency matrix must be square, got {}x{}",
                matrix.nrows(),
                matrix.ncols()
            )));
        }
        let n = matrix.nrows();
        for i in 0..n {
            if matrix[(i, i)] != 1 {
                return Err(PairingError::domain(format!(
                    "adjacency diagonal must be 1, got {} at site {}",
                    matrix[(i, i)],
                    i
                )));
            }
            for j in (i + 1)..n {
                let a = matrix[(i, j)];
                let b = matrix[(j, i)];
                if a != b {
                    return Err(PairingError::domain(format!(
                        "adjacency must be symmetric, entries ({i},{j}) and ({j},{i}) differ"
                    )));
                }
                if a != 0 && a != 1 {
                    return Err(PairingError::domain(format!(
                        "adjacency entries must be 0 or 1, got {a} at ({i},{j})"
                    )));
                }
            }
        }
        Ok(Self { matrix })
    }

    /// Number of sites N.
    pub fn site_count(&self) -> usize {
        self.matrix.nrows()
    }

    /// Entry at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Label {
        self.matrix[(i, j)]
    }

    /// True if sites `i` and `j` are directly paired (`i != j`).
    pub fn is_paired(&self, i: usize, j: usize) -> bool {
        i != j && self.matrix[(i, j)] != 0
    }

    /// Number of set entries in row `i`, self included. A count of 1 means
    /// the site has no partner.
    pub fn partner_count(&self, i: usize) -> usize {
        self.matrix.row(i).iter().filter(|&&v| v != 0).count()
    }

    /// Clears the edge between two distinct sites, both directions.
    /// Clearing the diagonal is not possible through this interface.
    pub fn clear_edge(&mut self, i: usize, j: usize) {
        if i != j {
            self.matrix[(i, j)] = 0;
            self.matrix[(j, i)] = 0;
        }
    }

    /// Borrow of the underlying label matrix.
    pub fn as_labels(&self) -> &DMatrix<Label> {
        &self.matrix
    }

    /// Consumes the wrapper, returning the label matrix.
    pub fn into_labels(self) -> DMatrix<Label> {
        self.matrix
    }
}

/// Transitive-closure ("indirect connectivity") matrix.
///
/// Each column is the connectivity label vector of one site: sites that are
/// transitively reachable from one another carry identical nonzero columns.
/// Sites with no partner keep their original direct-adjacency column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosureMatrix {
    matrix: DMatrix<Label>,
}

impl ClosureMatrix {
    /// Wraps a raw label matrix. Requires a square matrix with
    /// non-negative labels.
    pub fn from_labels(matrix: DMatrix<Label>) -> Result<Self, PairingError> {
        if !matrix.is_square() {
            return Err(PairingError::shape(format!(
                "closure matrix must be square, got {}x{}",
                matrix.nrows(),
                matrix.ncols()
            )));
        }
        if matrix.iter().any(|&v| v < 0) {
            return Err(PairingError::domain(
                "closure labels must be non-negative",
            ));
        }
        Ok(Self { matrix })
    }

    /// Number of sites N.
    pub fn site_count(&self) -> usize {
        self.matrix.nrows()
    }

    /// Entry at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Label {
        self.matrix[(i, j)]
    }

    /// Connectivity label column for site `j`.
    pub fn label_column(&self, j: usize) -> Vec<Label> {
        self.matrix.column(j).iter().copied().collect()
    }

    /// Borrow of the underlying label matrix.
    pub fn as_labels(&self) -> &DMatrix<Label> {
        &self.matrix
    }
}

/// One cluster: a maximal set of mutually reachable sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Member site indices, ascending.
    pub members: Vec<usize>,
}

impl Cluster {
    /// Cluster cardinality.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// True if the site belongs to this cluster.
    pub fn contains(&self, site: usize) -> bool {
        self.members.binary_search(&site).is_ok()
    }
}

/// Membership-size statistics over the clusters of one frame.
///
/// `stdev` is the population standard deviation (no Bessel correction).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeStatistics {
    pub mean: f64,
    pub stdev: f64,
}

/// The disjoint clusters of one frame, in first-seen column order, plus
/// their size statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSet {
    pub clusters: Vec<Cluster>,
    pub statistics: SizeStatistics,
}

impl ClusterSet {
    /// Number of clusters in the frame.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Iterates clusters in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    /// Total number of sites covered by the clusters. Equals the site
    /// count whenever the set is a valid partition.
    pub fn covered_sites(&self) -> usize {
        self.clusters.iter().map(Cluster::size).sum()
    }
}

/// Full analysis result for a single trajectory frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Frame index within the trajectory.
    pub frame: usize,
    pub adjacency: AdjacencyMatrix,
    pub closure: ClosureMatrix,
    pub clusters: ClusterSet,
}

/// Ordered per-frame results. Records pushed before a frame failure
/// remain valid; the driver never rolls back emitted frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSeries {
    frames: Vec<FrameRecord>,
}

impl FrameSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: FrameRecord) {
        self.frames.push(record);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn last(&self) -> Option<&FrameRecord> {
        self.frames.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrameRecord> {
        self.frames.iter()
    }

    /// Consumes the series, returning the records.
    pub fn into_records(self) -> Vec<FrameRecord> {
        self.frames
    }
}

impl<'a> IntoIterator for &'a FrameSeries {
    type Item = &'a FrameRecord;
    type IntoIter = std::slice::Iter<'a, FrameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize, data: &[Label]) -> DMatrix<Label> {
        DMatrix::from_row_slice(n, n, data)
    }

    #[test]
    fn adjacency_rejects_non_square() {
        let m = DMatrix::from_row_slice(2, 3, &[1, 0, 0, 0, 1, 0]);
        let err = AdjacencyMatrix::from_labels(m).unwrap_err();
        assert!(matches!(err, PairingError::Shape(_)));
    }

    #[test]
    fn adjacency_rejects_asymmetry_and_bad_diagonal() {
        let asym = labels(2, &[1, 1, 0, 1]);
        assert!(AdjacencyMatrix::from_labels(asym).is_err());

        let no_self = labels(2, &[0, 0, 0, 1]);
        assert!(AdjacencyMatrix::from_labels(no_self).is_err());
    }

    #[test]
    fn adjacency_clear_edge_is_symmetric_and_keeps_diagonal() {
        let mut a = AdjacencyMatrix::from_labels(labels(3, &[1, 1, 0, 1, 1, 0, 0, 0, 1])).unwrap();
        a.clear_edge(0, 1);
        assert_eq!(a.get(0, 1), 0);
        assert_eq!(a.get(1, 0), 0);
        a.clear_edge(2, 2);
        assert_eq!(a.get(2, 2), 1);
        assert_eq!(a.partner_count(0), 1);
    }

    #[test]
    fn cluster_set_coverage_sums_member_counts() {
        let set = ClusterSet {
            clusters: vec![
                Cluster { members: vec![0, 1, 2, 4] },
                Cluster { members: vec![3] },
            ],
            statistics: SizeStatistics { mean: 2.5, stdev: 1.5 },
        };
        assert_eq!(set.len(), 2);
        assert_eq!(set.covered_sites(), 5);
        assert!(set.clusters[0].contains(4));
        assert!(!set.clusters[1].contains(0));
    }
}
