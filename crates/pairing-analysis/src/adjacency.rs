//! Direct-pairing adjacency from inter-site distances.
//!
//! Two sites pair directly when their distance is below the cutoff. The
//! builder produces a symmetric 0/1 matrix with unit diagonal (every site
//! pairs with itself, so every site seeds its own cluster), and relaxes an
//! existing adjacency incrementally as distances drift past the cutoff.

use nalgebra::DMatrix;
use pairing_core::{AdjacencyMatrix, Label, PairingError};

/// Builds and incrementally relaxes direct-pairing adjacency matrices.
pub struct AdjacencyBuilder {
    cutoff: f64,
}

impl AdjacencyBuilder {
    /// Creates a builder for the given distance cutoff.
    ///
    /// Fails with a domain error if the cutoff is not positive and finite.
    pub fn new(cutoff: f64) -> Result<Self, PairingError> {
        if !(cutoff > 0.0) || !cutoff.is_finite() {
            return Err(PairingError::domain(format!(
                "cutoff must be positive and finite, got {cutoff}"
            )));
        }
        Ok(Self { cutoff })
    }

    /// The configured cutoff.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Derives a fresh adjacency matrix from a square pairwise distance
    /// matrix: diagonal 1, off-diagonal 1 iff `distance < cutoff`, written
    /// symmetrically.
    pub fn build(&self, distances: &DMatrix<f64>) -> Result<AdjacencyMatrix, PairingError> {
        if !distances.is_square() {
            return Err(PairingError::shape(format!(
                "distance matrix must be square, got {}x{}",
                distances.nrows(),
                distances.ncols()
            )));
        }
        let n = distances.nrows();
        let mut labels: DMatrix<Label> = DMatrix::zeros(n, n);
        for i in 0..n {
            labels[(i, i)] = 1;
            for j in (i + 1)..n {
                if distances[(i, j)] < self.cutoff {
                    labels[(i, j)] = 1;
                    labels[(j, i)] = 1;
                }
            }
        }
        AdjacencyMatrix::from_labels(labels)
    }

    /// Relaxes an adjacency against updated distances: every currently-set
    /// off-diagonal edge whose new distance is at or beyond the cutoff is
    /// cleared in both directions. Edges are never added; within a chunk a
    /// broken pair stays broken until the next full rebuild.
    ///
    /// Takes ownership of the adjacency and returns the relaxed matrix, so
    /// a caller's original cannot alias the carried-forward state.
    pub fn update(
        &self,
        mut adjacency: AdjacencyMatrix,
        distances: &DMatrix<f64>,
    ) -> Result<AdjacencyMatrix, PairingError> {
        let n = adjacency.site_count();
        if distances.nrows() != n || distances.ncols() != n {
            return Err(PairingError::shape(format!(
                "distance matrix is {}x{}, adjacency has {} sites",
                distances.nrows(),
                distances.ncols(),
                n
            )));
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if adjacency.is_paired(i, j) && distances[(i, j)] >= self.cutoff {
                    adjacency.clear_edge(i, j);
                }
            }
        }
        Ok(adjacency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distances(n: usize, data: &[f64]) -> DMatrix<f64> {
        DMatrix::from_row_slice(n, n, data)
    }

    #[test]
    fn rejects_non_positive_cutoff() {
        assert!(matches!(
            AdjacencyBuilder::new(0.0),
            Err(PairingError::Domain(_))
        ));
        assert!(AdjacencyBuilder::new(-0.5).is_err());
        assert!(AdjacencyBuilder::new(f64::NAN).is_err());
        assert!(AdjacencyBuilder::new(0.8).is_ok());
    }

    #[test]
    fn build_rejects_non_square_distances() {
        let builder = AdjacencyBuilder::new(1.0).unwrap();
        let d = DMatrix::from_row_slice(2, 3, &[0.0; 6]);
        assert!(matches!(builder.build(&d), Err(PairingError::Shape(_))));
    }

    #[test]
    fn build_sets_symmetric_edges_below_cutoff() {
        let builder = AdjacencyBuilder::new(1.0).unwrap();
        let d = distances(
            3,
            &[
                0.0, 0.5, 2.0, //
                0.5, 0.0, 1.0, //
                2.0, 1.0, 0.0,
            ],
        );
        let a = builder.build(&d).expect("build");
        assert!(a.is_paired(0, 1));
        assert!(a.is_paired(1, 0));
        // exactly at cutoff is not a pair
        assert!(!a.is_paired(1, 2));
        assert!(!a.is_paired(0, 2));
        for i in 0..3 {
            assert_eq!(a.get(i, i), 1);
        }
    }

    #[test]
    fn update_clears_broken_pairs_and_never_adds() {
        let builder = AdjacencyBuilder::new(1.0).unwrap();
        let d0 = distances(
            3,
            &[
                0.0, 0.5, 2.0, //
                0.5, 0.0, 2.0, //
                2.0, 2.0, 0.0,
            ],
        );
        let a = builder.build(&d0).expect("build");

        // pair (0,1) drifts apart, pair (0,2) comes within cutoff
        let d1 = distances(
            3,
            &[
                0.0, 1.5, 0.4, //
                1.5, 0.0, 2.0, //
                0.4, 2.0, 0.0,
            ],
        );
        let a = builder.update(a, &d1).expect("update");
        assert!(!a.is_paired(0, 1));
        assert!(!a.is_paired(1, 0));
        // no new edge despite d < cutoff
        assert!(!a.is_paired(0, 2));
        assert_eq!(a.get(1, 1), 1);
    }

    #[test]
    fn update_rejects_dimension_mismatch() {
        let builder = AdjacencyBuilder::new(1.0).unwrap();
        let a = builder.build(&distances(2, &[0.0, 0.5, 0.5, 0.0])).unwrap();
        let d = DMatrix::from_row_slice(3, 3, &[0.0; 9]);
        assert!(matches!(
            builder.update(a, &d),
            Err(PairingError::Shape(_))
        ));
    }
}
