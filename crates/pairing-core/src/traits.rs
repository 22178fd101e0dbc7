//! Collaborator traits consumed by the analysis core.
//!
//! Trajectory loading, distance computation, and center-of-mass reduction
//! are external concerns; the core sees them only through these traits.
//! Frames are assumed center-of-mass-reduced already, so a "site" is one
//! logical pairing entity per index.

use nalgebra::DMatrix;

use crate::errors::PairingError;

/// Per-frame inter-site distance source. Deterministic per frame.
pub trait GeometryProvider {
    /// Distance between two sites at the given frame.
    ///
    /// A failure here (malformed topology, missing coordinates) surfaces
    /// as [`PairingError::Geometry`] and is propagated, never retried.
    fn distance(&self, site_i: usize, site_j: usize, frame: usize) -> Result<f64, PairingError>;
}

/// An ordered, finite, re-iterable sequence of frames.
pub trait TrajectoryProvider: GeometryProvider {
    /// Number of frames in the trajectory.
    fn frame_count(&self) -> usize;

    /// Number of sites per frame. Stable across the whole sequence.
    fn site_count(&self) -> usize;

    /// Assembles the symmetric N×N distance matrix for one frame.
    /// Diagonal entries are zero.
    fn distance_matrix(&self, frame: usize) -> Result<DMatrix<f64>, PairingError> {
        let n = self.site_count();
        let mut distances = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = self.distance(i, j, frame)?;
                distances[(i, j)] = d;
                distances[(j, i)] = d;
            }
        }
        Ok(distances)
    }
}
