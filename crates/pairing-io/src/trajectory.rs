//! In-memory position trajectory.
//!
//! Stands in for an external trajectory/geometry library: frames are
//! lists of 3D site positions (already center-of-mass-reduced), distances
//! are plain Euclidean. Loadable from a JSON fixture for tests and demos.

use std::path::Path;

use serde::{Deserialize, Serialize};

use pairing_core::{GeometryProvider, PairingError, TrajectoryProvider};

/// A finite, re-iterable sequence of frames of 3D site positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionTrajectory {
    frames: Vec<Vec<[f64; 3]>>,
}

impl PositionTrajectory {
    /// Wraps per-frame position lists. Every frame must carry the same
    /// number of sites and the trajectory must not be empty.
    pub fn new(frames: Vec<Vec<[f64; 3]>>) -> Result<Self, PairingError> {
        let sites = match frames.first() {
            Some(frame) => frame.len(),
            None => {
                return Err(PairingError::domain(
                    "trajectory must contain at least one frame",
                ))
            }
        };
        for (t, frame) in frames.iter().enumerate() {
            if frame.len() != sites {
                return Err(PairingError::shape(format!(
                    "frame {t} has {} sites, expected {sites}",
                    frame.len()
                )));
            }
        }
        Ok(Self { frames })
    }

    /// Loads a trajectory from a JSON file (array of frames, each an
    /// array of `[x, y, z]` site positions).
    pub fn from_json_file(path: &Path) -> Result<Self, PairingError> {
        let content = std::fs::read_to_string(path)?;
        let frames: Vec<Vec<[f64; 3]>> = serde_json::from_str(&content)?;
        let trajectory = Self::new(frames)?;
        log::debug!(
            "loaded trajectory from {}: {} frames, {} sites",
            path.display(),
            trajectory.frame_count(),
            trajectory.site_count()
        );
        Ok(trajectory)
    }

    /// Positions of one frame.
    pub fn positions(&self, frame: usize) -> Option<&[[f64; 3]]> {
        self.frames.get(frame).map(Vec::as_slice)
    }
}

impl GeometryProvider for PositionTrajectory {
    fn distance(&self, site_i: usize, site_j: usize, frame: usize) -> Result<f64, PairingError> {
        let positions = self.frames.get(frame).ok_or_else(|| {
            PairingError::geometry(format!(
                "frame {frame} out of range ({} frames)",
                self.frames.len()
            ))
        })?;
        let lookup = |site: usize| {
            positions.get(site).ok_or_else(|| {
                PairingError::geometry(format!(
                    "site {site} out of range ({} sites)",
                    positions.len()
                ))
            })
        };
        let a = lookup(site_i)?;
        let b = lookup(site_j)?;
        let dx = a[0] - b[0];
        let dy = a[1] - b[1];
        let dz = a[2] - b[2];
        Ok((dx * dx + dy * dy + dz * dz).sqrt())
    }
}

impl TrajectoryProvider for PositionTrajectory {
    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn site_count(&self) -> usize {
        self.frames[0].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_ragged_input() {
        assert!(PositionTrajectory::new(vec![]).is_err());

        let ragged = vec![
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
            vec![[0.0, 0.0, 0.0]],
        ];
        let err = PositionTrajectory::new(ragged).unwrap_err();
        assert!(matches!(err, PairingError::Shape(_)));
    }

    #[test]
    fn euclidean_distances() {
        let traj = PositionTrajectory::new(vec![vec![
            [0.0, 0.0, 0.0],
            [3.0, 4.0, 0.0],
        ]])
        .expect("trajectory");
        let d = traj.distance(0, 1, 0).expect("distance");
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_lookups_are_geometry_errors() {
        let traj = PositionTrajectory::new(vec![vec![[0.0, 0.0, 0.0]]]).expect("trajectory");
        assert!(matches!(
            traj.distance(0, 0, 9),
            Err(PairingError::Geometry(_))
        ));
        assert!(matches!(
            traj.distance(0, 7, 0),
            Err(PairingError::Geometry(_))
        ));
    }
}
