//! # pairing-analysis
//!
//! Pairing and cluster analysis for molecular trajectories: direct
//! adjacency from distance cutoffs, transitive closure of the pairing
//! relation, reduction into disjoint clusters, and a chunked per-frame
//! driver.
//!
//! Pipeline: distances → [`AdjacencyBuilder`] → [`ClosureEngine`] →
//! [`ClusterReducer`]; [`TrajectoryDriver`] threads it across frames,
//! reusing the previous frame's adjacency as an incremental base.

pub mod adjacency;
pub mod closure;
pub mod cluster;
pub mod driver;

pub use adjacency::AdjacencyBuilder;
pub use closure::ClosureEngine;
pub use cluster::ClusterReducer;
pub use driver::TrajectoryDriver;
