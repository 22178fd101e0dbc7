//! # pairing-core
//!
//! Core types, traits, and errors for pairing/cluster analysis of
//! molecular trajectories.
//!
//! This crate defines the fundamental abstractions used across all pairing
//! components:
//! - **Types**: adjacency and closure matrices, clusters, per-frame records
//! - **Traits**: GeometryProvider, TrajectoryProvider
//! - **Errors**: unified error handling with PairingError
//! - **Config**: TOML-backed analysis parameters

pub mod config;
pub mod errors;
pub mod traits;
pub mod types;

// Re-export commonly used items
pub use config::AnalysisConfig;
pub use errors::PairingError;
pub use traits::{GeometryProvider, TrajectoryProvider};
pub use types::{
    AdjacencyMatrix, Cluster, ClusterSet, ClosureMatrix, FrameRecord, FrameSeries, Label,
    SizeStatistics,
};
