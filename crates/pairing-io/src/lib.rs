//! # pairing-io
//!
//! Collaborator implementations for pairing analysis: reference data
//! resolution and an in-memory position trajectory with Euclidean
//! distances. Real trajectory file formats live outside this workspace;
//! anything that can produce per-frame positions can feed
//! [`PositionTrajectory`] or implement the core traits directly.

pub mod fixtures;
pub mod trajectory;

pub use fixtures::reference_path;
pub use trajectory::PositionTrajectory;
