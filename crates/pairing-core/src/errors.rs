//! Error types for pairing analysis.
//!
//! One unified error enum for all core operations; everything fails fast
//! with a structured kind rather than returning partial or sentinel results.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for all pairing operations.
#[derive(Error, Debug)]
pub enum PairingError {
    /// Matrix shape errors (non-square input, mismatched dimensions)
    #[error("shape error: {0}")]
    Shape(String),

    /// Parameter domain errors (e.g. non-positive cutoff)
    #[error("domain error: {0}")]
    Domain(String),

    /// Missing reference data file
    #[error("reference data not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// A geometry collaborator failed to produce a distance.
    /// Propagated as-is, never retried.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Frame-level failure raised by the trajectory driver. Carries the
    /// frame index; frames emitted before it remain valid.
    #[error("frame {frame}: {source}")]
    Frame {
        frame: usize,
        #[source]
        source: Box<PairingError>,
    },

    /// Configuration file / validation errors
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O errors (fixture and trajectory file reading)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PairingError {
    /// Creates a shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        PairingError::Shape(message.into())
    }

    /// Creates a domain error.
    pub fn domain(message: impl Into<String>) -> Self {
        PairingError::Domain(message.into())
    }

    /// Creates a not-found error for a reference data path.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        PairingError::NotFound { path: path.into() }
    }

    /// Creates a geometry error.
    pub fn geometry(message: impl Into<String>) -> Self {
        PairingError::Geometry(message.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        PairingError::Config(message.into())
    }

    /// Wraps an error with the trajectory frame it occurred in.
    pub fn at_frame(frame: usize, source: PairingError) -> Self {
        PairingError::Frame {
            frame,
            source: Box::new(source),
        }
    }

    /// Returns the frame index if this is a frame-level failure.
    pub fn frame(&self) -> Option<usize> {
        match self {
            PairingError::Frame { frame, .. } => Some(*frame),
            _ => None,
        }
    }
}
