//! Analysis configuration.
//!
//! Serde-based TOML parsing into a type-safe struct; every field has a
//! default so partial files load cleanly. `validate` fails fast before any
//! analysis runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::PairingError;

fn default_cutoff() -> f64 {
    0.8
}

fn default_chunk_size() -> usize {
    10
}

/// Parameters for a pairing analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Distance cutoff below which two sites pair directly (same length
    /// unit as the trajectory's distances).
    #[serde(default = "default_cutoff")]
    pub cutoff: f64,

    /// Frames per chunk: the adjacency is rebuilt from raw distances at
    /// every multiple of this, and relaxed incrementally in between.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cutoff: default_cutoff(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl AnalysisConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, PairingError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, PairingError> {
        let config: Self =
            toml::from_str(content).map_err(|e| PairingError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks parameter domains.
    pub fn validate(&self) -> Result<(), PairingError> {
        if !(self.cutoff > 0.0) || !self.cutoff.is_finite() {
            return Err(PairingError::domain(format!(
                "cutoff must be positive and finite, got {}",
                self.cutoff
            )));
        }
        if self.chunk_size == 0 {
            return Err(PairingError::domain("chunk_size must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AnalysisConfig::default();
        config.validate().expect("default config");
        assert_eq!(config.chunk_size, 10);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = AnalysisConfig::from_toml_str("cutoff = 1.2\n").expect("parse");
        assert!((config.cutoff - 1.2).abs() < f64::EPSILON);
        assert_eq!(config.chunk_size, 10);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(AnalysisConfig::from_toml_str("cutoff = 0.0\n").is_err());
        assert!(AnalysisConfig::from_toml_str("cutoff = -1.0\n").is_err());
        assert!(AnalysisConfig::from_toml_str("chunk_size = 0\n").is_err());
        assert!(AnalysisConfig::from_toml_str("cutoff = \"wide\"\n").is_err());
    }
}
