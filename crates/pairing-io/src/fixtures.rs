//! Reference data resolution.
//!
//! Fixture files ship under this crate's `data/` directory; tests and
//! examples resolve them by logical name rather than hard-coding paths.

use std::path::PathBuf;

use pairing_core::PairingError;

/// Resolves a reference data file by name to its full path.
///
/// Fails with [`PairingError::NotFound`] if the file does not exist.
pub fn reference_path(name: &str) -> Result<PathBuf, PairingError> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(name);
    if !path.exists() {
        return Err(PairingError::not_found(path));
    }
    Ok(path)
}
