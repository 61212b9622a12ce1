//! SHA-256 checksum utilities
//!
//! Canonical checksum format (`sha256:<hex>`) used to decide whether a
//! freshly rendered solution differs from the copy on disk.

use sha2::{Digest, Sha256};

use crate::{Error, NormalizedPath, Result};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of string content.
pub fn compute_content_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Checksum of a file's raw bytes, BOM included.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub fn compute_file_checksum(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let content = std::fs::read(&native_path).map_err(|e| Error::io(&native_path, e))?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(format!("{}{:x}", PREFIX, hasher.finalize()))
}
