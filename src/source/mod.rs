// src/source/mod.rs
use std::fs;
use std::path::Path;
use crate::utils::error::LoadError;

/// Reads a saved search-results page into memory.
/// The file must be valid UTF-8; any read failure is fatal for the run.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    let path = path.as_ref();
    tracing::info!("Reading HTML document from: {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}
