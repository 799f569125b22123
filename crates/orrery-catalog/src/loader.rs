//! Chunked catalog loading with progress reporting.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::catalog::AsteroidCatalog;
use crate::error::CatalogError;

const CHUNK_BYTES: usize = 64 * 1024;

/// Load a packed binary catalog from disk.
///
/// `progress` is invoked after every chunk with `(bytes_loaded, total_bytes)`.
/// Loading completes (or fails) before the frame loop ever starts; a failed
/// load is reported once through the returned error and never retried.
pub fn load_catalog(
    path: &Path,
    mut progress: impl FnMut(u64, u64),
) -> Result<AsteroidCatalog, CatalogError> {
    let mut file = File::open(path).map_err(|source| CatalogError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let total = file
        .metadata()
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    let mut bytes = Vec::with_capacity(total as usize);
    let mut chunk = [0u8; CHUNK_BYTES];
    let mut loaded = 0u64;
    loop {
        let n = file.read(&mut chunk).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if n == 0 {
            break;
        }
        bytes.extend_from_slice(&chunk[..n]);
        loaded += n as u64;
        progress(loaded, total);
    }

    let catalog = AsteroidCatalog::from_bytes(&bytes);
    info!(
        path = %path.display(),
        asteroids = catalog.len(),
        "loaded asteroid catalog"
    );
    Ok(catalog)
}
