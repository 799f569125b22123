//! Catalog error types.

use std::path::PathBuf;

/// Errors that can occur while loading or converting the asteroid catalog.
///
/// A failed load is reported once and the frame loop never starts; there is
/// no retry.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to open the catalog file.
    #[error("failed to open catalog {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed while streaming catalog bytes.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a converted binary catalog.
    #[error("failed to write catalog {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
