//! Error types for skillpack-core

use std::path::PathBuf;

/// Result type for skillpack-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or repairing plugins
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bundle key not present in the catalog
    #[error("Unknown bundle: {name} (available: {})", available.join(", "))]
    UnknownBundle { name: String, available: Vec<String> },

    /// A directory the layout requires does not exist
    #[error("Directory not found: {path}")]
    MissingDirectory { path: PathBuf },

    /// Batch run finished with failures
    #[error("{failed} of {total} {what} failed")]
    BatchFailed {
        what: String,
        failed: usize,
        total: usize,
    },

    /// Validation found errors
    #[error("Validation failed with {count} error(s)")]
    ValidationFailed { count: usize },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from skillpack-fs
    #[error(transparent)]
    Fs(#[from] skillpack_fs::Error),

    /// Metadata error from skillpack-meta
    #[error(transparent)]
    Meta(#[from] skillpack_meta::Error),
}
