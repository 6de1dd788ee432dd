//! Error types for `finaura-core`.

use std::path::PathBuf;

/// Errors from writing the site to disk.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The output path exists and is not a directory.
    #[error("output path '{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Creating a directory or writing a file failed.
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The export manifest could not be serialized.
    #[error("failed to serialize export manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
