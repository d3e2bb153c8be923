//! Error types for byte sources.

use std::path::PathBuf;

/// Errors that can occur while resolving or reading a locator.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Nothing exists at the resolved location.
    #[error("resource not found: {path}")]
    NotFound {
        /// The path or memory key that was looked up.
        path: String,
    },

    /// Reading from disk failed for a reason other than absence.
    #[error("IO error reading '{}': {source}", path.display())]
    Io {
        /// The path that failed to load.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The locator cannot be mapped to any supported byte source.
    #[error("invalid locator '{locator}': {reason}")]
    InvalidLocator {
        /// The locator as given.
        locator: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Work was submitted to a task pool that no longer runs.
    #[error("task pool has been shut down")]
    PoolShutDown,
}

impl AssetError {
    /// Returns `true` when the resource simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AssetError::NotFound { .. })
    }
}

/// Result type alias for byte source operations.
pub type AssetResult<T> = Result<T, AssetError>;
