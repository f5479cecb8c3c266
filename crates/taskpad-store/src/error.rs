//! Error types for slot operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing or locating the task slot.
///
/// Reads deliberately have no error type: an unreadable or malformed
/// slot loads as an empty list.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No platform data directory could be resolved for the default slot.
    #[error("no data directory available on this platform")]
    NoDataDir,

    /// Failed to create the directory holding the slot.
    #[error("failed to create slot directory {path}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the task list to JSON.
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The atomic rename of the freshly written slot failed.
    #[error("failed to replace slot {path}")]
    Replace {
        /// Destination slot path.
        path: PathBuf,
        /// Underlying persist error.
        #[source]
        source: std::io::Error,
    },
}
