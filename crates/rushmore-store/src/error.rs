//! # Store Error Types
//!
//! Error types for order store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in console) ← Logged, printed, back to the menu             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing order file is not an error anywhere in this crate. A corrupt
//! one is only an error for statistics; appending recovers from it and
//! listing reports it as "no orders".

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Order store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the order file failed.
    ///
    /// ## When This Occurs
    /// - Permission denied
    /// - Disk full
    /// - The path is a directory
    #[error("Order file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The order file exists but is not a JSON array.
    ///
    /// ## When This Occurs
    /// - Truncated or hand-edited file
    /// - Empty file
    /// - Valid JSON that is not an array
    #[error("Order file is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// Encoding the document failed.
    #[error("Failed to encode orders: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    /// Creates an Io error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for [`StoreError::Corrupt`].
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt(_))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
