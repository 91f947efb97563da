//! # Storage Backends
//!
//! Where the order document's bytes live.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  StorageBackend                                                         │
//! │  ├── load() → None            nothing stored yet                        │
//! │  ├── load() → Some(bytes)     whole document, possibly corrupt          │
//! │  └── save(bytes)              replace the whole document                │
//! │                                                                         │
//! │  FileBackend    one file on disk, truncated and rewritten on save       │
//! │  MemoryBackend  a Vec<u8>, for tests and dry runs                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Backends know nothing about JSON; see [`crate::document`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Raw byte storage for the order document.
pub trait StorageBackend {
    /// Reads the whole document, or `None` if nothing has been stored yet.
    fn load(&self) -> StoreResult<Option<Vec<u8>>>;

    /// Replaces the whole document.
    fn save(&mut self, bytes: &[u8]) -> StoreResult<()>;

    /// Short description for log lines.
    fn describe(&self) -> String;
}

// =============================================================================
// File Backend
// =============================================================================

/// The order document as one file on disk.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileBackend { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                debug!(path = ?self.path, bytes = bytes.len(), "Loaded order file");
                Ok(Some(bytes))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = ?self.path, "Order file does not exist yet");
                Ok(None)
            }
            Err(err) => Err(StoreError::io(&self.path, err)),
        }
    }

    fn save(&mut self, bytes: &[u8]) -> StoreResult<()> {
        fs::write(&self.path, bytes).map_err(|err| StoreError::io(&self.path, err))?;
        debug!(path = ?self.path, bytes = bytes.len(), "Wrote order file");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// =============================================================================
// Memory Backend
// =============================================================================

/// The order document held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    contents: Option<Vec<u8>>,
}

impl MemoryBackend {
    /// An empty backend: behaves like a missing file.
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// A backend that already holds `bytes`.
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        MemoryBackend {
            contents: Some(bytes.into()),
        }
    }

    /// Current document, if any.
    pub fn contents(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.contents.clone())
    }

    fn save(&mut self, bytes: &[u8]) -> StoreResult<()> {
        self.contents = Some(bytes.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
