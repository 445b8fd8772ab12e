//! Registry of which peers hold which files
//!
//! A single lock guards the whole map. Both operations hold it only for the
//! map access itself, so every registration and lookup is totally ordered
//! and callers never observe a half-applied batch.

use crate::{Error, FileName, PeerId, RegistryStats, Result};
use parking_lot::Mutex;
use std::collections::HashMap;

/// In-memory mapping from file name to the peers that registered it
#[derive(Debug, Default)]
pub struct Registry {
    /// Peers per file, in registration order (duplicates kept)
    entries: Mutex<HashMap<FileName, Vec<PeerId>>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `peer` holds every file in `files`
    ///
    /// All appends of one call happen under a single lock acquisition.
    /// Registering the same pair twice stores it twice. Returns the number
    /// of files registered.
    pub fn register(&self, peer: &str, files: &[FileName]) -> usize {
        if files.is_empty() {
            return 0;
        }

        let mut entries = self.entries.lock();
        for file in files {
            entries
                .entry(file.clone())
                .or_insert_with(Vec::new)
                .push(peer.to_string());
        }
        drop(entries);

        tracing::debug!("Registered {} files for peer {:?}", files.len(), peer);
        files.len()
    }

    /// Get a snapshot of the peers holding `file`
    ///
    /// Fails with [`Error::NotFound`] if the file was never registered, and
    /// with [`Error::InvalidRequest`] for an empty name.
    pub fn find(&self, file: &str) -> Result<Vec<PeerId>> {
        if file.is_empty() {
            return Err(Error::InvalidRequest("empty file name".to_string()));
        }

        self.entries
            .lock()
            .get(file)
            .cloned()
            .ok_or_else(|| Error::NotFound(file.to_string()))
    }

    /// Get statistics about the registry
    pub fn stats(&self) -> RegistryStats {
        let entries = self.entries.lock();
        RegistryStats {
            file_count: entries.len(),
            entry_count: entries.values().map(Vec::len).sum(),
        }
    }
}
