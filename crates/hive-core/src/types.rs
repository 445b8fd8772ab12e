//! Core data types for Hive

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier of a remote peer
pub type PeerId = String;

/// Opaque name of a shared file
pub type FileName = String;

/// Body of a registration: one peer announcing the files it holds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Peer announcing the files
    #[serde(default, deserialize_with = "null_as_default")]
    pub peer: PeerId,
    /// Files held by the peer
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<FileName>,
}

impl RegisterRequest {
    /// Create a new registration for `peer`
    pub fn new(peer: impl Into<PeerId>, files: Vec<FileName>) -> Self {
        Self {
            peer: peer.into(),
            files,
        }
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Result of a lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindResponse {
    /// Peers known to hold the file, in registration order
    pub peers: Vec<PeerId>,
}

/// Statistics about the registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Number of distinct file names
    #[serde(rename = "files")]
    pub file_count: usize,
    /// Total number of (file, peer) entries, duplicates included
    #[serde(rename = "entries")]
    pub entry_count: usize,
}
