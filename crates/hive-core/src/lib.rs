//! Hive Core - Shared types and the file registry
//!
//! This crate provides the building blocks for the Hive bootstrap tracker:
//! the data model exchanged with peers and the concurrent registry mapping
//! file names to the peers that hold them.

pub mod error;
pub mod registry;
pub mod transport;
pub mod types;

pub use error::{Error, Result};
pub use registry::Registry;
pub use transport::{RemoteNode, Transport};
pub use types::*;

/// Default port the tracker listens on
pub const DEFAULT_PORT: u16 = 8080;
