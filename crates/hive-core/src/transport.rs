//! Peer and transport abstractions
//!
//! The tracker never talks to peers directly. Direct exchange between peers
//! belongs to a separate transport layer (stream, datagram or relay based),
//! which plugs in through these traits. They carry no members yet.

/// A remote node participating in the network
pub trait RemoteNode: Send + Sync {}

/// Anything that carries messages between nodes
pub trait Transport: Send + Sync {}
