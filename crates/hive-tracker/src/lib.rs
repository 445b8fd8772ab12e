//! Hive Tracker Library
//!
//! HTTP front end for the Hive registry: peers announce the files they hold
//! and query which peers hold a given file.

pub mod config;
pub mod error;
pub mod handler;
pub mod server;

pub use config::Config;
pub use error::{TrackerError, TrackerResult};
pub use server::{bind, router, serve};
