//! Error types for registry operations.

use thiserror::Error;

/// Errors that can occur when mutating the report store.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The session artifact cap was reached. Raster payloads are large;
    /// an unbounded in-memory registry could exhaust memory in long
    /// sessions.
    #[error("report store is full ({cap} artifacts)")]
    CapacityExceeded { cap: usize },
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
