//! Session-scoped artifact registry for report assembly.
//!
//! The registry collects heterogeneous captured artifacts (rasterized
//! charts, inlined-style table snapshots, purpose-built fragments) under
//! caller-supplied unique keys until a multi-artifact export consumes them.
//!
//! # Guarantees
//!
//! - Registration is idempotent per key: a second insert with an existing
//!   key is rejected without mutation.
//! - Iteration order is stable FIFO by insertion; it is the page order of
//!   the exported report.
//! - The store is bounded (default 64 artifacts) so raster payloads cannot
//!   exhaust memory in long sessions.
//!
//! # Example
//!
//! ```
//! use tsh_capture::Payload;
//! use tsh_registry::{Artifact, ReportStore};
//!
//! let mut store = ReportStore::new();
//! let artifact = Artifact::new(
//!     "Cash Flow",
//!     "cash-flow|2025-01",
//!     "2025-01",
//!     Payload::Html { markup: "<table></table>".to_string() },
//! );
//! assert!(store.insert(artifact).unwrap());
//! assert_eq!(store.list().len(), 1);
//! ```

pub mod artifact;
pub mod error;
pub mod store;

pub use artifact::Artifact;
pub use error::{RegistryError, Result};
pub use store::{ReportStore, DEFAULT_CAPACITY};
// Payload lives with the capture strategies; re-export it for callers that
// only depend on the registry.
pub use tsh_capture::Payload;
