//! The in-memory, session-scoped report store.

use crate::artifact::Artifact;
use crate::error::{RegistryError, Result};
use tracing::{debug, info};

/// Default artifact cap per session.
pub const DEFAULT_CAPACITY: usize = 64;

/// Session-scoped, insertion-ordered collection of captured artifacts.
///
/// Constructed once per session and injected into every component that
/// needs it; never ambient global state. All mutation is synchronous, so
/// no interleaving can observe a half-applied change.
#[derive(Debug)]
pub struct ReportStore {
    artifacts: Vec<Artifact>,
    capacity: usize,
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportStore {
    /// Create an empty store with the default artifact cap.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty store with an explicit artifact cap.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            artifacts: Vec::new(),
            capacity,
        }
    }

    /// Insert an artifact.
    ///
    /// Returns `Ok(false)` without mutating when the key is already
    /// present; this is the sole duplicate-prevention mechanism, and
    /// callers surface it as "already added", not as an error. Returns
    /// `Ok(true)` and appends otherwise.
    pub fn insert(&mut self, artifact: Artifact) -> Result<bool> {
        if self.contains(&artifact.unique_key) {
            debug!(key = %artifact.unique_key, "duplicate artifact ignored");
            return Ok(false);
        }
        if self.artifacts.len() >= self.capacity {
            return Err(RegistryError::CapacityExceeded { cap: self.capacity });
        }
        info!(
            key = %artifact.unique_key,
            view = %artifact.view_name,
            period = %artifact.period,
            "artifact registered"
        );
        self.artifacts.push(artifact);
        Ok(true)
    }

    /// Read-only view in insertion order; the canonical page order of the
    /// final report.
    pub fn list(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Remove by key. Idempotent: removing an absent key is a no-op.
    /// Returns whether an artifact was removed.
    pub fn remove(&mut self, unique_key: &str) -> bool {
        let before = self.artifacts.len();
        self.artifacts.retain(|a| a.unique_key != unique_key);
        let removed = self.artifacts.len() != before;
        if removed {
            debug!(key = unique_key, "artifact removed");
        }
        removed
    }

    /// Empty the store. Typically called by the owner after a successful
    /// multi-artifact export.
    pub fn clear(&mut self) {
        let dropped = self.artifacts.len();
        self.artifacts.clear();
        debug!(dropped, "report store cleared");
    }

    /// Whether the key is already registered.
    pub fn contains(&self, unique_key: &str) -> bool {
        self.artifacts.iter().any(|a| a.unique_key == unique_key)
    }

    /// Number of registered artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// The artifact cap for this session.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
