//! Error types for the renderer boundary.
//!
//! This is where lower-level failures are converted into the user-facing
//! taxonomy. No raw error ever surfaces past an exporter; every terminal
//! failure leaves the exporter ready for a retry.

use thiserror::Error;

/// Errors that can occur during an export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Export attempted with nothing registered. Blocked before any
    /// pipeline work; no network request is issued.
    #[error("report is empty, nothing to export")]
    EmptyReport,

    /// Capture failed before a render request was built.
    #[error(transparent)]
    Capture(#[from] tsh_capture::CaptureError),

    /// Both rendering paths failed.
    #[error(transparent)]
    Pipeline(#[from] tsh_pipeline::PipelineError),

    /// Saving the finished PDF failed.
    #[error("saving export failed: {0}")]
    Save(#[from] std::io::Error),
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
