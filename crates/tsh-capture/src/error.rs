//! Error types for capture operations.

use thiserror::Error;

/// Errors that can occur while capturing a live surface.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// The capture target is missing or no longer mounted. Callers must
    /// abort the add-to-report action without registering anything.
    #[error("capture target is not available")]
    Unavailable,

    /// Rasterization of the surface failed.
    #[error("rasterization failed: {0}")]
    Raster(String),

    /// PNG encoding of a raster failed.
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// The surface could not serialize its markup.
    #[error("markup serialization failed: {0}")]
    Markup(String),

    /// A stylesheet's rules could not be read (e.g. cross-origin).
    /// Capture treats the sheet as empty rather than failing.
    #[error("stylesheet rules unreadable: {0}")]
    Stylesheet(String),

    /// A caller-supplied fragment generator failed.
    #[error("fragment generator failed: {0}")]
    Generator(String),
}

/// Result type alias for capture operations.
pub type Result<T> = std::result::Result<T, CaptureError>;
