//! Error types for the rendering pipeline.

use thiserror::Error;

/// Why a remote render attempt did not produce a PDF.
///
/// Never terminal on its own: any of these routes the pipeline to the
/// local fallback path.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Network-level failure (DNS, connect, timeout).
    #[error("remote renderer transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status from the service.
    #[error("remote renderer returned status {status}: {message}")]
    Status {
        status: u16,
        message: String,
        /// Explicit service signal to skip further remote attempts.
        use_client_fallback: bool,
    },

    /// 2xx response with a non-PDF body.
    #[error("remote renderer returned non-PDF content type '{0}'")]
    ContentType(String),

    /// The render request could not be serialized.
    #[error("render request serialization failed: {0}")]
    Request(#[from] serde_json::Error),
}

impl RemoteError {
    /// Whether the service explicitly asked the client to fall back,
    /// suppressing any further remote retries for this call.
    pub fn use_client_fallback(&self) -> bool {
        matches!(
            self,
            RemoteError::Status {
                use_client_fallback: true,
                ..
            }
        )
    }
}

/// Why the local fallback path failed.
#[derive(Error, Debug)]
pub enum FallbackError {
    /// Re-capture of the live surface failed.
    #[error("re-capture of the live surface failed: {0}")]
    Capture(#[from] tsh_capture::CaptureError),

    /// PDF assembly from the raster failed.
    #[error("PDF assembly failed: {0}")]
    Pdf(String),
}

/// Terminal pipeline failure: both paths exhausted, nothing downloaded.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The local fallback failed after the remote path was unavailable.
    /// Surfaced to the user with a retry affordance.
    #[error("local fallback failed: {fallback} (remote was unavailable: {remote})")]
    FallbackFailed {
        remote: RemoteError,
        #[source]
        fallback: FallbackError,
    },
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
