//! The two-path rendering protocol: remote first, local fallback second.

use crate::config::PipelineConfig;
use crate::error::{PipelineError, RemoteError, Result};
use crate::fallback;
use crate::remote::RemoteRenderer;
use crate::request::RenderRequest;
use tracing::{debug, info, warn};
use tsh_capture::{RasterOptions, RenderSurface};

/// Which path produced the final bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPath {
    /// The remote browser-engine service.
    Remote,
    /// The client-side rasterize-and-paginate fallback.
    Fallback,
}

/// A successfully rendered document.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    /// The PDF binary.
    pub bytes: Vec<u8>,
    /// Which path produced it.
    pub path: RenderPath,
}

/// The primary/fallback rendering pipeline.
///
/// The fallback is strictly degraded output reserved for remote-path
/// unavailability: it is never attempted first and never raced against the
/// remote attempt.
pub struct RenderPipeline<R: RemoteRenderer> {
    remote: R,
    config: PipelineConfig,
}

impl<R: RemoteRenderer> RenderPipeline<R> {
    /// Create a pipeline over a remote renderer.
    pub fn new(remote: R, config: PipelineConfig) -> Self {
        Self { remote, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Render a complete HTML document to PDF bytes.
    ///
    /// The remote path is attempted first; only after it has fully resolved
    /// as unavailable does the fallback re-capture `surface` (the original
    /// live region, not the built HTML, because the fallback uses a
    /// different serialization technique) and assemble a PDF locally.
    pub fn render(
        &self,
        request: &RenderRequest,
        surface: &dyn RenderSurface,
    ) -> Result<RenderedPdf> {
        match self.try_remote(request) {
            Ok(bytes) => Ok(RenderedPdf {
                bytes,
                path: RenderPath::Remote,
            }),
            Err(remote) => {
                warn!(%remote, "remote renderer unavailable, using local fallback");
                match self.render_fallback(surface) {
                    Ok(bytes) => {
                        info!(bytes = bytes.len(), "fallback render succeeded");
                        Ok(RenderedPdf {
                            bytes,
                            path: RenderPath::Fallback,
                        })
                    }
                    Err(fb) => Err(PipelineError::FallbackFailed {
                        remote,
                        fallback: fb,
                    }),
                }
            }
        }
    }

    fn try_remote(&self, request: &RenderRequest) -> std::result::Result<Vec<u8>, RemoteError> {
        let attempts = self.config.max_remote_attempts.max(1);
        let mut last = match self.remote.render(request) {
            Ok(bytes) => return Ok(bytes),
            Err(err) => err,
        };
        for attempt in 2..=attempts {
            if last.use_client_fallback() {
                debug!("service requested client fallback, skipping remote retries");
                break;
            }
            debug!(attempt, %last, "retrying remote render");
            match self.remote.render(request) {
                Ok(bytes) => return Ok(bytes),
                Err(err) => last = err,
            }
        }
        Err(last)
    }

    fn render_fallback(
        &self,
        surface: &dyn RenderSurface,
    ) -> std::result::Result<Vec<u8>, crate::error::FallbackError> {
        let raster = surface.rasterize(&RasterOptions::default())?;
        fallback::paginate_raster(&raster, &self.config.page)
    }
}
