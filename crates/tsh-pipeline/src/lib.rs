//! Primary/fallback HTML-to-PDF rendering pipeline.
//!
//! Turns a complete HTML document into PDF bytes via a strict two-path
//! protocol:
//!
//! 1. **Remote path (preferred)**: POST the `{html, title}` request to a
//!    rendering service that loads the document in a full browser engine.
//!    Success requires both a 2xx status and a PDF content type.
//! 2. **Local fallback path**: re-capture the original live surface as one
//!    bitmap and tile it across physical pages with `printpdf`.
//!
//! The fallback guarantees the export action never simply fails for the
//! user when the service is down, at the cost of visual fidelity. It is
//! only ever attempted after the remote path has fully resolved.
//!
//! # Example
//!
//! ```no_run
//! use tsh_pipeline::{
//!     HttpRemoteRenderer, PipelineConfig, RenderPipeline, RenderRequest,
//! };
//! use tsh_capture::RenderSurface;
//!
//! fn export(surface: &dyn RenderSurface) {
//!     let config = PipelineConfig::default();
//!     let remote = HttpRemoteRenderer::from_config(&config);
//!     let pipeline = RenderPipeline::new(remote, config);
//!     let request = RenderRequest::new("<!DOCTYPE html>...", "P&L 2025-01-31");
//!     let rendered = pipeline.render(&request, surface).unwrap();
//!     assert!(rendered.bytes.starts_with(b"%PDF"));
//! }
//! ```

pub mod config;
pub mod download;
pub mod error;
pub mod fallback;
pub mod pipeline;
pub mod remote;
pub mod request;

pub use config::PipelineConfig;
pub use download::{export_file_name, DirectorySink, ExportSink};
pub use error::{FallbackError, PipelineError, RemoteError, Result};
pub use fallback::{paginate_raster, PageSpec};
pub use pipeline::{RenderPath, RenderPipeline, RenderedPdf};
pub use remote::{HttpRemoteRenderer, RemoteFailure, RemoteRenderer};
pub use request::RenderRequest;
