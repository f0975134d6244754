//! Single-view and multi-artifact report renderers.
//!
//! Thin adapters between captured content and the rendering pipeline:
//!
//! - [`SingleViewExporter`]: the per-dashboard "Export PDF" action. One
//!   live region, captured generically, wrapped in the print stylesheet
//!   plus the view's own CSS override block.
//! - [`ReportExporter`]: the assembled-report action. Every artifact in
//!   the session registry becomes one page-broken section, in insertion
//!   order, rendered in a single pipeline call.
//!
//! Both exporters debounce re-entrant triggers (a second click while an
//! export is in flight is ignored) and restore themselves for retry after
//! any terminal failure.
//!
//! # Example
//!
//! ```no_run
//! use tsh_pipeline::{DirectorySink, HttpRemoteRenderer, PipelineConfig, RenderPipeline};
//! use tsh_registry::ReportStore;
//! use tsh_render::ReportExporter;
//! # fn surface() -> Box<dyn tsh_capture::RenderSurface> { unimplemented!() }
//!
//! let config = PipelineConfig::default();
//! let remote = HttpRemoteRenderer::from_config(&config);
//! let pipeline = RenderPipeline::new(remote, config);
//! let sink = DirectorySink::new("exports");
//!
//! let store = ReportStore::new();
//! let exporter = ReportExporter::new(&pipeline, &sink);
//! let preview = surface();
//! let status = exporter.export_report(&store, preview.as_ref(), "monthly-report");
//! ```

pub mod error;
mod flight;
pub mod multi;
pub mod single;
pub mod styles;

pub use error::{ExportError, Result};
pub use multi::{assemble_report_document, ReportExporter};
pub use single::{ExportStatus, SingleViewExporter};
