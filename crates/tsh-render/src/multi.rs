//! The multi-artifact renderer: one paginated PDF from the whole registry.

use crate::error::{ExportError, Result};
use crate::flight;
use crate::single::ExportStatus;
use crate::styles;
use chrono::Utc;
use std::cell::Cell;
use tracing::{debug, info};
use tsh_capture::RenderSurface;
use tsh_pipeline::{export_file_name, ExportSink, RemoteRenderer, RenderPipeline, RenderRequest};
use tsh_registry::{Artifact, ReportStore};

/// Assembled-report exporter.
///
/// Builds one document with one page-broken section per registered
/// artifact, in insertion order, and renders it through the pipeline in a
/// single call. Whether to clear the store after success is the caller's
/// decision, not this component's.
pub struct ReportExporter<'a, R: RemoteRenderer, S: ExportSink> {
    pipeline: &'a RenderPipeline<R>,
    sink: &'a S,
    in_flight: Cell<bool>,
}

impl<'a, R: RemoteRenderer, S: ExportSink> ReportExporter<'a, R, S> {
    /// Create an exporter over a pipeline and a download sink.
    pub fn new(pipeline: &'a RenderPipeline<R>, sink: &'a S) -> Self {
        Self {
            pipeline,
            sink,
            in_flight: Cell::new(false),
        }
    }

    /// Export every registered artifact as one paginated PDF.
    ///
    /// Fails fast with [`ExportError::EmptyReport`] when nothing is
    /// registered; no pipeline work happens and no network request is
    /// issued. `fallback_surface` is the live report preview region the
    /// pipeline re-captures if the remote path is unavailable.
    pub fn export_report(
        &self,
        store: &ReportStore,
        fallback_surface: &dyn RenderSurface,
        title_slug: &str,
    ) -> Result<ExportStatus> {
        if store.is_empty() {
            return Err(ExportError::EmptyReport);
        }

        let Some(_guard) = flight::claim(&self.in_flight) else {
            debug!(slug = title_slug, "report export already in flight, ignoring trigger");
            return Ok(ExportStatus::SkippedInFlight);
        };

        let today = Utc::now().date_naive();
        let title = format!("{} {}", title_slug, today.format("%Y-%m-%d"));
        let html = assemble_report_document(&title, store.list());
        let request = RenderRequest::new(html, title);

        let rendered = self.pipeline.render(&request, fallback_surface)?;
        let path = self
            .sink
            .save(&export_file_name(title_slug, today), &rendered.bytes)?;

        info!(
            slug = title_slug,
            artifacts = store.len(),
            path = %path.display(),
            render_path = ?rendered.path,
            "report exported"
        );
        Ok(ExportStatus::Saved {
            path,
            render_path: rendered.path,
        })
    }
}

/// The complete report document: one section per artifact, insertion order.
pub fn assemble_report_document(title: &str, artifacts: &[Artifact]) -> String {
    let sections: String = artifacts.iter().map(styles::report_section).collect();
    styles::print_document(title, "", &sections)
}
