//! The single-view renderer: one on-screen region, one standalone PDF.

use crate::error::Result;
use crate::flight;
use crate::styles;
use chrono::Utc;
use std::cell::Cell;
use std::path::PathBuf;
use tracing::{debug, info};
use tsh_capture::{capture, CaptureSpec, RenderSurface};
use tsh_pipeline::{
    export_file_name, ExportSink, RemoteRenderer, RenderPath, RenderPipeline, RenderRequest,
};

/// Outcome of an export trigger.
#[derive(Debug)]
pub enum ExportStatus {
    /// The PDF was rendered and saved.
    Saved {
        /// Where the file landed.
        path: PathBuf,
        /// Which pipeline path produced it.
        render_path: RenderPath,
    },
    /// An export was already in flight; this trigger was ignored to avoid
    /// duplicate downloads.
    SkippedInFlight,
}

/// Per-view "Export PDF" adapter.
///
/// Every dashboard view supplies its own CSS override block (column counts
/// and color themes differ per view); the renderer injects it as an opaque
/// string instead of hard-coding per-view styling.
pub struct SingleViewExporter<'a, R: RemoteRenderer, S: ExportSink> {
    pipeline: &'a RenderPipeline<R>,
    sink: &'a S,
    in_flight: Cell<bool>,
}

impl<'a, R: RemoteRenderer, S: ExportSink> SingleViewExporter<'a, R, S> {
    /// Create an exporter over a pipeline and a download sink.
    pub fn new(pipeline: &'a RenderPipeline<R>, sink: &'a S) -> Self {
        Self {
            pipeline,
            sink,
            in_flight: Cell::new(false),
        }
    }

    /// Export one on-screen region as a standalone print document.
    ///
    /// Captures via the generic HTML strategy, wraps the fragment in the
    /// print stylesheet plus `style_overrides`, renders through the
    /// pipeline, and saves as `<slug>-<date>.pdf`.
    pub fn export_view(
        &self,
        surface: &dyn RenderSurface,
        title_slug: &str,
        style_overrides: &str,
    ) -> Result<ExportStatus> {
        let Some(_guard) = flight::claim(&self.in_flight) else {
            debug!(slug = title_slug, "export already in flight, ignoring trigger");
            return Ok(ExportStatus::SkippedInFlight);
        };

        let today = Utc::now().date_naive();
        let title = format!("{} {}", title_slug, today.format("%Y-%m-%d"));

        let payload = capture(CaptureSpec::GenericHtml, surface)?;
        let html = styles::print_document(&title, style_overrides, &styles::payload_markup(&payload));
        let request = RenderRequest::new(html, title);

        let rendered = self.pipeline.render(&request, surface)?;
        let path = self
            .sink
            .save(&export_file_name(title_slug, today), &rendered.bytes)?;

        info!(
            slug = title_slug,
            path = %path.display(),
            render_path = ?rendered.path,
            "view exported"
        );
        Ok(ExportStatus::Saved {
            path,
            render_path: rendered.path,
        })
    }
}
