//! Renderer-boundary tests: assembled-report export, empty-report guard,
//! per-view export, and in-flight debounce.

use std::cell::{Cell, RefCell};
use tsh_capture::{Raster, RasterOptions, RenderSurface};
use tsh_pipeline::{
    DirectorySink, PipelineConfig, RemoteError, RemoteRenderer, RenderPath, RenderPipeline,
    RenderRequest,
};
use tsh_registry::{Artifact, Payload, ReportStore};
use tsh_render::{ExportError, ExportStatus, ReportExporter, SingleViewExporter};

/// Remote renderer that records every request and always returns a PDF.
#[derive(Default)]
struct RecordingRemote {
    requests: RefCell<Vec<RenderRequest>>,
    fail: bool,
}

impl RecordingRemote {
    fn failing() -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    fn last_html(&self) -> String {
        self.requests
            .borrow()
            .last()
            .map(|r| r.html.clone())
            .expect("no request recorded")
    }
}

impl RemoteRenderer for &RecordingRemote {
    fn render(&self, request: &RenderRequest) -> Result<Vec<u8>, RemoteError> {
        self.requests.borrow_mut().push(request.clone());
        if self.fail {
            Err(RemoteError::Status {
                status: 503,
                message: "down".to_string(),
                use_client_fallback: true,
            })
        } else {
            Ok(b"%PDF-1.3 remote".to_vec())
        }
    }
}

/// Minimal mounted surface.
struct FakeSurface;

impl RenderSurface for FakeSurface {
    fn is_mounted(&self) -> bool {
        true
    }

    fn scroll_size(&self) -> (u32, u32) {
        (120, 90)
    }

    fn rasterize(&self, opts: &RasterOptions) -> tsh_capture::Result<Raster> {
        Ok(Raster::solid(120 * opts.scale, 90 * opts.scale, opts.background))
    }

    fn markup(&self) -> tsh_capture::Result<String> {
        Ok("<table><tr><td>Revenue</td><td>1,200</td></tr></table>".to_string())
    }

    fn stylesheet_rules(&self) -> Vec<tsh_capture::Result<String>> {
        vec![Ok("td { border: 1px solid #ccc; }".to_string())]
    }
}

fn artifact(key: &str, payload: Payload) -> Artifact {
    Artifact::new(format!("View {key}"), key, "2025-01", payload)
}

fn image_payload() -> Payload {
    Payload::Image {
        data_uri: "data:image/png;base64,AAAA".to_string(),
    }
}

fn html_payload(inner: &str) -> Payload {
    Payload::Html {
        markup: format!("<div>{inner}</div>"),
    }
}

#[test]
fn report_export_contains_one_section_per_artifact_in_order() {
    let remote = RecordingRemote::default();
    let pipeline = RenderPipeline::new(&remote, PipelineConfig::default());
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());

    let mut store = ReportStore::new();
    store.insert(artifact("alpha", image_payload())).unwrap();
    store.insert(artifact("bravo", html_payload("pnl table"))).unwrap();
    store.insert(artifact("charlie", image_payload())).unwrap();

    let exporter = ReportExporter::new(&pipeline, &sink);
    let status = exporter
        .export_report(&store, &FakeSurface, "board-pack")
        .unwrap();

    let ExportStatus::Saved { path, render_path } = status else {
        panic!("export skipped unexpectedly");
    };
    assert_eq!(render_path, RenderPath::Remote);
    assert!(path.exists());
    assert_eq!(remote.calls(), 1);

    let html = remote.last_html();
    assert_eq!(html.matches("class=\"report-page\"").count(), 3);
    let a = html.find("View alpha").unwrap();
    let b = html.find("View bravo").unwrap();
    let c = html.find("View charlie").unwrap();
    assert!(a < b && b < c);
    // Image artifacts embed as <img>, html artifacts stay raw.
    assert_eq!(html.matches("<img class=\"captured-view\"").count(), 2);
    assert!(html.contains("<div>pnl table</div>"));
}

#[test]
fn empty_report_is_blocked_before_any_network_request() {
    let remote = RecordingRemote::default();
    let pipeline = RenderPipeline::new(&remote, PipelineConfig::default());
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());

    let store = ReportStore::new();
    let exporter = ReportExporter::new(&pipeline, &sink);
    let err = exporter
        .export_report(&store, &FakeSurface, "board-pack")
        .unwrap_err();

    assert!(matches!(err, ExportError::EmptyReport));
    assert_eq!(remote.calls(), 0);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn single_view_export_wraps_capture_in_print_document() {
    let remote = RecordingRemote::default();
    let pipeline = RenderPipeline::new(&remote, PipelineConfig::default());
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());

    let exporter = SingleViewExporter::new(&pipeline, &sink);
    let status = exporter
        .export_view(&FakeSurface, "cash-flow", ".cash td { min-width: 48px; }")
        .unwrap();

    let ExportStatus::Saved { path, .. } = status else {
        panic!("export skipped unexpectedly");
    };
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("cash-flow-"));
    assert!(name.ends_with(".pdf"));

    let html = remote.last_html();
    // The view's own override block is injected verbatim.
    assert!(html.contains(".cash td { min-width: 48px; }"));
    // The captured markup and its inlined styles are present.
    assert!(html.contains("Revenue"));
    assert!(html.contains("td { border: 1px solid #ccc; }"));
    // Title carries slug + current date.
    assert!(html.contains("<title>cash-flow "));
}

#[test]
fn remote_failure_still_saves_via_fallback() {
    let remote = RecordingRemote::failing();
    let pipeline = RenderPipeline::new(&remote, PipelineConfig::default());
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());

    let exporter = SingleViewExporter::new(&pipeline, &sink);
    let status = exporter.export_view(&FakeSurface, "cash-flow", "").unwrap();

    let ExportStatus::Saved { path, render_path } = status else {
        panic!("export skipped unexpectedly");
    };
    assert_eq!(render_path, RenderPath::Fallback);
    assert!(std::fs::read(path).unwrap().starts_with(b"%PDF"));
    // Explicit client-fallback signal: exactly one remote call.
    assert_eq!(remote.calls(), 1);
}

/// Surface whose markup serialization re-triggers the exporter, simulating
/// a second click landing inside the in-flight window.
struct ReentrantSurface<'a> {
    exporter: &'a SingleViewExporter<'a, &'a RecordingRemote, DirectorySink>,
    nested_skipped: Cell<Option<bool>>,
}

impl RenderSurface for ReentrantSurface<'_> {
    fn is_mounted(&self) -> bool {
        true
    }

    fn scroll_size(&self) -> (u32, u32) {
        FakeSurface.scroll_size()
    }

    fn rasterize(&self, opts: &RasterOptions) -> tsh_capture::Result<Raster> {
        FakeSurface.rasterize(opts)
    }

    fn markup(&self) -> tsh_capture::Result<String> {
        let status = self
            .exporter
            .export_view(&FakeSurface, "cash-flow", "")
            .unwrap();
        self.nested_skipped
            .set(Some(matches!(status, ExportStatus::SkippedInFlight)));
        FakeSurface.markup()
    }

    fn stylesheet_rules(&self) -> Vec<tsh_capture::Result<String>> {
        FakeSurface.stylesheet_rules()
    }
}

#[test]
fn second_trigger_in_flight_window_is_ignored() {
    let remote = RecordingRemote::default();
    let pipeline = RenderPipeline::new(&remote, PipelineConfig::default());
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());

    let exporter = SingleViewExporter::new(&pipeline, &sink);
    let surface = ReentrantSurface {
        exporter: &exporter,
        nested_skipped: Cell::new(None),
    };

    let status = exporter.export_view(&surface, "cash-flow", "").unwrap();
    assert!(matches!(status, ExportStatus::Saved { .. }));
    assert_eq!(surface.nested_skipped.get(), Some(true));

    // Exactly one network call and one download for the whole window.
    assert_eq!(remote.calls(), 1);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn exporter_is_reusable_after_a_completed_export() {
    let remote = RecordingRemote::default();
    let pipeline = RenderPipeline::new(&remote, PipelineConfig::default());
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());

    let exporter = SingleViewExporter::new(&pipeline, &sink);
    let first = exporter.export_view(&FakeSurface, "cash-flow", "").unwrap();
    let second = exporter.export_view(&FakeSurface, "cash-flow", "").unwrap();

    assert!(matches!(first, ExportStatus::Saved { .. }));
    assert!(matches!(second, ExportStatus::Saved { .. }));
    assert_eq!(remote.calls(), 2);
}
