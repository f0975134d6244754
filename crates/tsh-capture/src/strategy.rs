//! Capture dispatch: one tagged entry point for the three capture modes.

use crate::error::{CaptureError, Result};
use crate::payload::Payload;
use crate::surface::{RasterOptions, RenderSurface};
use std::fmt;
use tracing::{debug, warn};

/// How a surface should be captured.
///
/// Callers declare the mode once; the engine dispatches here instead of
/// branching on "is a generator present" at every call site.
pub enum CaptureSpec<'a> {
    /// Rasterize the full scrollable extent at the fixed print-density scale.
    Image,
    /// Clone the surface's markup and inline every readable stylesheet.
    GenericHtml,
    /// Caller-built fragment, used verbatim. For views that need a bespoke
    /// compact layout a naive clone cannot produce (e.g. chart + filtered
    /// table + notes in a fixed grid).
    GeneratedHtml(Box<dyn FnOnce() -> Result<String> + 'a>),
}

impl fmt::Debug for CaptureSpec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureSpec::Image => f.write_str("CaptureSpec::Image"),
            CaptureSpec::GenericHtml => f.write_str("CaptureSpec::GenericHtml"),
            CaptureSpec::GeneratedHtml(_) => f.write_str("CaptureSpec::GeneratedHtml(..)"),
        }
    }
}

/// Capture one on-screen artifact into a portable [`Payload`].
///
/// Fails with [`CaptureError::Unavailable`] when the surface is unmounted;
/// the caller must abort without registering anything.
pub fn capture(spec: CaptureSpec<'_>, surface: &dyn RenderSurface) -> Result<Payload> {
    if !surface.is_mounted() {
        return Err(CaptureError::Unavailable);
    }

    match spec {
        CaptureSpec::Image => {
            let opts = RasterOptions::default();
            let raster = surface.rasterize(&opts)?;
            let (width, height) = surface.scroll_size();
            if raster.width != width * opts.scale || raster.height != height * opts.scale {
                return Err(CaptureError::Raster(format!(
                    "raster {}x{} does not cover the {}x{} scrollable extent at {}x scale",
                    raster.width, raster.height, width, height, opts.scale
                )));
            }
            debug!(
                width = raster.width,
                height = raster.height,
                scale = opts.scale,
                "captured raster"
            );
            Ok(Payload::Image {
                data_uri: raster.to_png_data_uri()?,
            })
        }
        CaptureSpec::GenericHtml => {
            let markup = surface.markup()?;
            let rules = inline_style_rules(surface);
            Ok(Payload::Html {
                markup: wrap_fragment(&rules, &markup),
            })
        }
        CaptureSpec::GeneratedHtml(generator) => {
            let markup = generator()?;
            debug!(bytes = markup.len(), "captured generated fragment");
            Ok(Payload::Html { markup })
        }
    }
}

/// Concatenate every readable stylesheet's rules. Unreadable sheets
/// contribute nothing.
fn inline_style_rules(surface: &dyn RenderSurface) -> String {
    let mut rules = String::new();
    for sheet in surface.stylesheet_rules() {
        match sheet {
            Ok(text) => {
                rules.push_str(&text);
                rules.push('\n');
            }
            Err(err) => warn!(%err, "skipping unreadable stylesheet"),
        }
    }
    rules
}

fn wrap_fragment(rules: &str, markup: &str) -> String {
    format!("<div class=\"captured-view\"><style>{rules}</style>{markup}</div>")
}
