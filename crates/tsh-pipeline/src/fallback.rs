//! The local fallback path: rasterize-and-paginate PDF assembly.
//!
//! Used only after the remote path has fully resolved as unavailable. The
//! fallback trades visual fidelity for availability: the live surface is
//! re-captured as one bitmap and tiled across physical pages, repeating the
//! image at decreasing vertical offsets until its full height is covered.

use crate::error::FallbackError;
use printpdf::image_crate::{DynamicImage, RgbImage};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tsh_capture::Raster;

const MM_PER_INCH: f64 = 25.4;

/// Physical page geometry for fallback pagination. A4 portrait by default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    #[serde(default = "default_width_mm")]
    pub width_mm: f64,
    #[serde(default = "default_height_mm")]
    pub height_mm: f64,
    #[serde(default = "default_margin_mm")]
    pub margin_mm: f64,
    /// Raster density assumed when converting pixels to physical size.
    /// 216 matches 72 CSS px/inch at the 3x capture scale.
    #[serde(default = "default_dpi")]
    pub dpi: f64,
}

fn default_width_mm() -> f64 {
    210.0
}

fn default_height_mm() -> f64 {
    297.0
}

fn default_margin_mm() -> f64 {
    10.0
}

fn default_dpi() -> f64 {
    216.0
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            width_mm: default_width_mm(),
            height_mm: default_height_mm(),
            margin_mm: default_margin_mm(),
            dpi: default_dpi(),
        }
    }
}

impl PageSpec {
    /// Printable width between the margins.
    pub fn content_width_mm(&self) -> f64 {
        self.width_mm - 2.0 * self.margin_mm
    }

    /// Printable height between the margins.
    pub fn content_height_mm(&self) -> f64 {
        self.height_mm - 2.0 * self.margin_mm
    }
}

/// Pages required to cover an image of the given height.
pub(crate) fn pages_needed(image_h_mm: f64, content_h_mm: f64) -> usize {
    (image_h_mm / content_h_mm).ceil().max(1.0) as usize
}

/// Tile one full-extent raster across as many pages as its height needs.
pub fn paginate_raster(raster: &Raster, page: &PageSpec) -> Result<Vec<u8>, FallbackError> {
    let rgb = RgbImage::from_raw(raster.width, raster.height, raster.pixels.clone())
        .ok_or_else(|| FallbackError::Pdf("raster buffer does not match its dimensions".into()))?;
    let dynamic = DynamicImage::ImageRgb8(rgb);

    // Fit the image to the printable width; height follows the same scale.
    let px_to_mm = MM_PER_INCH / page.dpi;
    let native_w_mm = f64::from(raster.width) * px_to_mm;
    let native_h_mm = f64::from(raster.height) * px_to_mm;
    let scale = if native_w_mm > 0.0 {
        page.content_width_mm() / native_w_mm
    } else {
        1.0
    };
    let image_h_mm = native_h_mm * scale;

    let content_h_mm = page.content_height_mm();
    let pages = pages_needed(image_h_mm, content_h_mm);
    debug!(
        width = raster.width,
        height = raster.height,
        pages,
        "assembling fallback PDF"
    );

    // printpdf's Mm and ImageTransform are f32; geometry stays f64 and is
    // narrowed only at this boundary.
    let page_w = Mm(page.width_mm as f32);
    let page_h = Mm(page.height_mm as f32);

    let (doc, first_page, first_layer) =
        PdfDocument::new("fallback export", page_w, page_h, "content");

    for index in 0..pages {
        let (page_idx, layer_idx) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(page_w, page_h, "content")
        };
        let layer = doc.get_page(page_idx).get_layer(layer_idx);

        // Each page shows the next band: the whole image is placed again,
        // shifted up by the height already consumed.
        let consumed_mm = index as f64 * content_h_mm;
        let translate_y = page.height_mm - page.margin_mm - image_h_mm + consumed_mm;

        let image = Image::from_dynamic_image(&dynamic);
        image.add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(page.margin_mm as f32)),
                translate_y: Some(Mm(translate_y as f32)),
                scale_x: Some(scale as f32),
                scale_y: Some(scale as f32),
                dpi: Some(page.dpi as f32),
                ..Default::default()
            },
        );
    }

    doc.save_to_bytes()
        .map_err(|e| FallbackError::Pdf(e.to_string()))
}
