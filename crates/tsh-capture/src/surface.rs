//! The live-surface abstraction capture operates on.
//!
//! Data producers (dashboard views, chart containers, table wrappers) hand
//! the engine a [`RenderSurface`] handle. The engine only reads rendered
//! output through it; it never touches the producer's data model.

use crate::error::{CaptureError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use serde::{Deserialize, Serialize};

/// Fixed rasterization scale for image captures.
///
/// 3x keeps exported line charts legible at print resolution.
pub const RASTER_SCALE: u32 = 3;

/// Solid background fill applied under transparent regions, so they do not
/// render black in PDF contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Background {
    /// White fill, the default for report captures.
    pub const WHITE: Background = Background {
        r: 0xff,
        g: 0xff,
        b: 0xff,
    };
}

impl Default for Background {
    fn default() -> Self {
        Background::WHITE
    }
}

/// Options for rasterizing a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterOptions {
    /// Device pixels per CSS pixel.
    pub scale: u32,
    /// Solid fill under transparent regions.
    pub background: Background,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: RASTER_SCALE,
            background: Background::WHITE,
        }
    }
}

/// A captured bitmap: tightly packed RGB8 rows, full scrollable extent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
    /// `width * height * 3` bytes, row-major RGB.
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Wrap a pixel buffer, validating its length against the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(CaptureError::Raster(format!(
                "pixel buffer is {} bytes, expected {} for {}x{}",
                pixels.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A raster filled with a single color.
    pub fn solid(width: u32, height: u32, background: Background) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..width as usize * height as usize {
            pixels.extend_from_slice(&[background.r, background.g, background.b]);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Encode as a lossless `data:image/png;base64,...` URI.
    pub fn to_png_data_uri(&self) -> Result<String> {
        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(&self.pixels, self.width, self.height, ColorType::Rgb8)
            .map_err(|e| CaptureError::Encode(e.to_string()))?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
    }
}

/// Handle to a live renderable region supplied by a data producer.
///
/// All methods take `&self`: a capture must never mutate the live document,
/// and any temporary clones an implementation makes must be discarded before
/// the call returns.
pub trait RenderSurface {
    /// Whether the region is still mounted in the live document.
    fn is_mounted(&self) -> bool;

    /// Full scrollable extent in CSS pixels (width, height), not just the
    /// visible viewport.
    fn scroll_size(&self) -> (u32, u32);

    /// Rasterize the full scrollable extent. The result must cover
    /// `scroll_size()` scaled by `opts.scale`, with `opts.background`
    /// filled under transparent regions.
    fn rasterize(&self, opts: &RasterOptions) -> Result<Raster>;

    /// Serialized markup of the region.
    fn markup(&self) -> Result<String>;

    /// Rule text of each stylesheet reachable from the region's document.
    /// A sheet that cannot be read (cross-origin) yields an `Err` entry;
    /// capture skips it instead of failing.
    fn stylesheet_rules(&self) -> Vec<Result<String>>;
}
