//! Capture strategies for turning live dashboard views into portable payloads.
//!
//! A capture converts one on-screen artifact (chart, table, custom fragment)
//! into a representation the export engine can hold onto after the view is
//! gone: a rasterized PNG data URI or a self-contained HTML fragment.
//!
//! # Capture modes
//!
//! - **Image**: rasterize the full scrollable extent at a fixed 3x scale
//!   with a solid background fill, encoded as a PNG data URI.
//! - **Generic HTML**: serialize the region's markup and inline every
//!   readable stylesheet into one `<style>` block.
//! - **Generated HTML**: a caller-supplied closure builds a bespoke fragment
//!   which is used verbatim.
//!
//! # Example
//!
//! ```no_run
//! use tsh_capture::{capture, CaptureSpec, RenderSurface};
//!
//! fn add_to_report(surface: &dyn RenderSurface) {
//!     let payload = capture(CaptureSpec::Image, surface).unwrap();
//!     assert!(payload.is_image());
//! }
//! ```

pub mod error;
pub mod payload;
pub mod strategy;
pub mod surface;

pub use error::{CaptureError, Result};
pub use payload::Payload;
pub use strategy::{capture, CaptureSpec};
pub use surface::{Background, Raster, RasterOptions, RenderSurface, RASTER_SCALE};
