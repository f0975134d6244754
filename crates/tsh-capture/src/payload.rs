//! Portable artifact payloads.

use serde::{Deserialize, Serialize};

/// Portable representation of one captured artifact.
///
/// Exactly one representation per capture: either a rasterized image or an
/// HTML fragment, never both. The enum makes the invariant structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Payload {
    /// Rasterized capture as a `data:image/png;base64,...` URI.
    Image {
        /// Self-contained data URI, embeddable in an `<img>` tag.
        data_uri: String,
    },
    /// Self-contained HTML fragment with inlined styles.
    Html {
        /// Fragment markup, used verbatim by the renderers.
        markup: String,
    },
}

impl Payload {
    /// Whether this payload is a raster image.
    pub fn is_image(&self) -> bool {
        matches!(self, Payload::Image { .. })
    }

    /// Whether this payload is an HTML fragment.
    pub fn is_html(&self) -> bool {
        matches!(self, Payload::Html { .. })
    }
}
