//! The render request submitted to the pipeline.

use serde::{Deserialize, Serialize};

/// Ephemeral value handed to the rendering pipeline; also the JSON body of
/// the remote service call.
///
/// `html` must be a complete, self-contained document: inline `<style>`
/// only, no external stylesheet references, all raster content embedded as
/// data URIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Complete HTML document to render.
    pub html: String,
    /// Document title, also used for the download file name.
    pub title: String,
}

impl RenderRequest {
    /// Create a render request.
    pub fn new(html: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_service_body() {
        let request = RenderRequest::new("<!DOCTYPE html><html></html>", "P&L 2025-01-31");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["html"], "<!DOCTYPE html><html></html>");
        assert_eq!(json["title"], "P&L 2025-01-31");
    }
}
