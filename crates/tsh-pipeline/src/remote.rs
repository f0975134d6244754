//! The remote (preferred) rendering path.
//!
//! The remote service loads the submitted HTML in a full browser engine and
//! returns PDF bytes, giving pixel-accurate, CSS-complete rendering for the
//! dense typography financial tables rely on.

use crate::config::PipelineConfig;
use crate::error::RemoteError;
use crate::request::RenderRequest;
use serde::Deserialize;
use std::io::Read;
use std::time::Duration;
use tracing::debug;

/// One remote render attempt. The seam the pipeline is tested through.
pub trait RemoteRenderer {
    /// Submit a render request; `Ok` carries the PDF bytes.
    fn render(&self, request: &RenderRequest) -> std::result::Result<Vec<u8>, RemoteError>;
}

/// JSON body the service returns on failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteFailure {
    pub message: Option<String>,
    pub error: Option<String>,
    pub use_client_fallback: bool,
}

impl RemoteFailure {
    fn detail(self) -> String {
        self.message
            .or(self.error)
            .unwrap_or_else(|| "no detail".to_string())
    }
}

/// HTTP implementation of the remote path.
pub struct HttpRemoteRenderer {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpRemoteRenderer {
    /// Create a renderer for an endpoint with a bounded per-call wait.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    /// Create a renderer from a pipeline configuration.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.endpoint.clone(), config.timeout())
    }
}

impl RemoteRenderer for HttpRemoteRenderer {
    fn render(&self, request: &RenderRequest) -> std::result::Result<Vec<u8>, RemoteError> {
        let body = serde_json::to_value(request)?;
        debug!(endpoint = %self.endpoint, title = %request.title, "submitting remote render");

        match self.agent.post(&self.endpoint).send_json(body) {
            Ok(response) => {
                let content_type = response.content_type().to_string();
                if !is_pdf_content_type(&content_type) {
                    return Err(RemoteError::ContentType(content_type));
                }
                let mut bytes = Vec::new();
                response
                    .into_reader()
                    .read_to_end(&mut bytes)
                    .map_err(|e| RemoteError::Transport(e.to_string()))?;
                debug!(bytes = bytes.len(), "remote render returned PDF");
                Ok(bytes)
            }
            Err(ureq::Error::Status(status, response)) => {
                let failure: RemoteFailure = response.into_json().unwrap_or_default();
                let use_client_fallback = failure.use_client_fallback;
                Err(RemoteError::Status {
                    status,
                    message: failure.detail(),
                    use_client_fallback,
                })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(RemoteError::Transport(transport.to_string()))
            }
        }
    }
}

/// Success requires a PDF content type; anything else routes to fallback.
pub(crate) fn is_pdf_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(str::trim)
        .is_some_and(|t| t.eq_ignore_ascii_case("application/pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_content_type_detection() {
        assert!(is_pdf_content_type("application/pdf"));
        assert!(is_pdf_content_type("Application/PDF"));
        assert!(is_pdf_content_type("application/pdf; charset=binary"));
        assert!(!is_pdf_content_type("application/json"));
        assert!(!is_pdf_content_type("text/html"));
        assert!(!is_pdf_content_type(""));
    }

    #[test]
    fn test_remote_failure_parses_service_body() {
        let failure: RemoteFailure =
            serde_json::from_str(r#"{"message": "renderer busy", "useClientFallback": true}"#)
                .unwrap();
        assert!(failure.use_client_fallback);
        assert_eq!(failure.detail(), "renderer busy");
    }

    #[test]
    fn test_remote_failure_defaults_when_fields_absent() {
        let failure: RemoteFailure = serde_json::from_str("{}").unwrap();
        assert!(!failure.use_client_fallback);
        assert_eq!(failure.detail(), "no detail");
    }

    #[test]
    fn test_remote_failure_falls_back_to_error_field() {
        let failure: RemoteFailure =
            serde_json::from_str(r#"{"error": "chrome crashed"}"#).unwrap();
        assert_eq!(failure.detail(), "chrome crashed");
    }

    #[test]
    fn test_use_client_fallback_only_on_explicit_signal() {
        let explicit = RemoteError::Status {
            status: 503,
            message: "busy".to_string(),
            use_client_fallback: true,
        };
        assert!(explicit.use_client_fallback());

        let plain = RemoteError::Status {
            status: 500,
            message: "oops".to_string(),
            use_client_fallback: false,
        };
        assert!(!plain.use_client_fallback());

        let transport = RemoteError::Transport("timed out".to_string());
        assert!(!transport.use_client_fallback());
    }
}
