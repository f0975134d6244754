//! The registered artifact record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tsh_capture::Payload;

/// One unit a user has chosen to include in a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    /// Human label shown in the assembled report.
    pub view_name: String,
    /// Caller-constructed identity. Must encode every parameter that
    /// distinguishes this capture from another capture of "the same" view
    /// (view id, filter state, period). Unique within the current session
    /// only.
    pub unique_key: String,
    /// Reporting period label active at capture time.
    pub period: String,
    /// Captured representation. Immutable after insertion; remove and
    /// re-add to replace it.
    pub payload: Payload,
    /// Insertion timestamp. Insertion order is the export page order.
    pub inserted_at: DateTime<Utc>,
}

impl Artifact {
    /// Create an artifact stamped with the current time.
    pub fn new(
        view_name: impl Into<String>,
        unique_key: impl Into<String>,
        period: impl Into<String>,
        payload: Payload,
    ) -> Self {
        Self {
            view_name: view_name.into(),
            unique_key: unique_key.into(),
            period: period.into(),
            payload,
            inserted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html_payload() -> Payload {
        Payload::Html {
            markup: "<div>cash flow</div>".to_string(),
        }
    }

    #[test]
    fn test_artifact_new_stamps_time() {
        let before = Utc::now();
        let artifact = Artifact::new("Cash Flow", "cash-flow|2025-01", "2025-01", html_payload());
        assert!(artifact.inserted_at >= before);
        assert_eq!(artifact.view_name, "Cash Flow");
        assert_eq!(artifact.unique_key, "cash-flow|2025-01");
    }

    #[test]
    fn test_artifact_round_trips_through_json() {
        let artifact = Artifact::new("P&L", "pnl|q1", "Q1 2025", html_payload());
        let json = serde_json::to_string(&artifact).unwrap();
        let parsed: Artifact = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.unique_key, artifact.unique_key);
        assert_eq!(parsed.payload, artifact.payload);
    }
}
