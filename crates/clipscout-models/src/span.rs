//! Candidate time spans proposed by the finder backend.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A validated `(start, end)` interval extracted from backend output.
///
/// Spans carry the backend's quoted text when it supplied one. Validation
/// happens at parse time; a constructed span always has `end >= start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CandidateSpan {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Quoted transcript text, when the backend provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CandidateSpan {
    /// Create a span without quoted text.
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            text: None,
        }
    }

    /// Create a span carrying the backend's quoted text.
    pub fn with_text(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: Some(text.into()),
        }
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
