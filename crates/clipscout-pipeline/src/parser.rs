//! Candidate span parsing.
//!
//! Converts the backend's loosely-structured JSON answers into validated
//! [`CandidateSpan`] lists. The backend is unreliable, so everything here
//! is lenient: malformed elements are skipped, and a payload that is not
//! an array at all simply yields no spans.

use clipscout_models::CandidateSpan;
use serde_json::Value;
use tracing::debug;

/// Decode raw backend text into JSON, handling markdown code blocks.
///
/// Returns `Value::Null` when the payload is not JSON at all, which
/// downstream parsing treats as an empty result.
pub fn decode_backend_json(raw: &str) -> Value {
    let text = raw.trim();
    let text = if text.starts_with("```json") {
        &text[7..]
    } else {
        text
    };
    let text = if text.ends_with("```") {
        &text[..text.len() - 3]
    } else {
        text
    };

    match serde_json::from_str(text.trim()) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "Backend payload is not JSON");
            Value::Null
        }
    }
}

/// Extract validated `(start, end[, text])` spans from a decoded payload.
///
/// The payload must be an array of objects carrying `start` and `end`
/// (JSON numbers or numeric strings), and, when `with_text` is set, a
/// non-blank `text` field. Elements failing any of those checks are
/// skipped without aborting the rest.
pub fn parse_candidate_spans(value: &Value, with_text: bool) -> Vec<CandidateSpan> {
    let items = match value.as_array() {
        Some(items) => items,
        None => {
            if !value.is_null() {
                debug!("Span payload is not a JSON array");
            }
            return Vec::new();
        }
    };

    let mut spans = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let Some(obj) = item.as_object() else {
            debug!(index = i, "Skipping non-object span element");
            continue;
        };

        let start = obj.get("start").and_then(coerce_time);
        let end = obj.get("end").and_then(coerce_time);
        let (Some(start), Some(end)) = (start, end) else {
            debug!(index = i, "Skipping span element with unusable times");
            continue;
        };
        if end < start {
            debug!(index = i, start, end, "Skipping span element with reversed times");
            continue;
        }

        if with_text {
            let text = obj
                .get("text")
                .and_then(Value::as_str)
                .map(str::trim)
                .unwrap_or("");
            if text.is_empty() {
                debug!(index = i, "Skipping span element with blank text");
                continue;
            }
            spans.push(CandidateSpan::with_text(start, end, text));
        } else {
            spans.push(CandidateSpan::new(start, end));
        }
    }

    spans
}

/// Coerce a JSON number or numeric string into a finite f64.
fn coerce_time(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}
