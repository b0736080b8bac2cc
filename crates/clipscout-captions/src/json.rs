//! JSON caption parsing.

use clipscout_models::TranscriptEntry;
use serde_json::Value;
use tracing::debug;

/// Parse a JSON caption payload into timestamped transcript entries.
///
/// Accepts an array of objects with `start` and `end` (or `stop`) times and
/// a `text` (or `content`) field. Times may be JSON numbers or numeric
/// strings. Anything that is not an array yields an empty list; malformed
/// elements and blank-text entries are skipped.
pub fn parse_json_captions(content: &str) -> Vec<TranscriptEntry> {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "Caption payload is not valid JSON");
            return Vec::new();
        }
    };

    let items = match value.as_array() {
        Some(items) => items,
        None => {
            debug!("Caption payload is not a JSON array");
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let Some(obj) = item.as_object() else {
            debug!(index = i, "Skipping non-object caption element");
            continue;
        };

        let start = obj.get("start").and_then(coerce_seconds);
        let end = obj
            .get("end")
            .or_else(|| obj.get("stop"))
            .and_then(coerce_seconds);
        let (Some(start), Some(end)) = (start, end) else {
            debug!(index = i, "Skipping caption element with unusable times");
            continue;
        };
        if end < start {
            debug!(index = i, start, end, "Skipping caption element with reversed times");
            continue;
        }

        let text = obj
            .get("text")
            .or_else(|| obj.get("content"))
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or("");
        if text.is_empty() {
            debug!(index = i, "Skipping caption element with blank text");
            continue;
        }

        entries.push(TranscriptEntry::new(start, end, text));
    }

    entries
}

/// Coerce a JSON number or numeric string into a finite f64.
fn coerce_seconds(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}
