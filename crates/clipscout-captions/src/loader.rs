//! Caption file loading with format sniffing.

use std::path::Path;

use clipscout_models::TranscriptEntry;
use tracing::{debug, info};

use crate::error::CaptionResult;
use crate::json::parse_json_captions;
use crate::srt::parse_srt;

/// Load a caption file and parse it into transcript entries.
///
/// The format is sniffed from the file extension first (`.srt` / `.json`),
/// then from the leading non-whitespace character (`[` or `{` means JSON).
/// Parsing itself is lenient, so an unrecognized body simply yields an
/// empty transcript; only I/O failures surface as errors.
pub async fn load_transcript(path: impl AsRef<Path>) -> CaptionResult<Vec<TranscriptEntry>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    let entries = match extension.as_deref() {
        Some("srt") => parse_srt(&content),
        Some("json") => parse_json_captions(&content),
        _ => {
            debug!(path = ?path, "No recognized extension, sniffing caption body");
            sniff_and_parse(&content)
        }
    };

    info!(
        path = ?path,
        entries = entries.len(),
        "Loaded caption file"
    );

    Ok(entries)
}

fn sniff_and_parse(content: &str) -> Vec<TranscriptEntry> {
    match content.trim_start().chars().next() {
        Some('[') | Some('{') => parse_json_captions(content),
        _ => parse_srt(content),
    }
}
