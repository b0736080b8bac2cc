//! SRT caption parsing.

use clipscout_models::TranscriptEntry;
use regex::{Captures, Regex};
use tracing::debug;

/// Parse SRT content into timestamped transcript entries.
///
/// Blocks are separated by blank lines. Each block may start with a numeric
/// index line, followed by a `HH:MM:SS,mmm --> HH:MM:SS,mmm` timestamp line
/// and one or more text lines joined with spaces. Malformed blocks and
/// blank-text entries are skipped.
pub fn parse_srt(content: &str) -> Vec<TranscriptEntry> {
    let ts_pattern = Regex::new(
        r"(?:(\d{1,2}):)?(\d{1,2}):(\d{1,2})[,.](\d{1,3})\s*-->\s*(?:(\d{1,2}):)?(\d{1,2}):(\d{1,2})[,.](\d{1,3})",
    )
    .unwrap();
    let tag_pattern = Regex::new(r"<[^>]+>").unwrap();

    let mut entries = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    // Trailing sentinel flushes the final block.
    for line in content.lines().chain(std::iter::once("")) {
        let line = line.trim();
        if line.is_empty() {
            if !block.is_empty() {
                if let Some(entry) = parse_block(&block, &ts_pattern, &tag_pattern) {
                    entries.push(entry);
                }
                block.clear();
            }
        } else {
            block.push(line);
        }
    }

    entries
}

fn parse_block(lines: &[&str], ts_pattern: &Regex, tag_pattern: &Regex) -> Option<TranscriptEntry> {
    let mut idx = 0;

    // Optional numeric index line
    if lines.len() > 1 && lines[0].chars().all(|c| c.is_ascii_digit()) {
        idx = 1;
    }

    let caps = match lines.get(idx).and_then(|line| ts_pattern.captures(line)) {
        Some(caps) => caps,
        None => {
            debug!(first_line = ?lines.first(), "Skipping SRT block without timestamp line");
            return None;
        }
    };

    let start = clock_seconds(&caps, 1);
    let end = clock_seconds(&caps, 5);
    if end < start {
        debug!(start, end, "Skipping SRT block with reversed timestamps");
        return None;
    }

    let text = lines[idx + 1..]
        .iter()
        .map(|line| tag_pattern.replace_all(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        debug!(start, end, "Skipping SRT block with blank text");
        return None;
    }

    Some(TranscriptEntry::new(start, end, text))
}

/// Convert one timestamp's capture groups (hours optional, then minutes,
/// seconds, and fractional digits) starting at `base` into seconds.
fn clock_seconds(caps: &Captures<'_>, base: usize) -> f64 {
    let group = |i: usize| -> f64 {
        caps.get(base + i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0.0)
    };
    let frac = caps
        .get(base + 3)
        .and_then(|m| format!("0.{}", m.as_str()).parse().ok())
        .unwrap_or(0.0);
    group(0) * 3600.0 + group(1) * 60.0 + group(2) + frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_blocks_with_index_lines() {
        let srt = "1\n00:00:01,000 --> 00:00:02,500\nHello there\n\n2\n00:00:02,500 --> 00:00:04,000\nGeneral Kenobi\n";
        let entries = parse_srt(srt);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].start, 1.0);
        assert_eq!(entries[0].end, 2.5);
        assert_eq!(entries[0].text, "Hello there");
        assert_eq!(entries[1].text, "General Kenobi");
    }

    #[test]
    fn test_blocks_without_index_lines() {
        let srt = "00:00:00,000 --> 00:00:01,000\nfirst\n\n00:00:01,000 --> 00:00:02,000\nsecond\n";
        let entries = parse_srt(srt);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "first");
    }

    #[test]
    fn test_crlf_line_endings() {
        let srt = "1\r\n00:00:01,000 --> 00:00:02,000\r\nwindows captions\r\n\r\n";
        let entries = parse_srt(srt);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "windows captions");
    }

    #[test]
    fn test_multiline_text_joined_with_spaces() {
        let srt = "1\n00:00:01,000 --> 00:00:03,000\nline one\nline two\n";
        let entries = parse_srt(srt);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "line one line two");
    }

    #[test]
    fn test_tags_stripped() {
        let srt = "1\n00:00:01,000 --> 00:00:02,000\n<i>emphasized</i> text\n";
        let entries = parse_srt(srt);
        assert_eq!(entries[0].text, "emphasized text");
    }

    #[test]
    fn test_malformed_blocks_skipped() {
        let srt = "not a caption block\n\n1\n00:00:01,000 --> 00:00:02,000\nkept\n\ngarbage\nwithout timestamps\n";
        let entries = parse_srt(srt);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "kept");
    }

    #[test]
    fn test_blank_text_filtered() {
        let srt = "1\n00:00:01,000 --> 00:00:02,000\n<i></i>\n\n2\n00:00:02,000 --> 00:00:03,000\nspoken\n";
        let entries = parse_srt(srt);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "spoken");
    }

    #[test]
    fn test_reversed_timestamps_skipped() {
        let srt = "1\n00:00:05,000 --> 00:00:02,000\nbackwards\n";
        assert!(parse_srt(srt).is_empty());
    }

    #[test]
    fn test_hours_and_millis() {
        let srt = "1\n01:02:03,450 --> 01:02:04,500\nclock math\n";
        let entries = parse_srt(srt);
        assert_eq!(entries[0].start, 3723.45);
        assert_eq!(entries[0].end, 3724.5);
    }

    #[test]
    fn test_dot_separated_millis() {
        let srt = "1\n00:00:01.250 --> 00:00:02.000\ndot style\n";
        let entries = parse_srt(srt);
        assert_eq!(entries[0].start, 1.25);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_srt("").is_empty());
        assert!(parse_srt("\n\n\n").is_empty());
    }
}
