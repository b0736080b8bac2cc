//! Transcript chunking.
//!
//! Packs ordered transcript entries into chunks bounded by a character
//! budget and an optional item cap, seeding a trailing-entry overlap
//! between consecutive chunks so boundary context is not lost.

use clipscout_models::{Chunk, TranscriptEntry};
use tracing::debug;

use crate::config::ChunkingConfig;

/// Push/finish state machine that packs entries into bounded chunks.
///
/// Budgets are measured in prompt-line costs (`TranscriptEntry::line_cost`),
/// so the accounting matches the exact text the backend will see. A chunk's
/// first entry is never rejected: a single entry whose cost exceeds the
/// budget still lands alone in its own chunk.
pub struct ChunkPacker {
    max_chars: usize,
    max_items: Option<usize>,
    overlap_lines: usize,
    buffer: Vec<TranscriptEntry>,
    running_chars: usize,
    chunks: Vec<Chunk>,
}

impl ChunkPacker {
    /// Create a packer for the given budgets.
    pub fn new(config: &ChunkingConfig) -> Self {
        Self {
            max_chars: config.max_chars,
            max_items: config.max_items,
            overlap_lines: config.overlap_lines,
            buffer: Vec::new(),
            running_chars: 0,
            chunks: Vec::new(),
        }
    }

    /// Feed the next entry, closing the current chunk first if it would
    /// overflow either budget.
    pub fn push(&mut self, entry: TranscriptEntry) {
        let cost = entry.line_cost();
        if self.would_overflow(cost) {
            self.close_chunk();
        }
        self.running_chars += cost;
        self.buffer.push(entry);
    }

    /// Close out any buffered entries and return the finished chunks.
    pub fn finish(mut self) -> Vec<Chunk> {
        if !self.buffer.is_empty() {
            let closed = std::mem::take(&mut self.buffer);
            self.chunks.push(Chunk::new(closed));
        }
        self.chunks
    }

    fn would_overflow(&self, cost: usize) -> bool {
        if self.buffer.is_empty() {
            return false;
        }
        if self.running_chars + cost > self.max_chars {
            return true;
        }
        matches!(self.max_items, Some(cap) if self.buffer.len() >= cap)
    }

    /// Snapshot the buffer as a finished chunk and reseed the buffer with
    /// its trailing `overlap_lines` entries. The seed is empty when the
    /// closed chunk is shorter than the overlap.
    fn close_chunk(&mut self) {
        let closed = std::mem::take(&mut self.buffer);
        if self.overlap_lines > 0 && closed.len() >= self.overlap_lines {
            self.buffer = closed[closed.len() - self.overlap_lines..].to_vec();
        }
        self.running_chars = self
            .buffer
            .iter()
            .map(TranscriptEntry::line_cost)
            .sum();
        self.chunks.push(Chunk::new(closed));
    }
}

/// Pack a whole transcript into chunks.
///
/// Boundaries are deterministic for identical inputs and budgets, and chunk
/// order matches entry order.
pub fn chunk_transcript(entries: Vec<TranscriptEntry>, config: &ChunkingConfig) -> Vec<Chunk> {
    let total = entries.len();
    let mut packer = ChunkPacker::new(config);
    for entry in entries {
        packer.push(entry);
    }
    let chunks = packer.finish();

    debug!(
        entries = total,
        chunks = chunks.len(),
        max_chars = config.max_chars,
        overlap_lines = config.overlap_lines,
        "Chunked transcript"
    );

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(start: f64, end: f64, text: impl Into<String>) -> TranscriptEntry {
        TranscriptEntry::new(start, end, text)
    }

    fn texts(chunk: &Chunk) -> Vec<&str> {
        chunk.entries.iter().map(|e| e.text.as_str()).collect()
    }

    fn config(max_chars: usize, max_items: Option<usize>, overlap_lines: usize) -> ChunkingConfig {
        ChunkingConfig {
            max_chars,
            max_items,
            overlap_lines,
        }
    }

    #[test]
    fn test_hello_world_again_trace() {
        // Every line here formats to 17 chars, so each costs 18.
        let entries = vec![
            entry(0.0, 1.0, "Hello"),
            entry(1.0, 2.0, "World"),
            entry(2.0, 3.0, "Again"),
        ];
        let chunks = chunk_transcript(entries, &config(20, None, 1));

        assert_eq!(chunks.len(), 3);
        assert_eq!(texts(&chunks[0]), vec!["Hello"]);
        assert_eq!(texts(&chunks[1]), vec!["Hello", "World"]);
        assert_eq!(texts(&chunks[2]), vec!["World", "Again"]);
    }

    #[test]
    fn test_everything_fits_in_one_chunk() {
        let entries = vec![
            entry(0.0, 1.0, "Hello"),
            entry(1.0, 2.0, "World"),
            entry(2.0, 3.0, "Again"),
        ];
        let chunks = chunk_transcript(entries, &config(1000, None, 2));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 3);
    }

    #[test]
    fn test_budget_respected_without_overlap() {
        let entries: Vec<_> = (0..40)
            .map(|i| entry(i as f64, i as f64 + 1.0, "some spoken words here"))
            .collect();
        let max_chars = 200;
        let chunks = chunk_transcript(entries, &config(max_chars, None, 0));

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.char_footprint() <= max_chars);
        }
    }

    #[test]
    fn test_oversized_entry_lands_alone() {
        let long_text = "x".repeat(500);
        let entries = vec![
            entry(0.0, 1.0, "short"),
            entry(1.0, 2.0, &long_text),
            entry(2.0, 3.0, "after"),
        ];
        let chunks = chunk_transcript(entries, &config(100, None, 0));

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1].len(), 1);
        assert!(chunks[1].char_footprint() > 100);
    }

    #[test]
    fn test_overlap_entries_repeat_across_boundaries() {
        let entries: Vec<_> = (0..12)
            .map(|i| entry(i as f64, i as f64 + 1.0, format!("line number {}", i)))
            .collect();
        let overlap = 2;
        let chunks = chunk_transcript(entries, &config(120, None, overlap));

        assert!(chunks.len() > 1);
        for pair in chunks.windows(2) {
            let prev = &pair[0].entries;
            let next = &pair[1].entries;
            if prev.len() >= overlap {
                assert_eq!(prev[prev.len() - overlap..], next[..overlap]);
            }
        }
    }

    #[test]
    fn test_reconstruction_from_overlapping_chunks() {
        let entries: Vec<_> = (0..20)
            .map(|i| entry(i as f64, i as f64 + 1.0, format!("entry {}", i)))
            .collect();
        let overlap = 2;
        let chunks = chunk_transcript(entries.clone(), &config(100, None, overlap));
        assert!(chunks.len() > 1);

        let mut rebuilt = chunks[0].entries.clone();
        for chunk in &chunks[1..] {
            rebuilt.extend_from_slice(&chunk.entries[overlap..]);
        }
        assert_eq!(rebuilt, entries);
    }

    #[test]
    fn test_item_cap() {
        let entries: Vec<_> = (0..10)
            .map(|i| entry(i as f64, i as f64 + 1.0, "w"))
            .collect();
        let chunks = chunk_transcript(entries, &config(10_000, Some(3), 0));

        assert_eq!(chunks.len(), 4);
        for chunk in &chunks[..3] {
            assert_eq!(chunk.len(), 3);
        }
        assert_eq!(chunks[3].len(), 1);
    }

    #[test]
    fn test_short_chunk_skips_overlap_seed() {
        // First chunk closes with a single entry, shorter than the overlap,
        // so the next chunk starts fresh.
        let long_text = "y".repeat(80);
        let entries = vec![
            entry(0.0, 1.0, &long_text),
            entry(1.0, 2.0, "next"),
            entry(2.0, 3.0, "more"),
        ];
        let chunks = chunk_transcript(entries, &config(60, None, 2));

        assert_eq!(texts(&chunks[1])[0], "next");
    }

    #[test]
    fn test_empty_transcript() {
        let chunks = chunk_transcript(Vec::new(), &ChunkingConfig::default());
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_deterministic_boundaries() {
        let entries: Vec<_> = (0..30)
            .map(|i| entry(i as f64, i as f64 + 1.0, format!("spoken line {}", i * 7 % 13)))
            .collect();
        let cfg = config(150, Some(6), 2);
        let a = chunk_transcript(entries.clone(), &cfg);
        let b = chunk_transcript(entries, &cfg);
        assert_eq!(a, b);
    }
}
