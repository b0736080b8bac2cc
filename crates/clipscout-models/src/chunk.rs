//! Chunks of transcript handed to the finder backend.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::transcript::TranscriptEntry;

/// An ordered run of transcript entries sized for one backend call.
///
/// Chunks are transient: they live for a single pass and are dropped once
/// results come back. Footprint and counts are derived on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Chunk {
    /// Entries in transcript order.
    pub entries: Vec<TranscriptEntry>,
}

impl Chunk {
    /// Create a chunk from entries.
    pub fn new(entries: Vec<TranscriptEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries in the chunk.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the chunk holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total character footprint: the sum of each entry's line cost.
    pub fn char_footprint(&self) -> usize {
        self.entries.iter().map(TranscriptEntry::line_cost).sum()
    }

    /// Start time of the first entry, or 0.0 for an empty chunk.
    pub fn start(&self) -> f64 {
        self.entries.first().map(|e| e.start).unwrap_or(0.0)
    }

    /// End time of the last entry, or 0.0 for an empty chunk.
    pub fn end(&self) -> f64 {
        self.entries.last().map(|e| e.end).unwrap_or(0.0)
    }

    /// Render the chunk as newline-joined prompt lines.
    pub fn to_prompt_text(&self) -> String {
        self.entries
            .iter()
            .map(TranscriptEntry::prompt_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Vec<TranscriptEntry>> for Chunk {
    fn from(entries: Vec<TranscriptEntry>) -> Self {
        Self::new(entries)
    }
}
