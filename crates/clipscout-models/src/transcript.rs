//! Timestamped transcript entries and their prompt-line rendering.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single timestamped line of transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TranscriptEntry {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Spoken text for this line.
    pub text: String,
}

impl TranscriptEntry {
    /// Create a new entry.
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Duration in seconds. Clamped to zero for degenerate timestamps.
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// True when the text is empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Render this entry as one line of prompt text.
    ///
    /// The format is load-bearing: the chunker budgets against this exact
    /// string, so rounding or spacing changes move chunk boundaries.
    ///
    /// # Examples
    /// ```
    /// use clipscout_models::TranscriptEntry;
    ///
    /// let entry = TranscriptEntry::new(0.0, 1.5, "Hello");
    /// assert_eq!(entry.prompt_line(), "[0.00-1.50] Hello");
    /// ```
    pub fn prompt_line(&self) -> String {
        format!("[{:.2}-{:.2}] {}", self.start, self.end, self.text)
    }

    /// Character cost of this entry inside a chunk: the prompt line length
    /// plus one for the joining newline.
    pub fn line_cost(&self) -> usize {
        self.prompt_line().chars().count() + 1
    }
}
