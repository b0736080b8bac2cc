//! Caption file parsing for the ClipScout pipeline.
//!
//! Produces ordered [`TranscriptEntry`](clipscout_models::TranscriptEntry)
//! lists from SRT and JSON caption files. Parsers are lenient: malformed
//! blocks and elements are skipped, and blank-text entries are filtered so
//! they never reach the chunker.

pub mod error;
pub mod json;
pub mod loader;
pub mod srt;

pub use error::{CaptionError, CaptionResult};
pub use json::parse_json_captions;
pub use loader::load_transcript;
pub use srt::parse_srt;
