//! Shared data models for the ClipScout pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Timestamped transcript entries and their prompt-line rendering
//! - Chunks of transcript handed to the finder backend
//! - Candidate spans proposed by the backend
//! - Tones and backend generation options

pub mod chunk;
pub mod options;
pub mod span;
pub mod tone;
pub mod transcript;

// Re-export common types
pub use chunk::Chunk;
pub use options::GenerationOptions;
pub use span::CandidateSpan;
pub use tone::{Tone, ToneParseError};
pub use transcript::TranscriptEntry;
