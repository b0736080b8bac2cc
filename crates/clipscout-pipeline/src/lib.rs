//! Transcript chunking, bounded parallel dispatch, and candidate span
//! parsing for the ClipScout pipeline.
//!
//! The pipeline prepares timestamped transcripts for a slow, unreliable
//! text-generation backend and turns its loosely-structured answers into
//! validated time spans:
//! - `chunker` packs entries into budgeted, overlapping chunks
//! - `heuristics` flags whether text already looks like clean prose
//! - `dispatch` runs per-chunk tasks with bounded parallelism and
//!   per-slot timeouts, substituting fallbacks for failed slots
//! - `parser` validates the backend's span proposals
//! - `tones` binds each tone to its finder and rating threshold
//! - `pass` composes the above into a single discovery pass

pub mod chunker;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod finder;
pub mod heuristics;
pub mod metrics;
pub mod parser;
pub mod pass;
pub mod tones;

// Re-export common types
pub use chunker::{chunk_transcript, ChunkPacker};
pub use config::{ChunkingConfig, DispatchConfig, PipelineConfig, ToneThresholds};
pub use dispatch::{ChunkDispatcher, TaskFailure};
pub use error::{PipelineError, PipelineResult};
pub use finder::SpanFinder;
pub use parser::{decode_backend_json, parse_candidate_spans};
pub use pass::run_tone_pass;
pub use tones::{ToneRegistry, ToneSpec};
