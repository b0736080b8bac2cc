//! Tone pass driver.
//!
//! Composes the pipeline: chunk the transcript, dispatch every chunk to
//! the tone's finder with bounded parallelism, and parse each raw answer
//! into validated candidate spans.

use clipscout_models::{CandidateSpan, Tone, TranscriptEntry};
use serde_json::Value;
use tracing::{debug, info};

use crate::chunker::chunk_transcript;
use crate::config::PipelineConfig;
use crate::dispatch::ChunkDispatcher;
use crate::parser::parse_candidate_spans;
use crate::tones::ToneRegistry;

/// Run one discovery pass over a transcript for a single tone.
///
/// Returns one span list per chunk, in chunk order. A chunk whose backend
/// call fails (error, timeout, panic) contributes an empty list; the pass
/// itself always completes.
pub async fn run_tone_pass(
    entries: Vec<TranscriptEntry>,
    tone: Tone,
    registry: &ToneRegistry,
    config: &PipelineConfig,
    with_text: bool,
) -> Vec<Vec<CandidateSpan>> {
    let chunks = chunk_transcript(entries, &config.chunking);
    if chunks.is_empty() {
        return Vec::new();
    }

    info!(tone = %tone, chunks = chunks.len(), "Running tone pass");

    let spec = registry.spec(tone);
    let finder = spec.finder.clone();
    let options = config.generation.clone();

    let dispatcher = ChunkDispatcher::new(&config.dispatch);
    let raw = dispatcher
        .run(
            chunks,
            |_, chunk| {
                let finder = finder.clone();
                let options = options.clone();
                async move { finder.find_candidates(&chunk, &options).await }
            },
            |index, _, failure| {
                debug!(index, tone = %tone, kind = failure.kind(), "Substituting empty result");
                Value::Null
            },
        )
        .await;

    let results: Vec<Vec<CandidateSpan>> = raw
        .iter()
        .map(|value| parse_candidate_spans(value, with_text))
        .collect();

    info!(
        tone = %tone,
        spans = results.iter().map(Vec::len).sum::<usize>(),
        "Tone pass complete"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;

    use clipscout_models::{Chunk, GenerationOptions};
    use crate::config::{ChunkingConfig, DispatchConfig, ToneThresholds};
    use crate::error::{PipelineError, PipelineResult};
    use crate::finder::SpanFinder;

    /// Answers every chunk with a span covering the chunk's time range.
    struct EchoFinder;

    #[async_trait]
    impl SpanFinder for EchoFinder {
        async fn find_candidates(
            &self,
            chunk: &Chunk,
            _options: &GenerationOptions,
        ) -> PipelineResult<Value> {
            Ok(json!([{"start": chunk.start(), "end": chunk.end()}]))
        }
    }

    /// Fails for chunks starting at time zero, succeeds otherwise.
    struct FlakyFinder;

    #[async_trait]
    impl SpanFinder for FlakyFinder {
        async fn find_candidates(
            &self,
            chunk: &Chunk,
            _options: &GenerationOptions,
        ) -> PipelineResult<Value> {
            if chunk.start() == 0.0 {
                return Err(PipelineError::backend("simulated outage"));
            }
            Ok(json!([{"start": chunk.start(), "end": chunk.end()}]))
        }
    }

    fn entries() -> Vec<TranscriptEntry> {
        vec![
            TranscriptEntry::new(0.0, 1.0, "Hello"),
            TranscriptEntry::new(1.0, 2.0, "World"),
            TranscriptEntry::new(2.0, 3.0, "Again"),
        ]
    }

    fn tight_config() -> PipelineConfig {
        PipelineConfig {
            chunking: ChunkingConfig {
                max_chars: 20,
                max_items: None,
                overlap_lines: 1,
            },
            dispatch: DispatchConfig {
                workers: 2,
                task_timeout: None,
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_pass_returns_one_span_list_per_chunk() {
        let registry =
            ToneRegistry::with_thresholds(Arc::new(EchoFinder), &ToneThresholds::default());
        let results =
            run_tone_pass(entries(), Tone::Funny, &registry, &tight_config(), false).await;

        // The tight budget yields three chunks; each echoes its time range.
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], vec![CandidateSpan::new(0.0, 1.0)]);
        assert_eq!(results[1], vec![CandidateSpan::new(0.0, 2.0)]);
        assert_eq!(results[2], vec![CandidateSpan::new(1.0, 3.0)]);
    }

    #[tokio::test]
    async fn test_failed_chunks_contribute_empty_lists() {
        let registry =
            ToneRegistry::with_thresholds(Arc::new(FlakyFinder), &ToneThresholds::default());
        let results =
            run_tone_pass(entries(), Tone::Educational, &registry, &tight_config(), false).await;

        assert_eq!(results.len(), 3);
        assert!(results[0].is_empty());
        assert!(results[1].is_empty());
        assert_eq!(results[2], vec![CandidateSpan::new(1.0, 3.0)]);
    }

    #[tokio::test]
    async fn test_empty_transcript_is_a_noop() {
        let registry =
            ToneRegistry::with_thresholds(Arc::new(EchoFinder), &ToneThresholds::default());
        let results =
            run_tone_pass(Vec::new(), Tone::Inspiring, &registry, &tight_config(), false).await;
        assert!(results.is_empty());
    }
}
