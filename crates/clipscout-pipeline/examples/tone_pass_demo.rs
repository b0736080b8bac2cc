//! Demo: Bounded Tone Pass Over a Scripted Transcript
//!
//! Run with: cargo run -p clipscout-pipeline --example tone_pass_demo

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use serde_json::Value;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use clipscout_models::{Chunk, GenerationOptions, Tone, TranscriptEntry};
use clipscout_pipeline::{
    decode_backend_json, run_tone_pass, ChunkingConfig, DispatchConfig, PipelineConfig,
    PipelineResult, SpanFinder, ToneRegistry, ToneThresholds,
};

/// Scripted stand-in for a real model backend.
///
/// Sleeps a jittered latency per call, then answers with a fenced JSON
/// block quoting the chunk's longest entry, the shape real output arrives
/// in.
struct ScriptedFinder;

#[async_trait]
impl SpanFinder for ScriptedFinder {
    async fn find_candidates(
        &self,
        chunk: &Chunk,
        _options: &GenerationOptions,
    ) -> PipelineResult<Value> {
        let latency = rand::rng().random_range(20..=120);
        tokio::time::sleep(Duration::from_millis(latency)).await;

        let best = chunk
            .entries
            .iter()
            .max_by(|a, b| a.duration().total_cmp(&b.duration()));

        let raw = match best {
            Some(entry) => format!(
                "```json\n[{{\"start\": {}, \"end\": {}, \"text\": {}}}]\n```",
                entry.start,
                entry.end,
                Value::String(entry.text.clone())
            ),
            None => "```json\n[]\n```".to_string(),
        };
        Ok(decode_backend_json(&raw))
    }
}

fn transcript() -> Vec<TranscriptEntry> {
    vec![
        TranscriptEntry::new(0.0, 4.0, "Welcome back, today we are talking about habits."),
        TranscriptEntry::new(4.0, 11.5, "I once tried to learn the violin in a weekend, which went exactly as badly as you imagine."),
        TranscriptEntry::new(11.5, 16.0, "My neighbors left a note that just said: please stop."),
        TranscriptEntry::new(16.0, 23.0, "The real lesson is that small daily practice beats heroic weekend efforts every time."),
        TranscriptEntry::new(23.0, 28.5, "Research on spaced repetition backs this up across almost every skill."),
        TranscriptEntry::new(28.5, 34.0, "So start embarrassingly small, and let the streak do the work."),
    ]
}

#[tokio::main]
async fn main() {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("clipscout=debug".parse().unwrap());
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true).with_target(true))
        .with(env_filter)
        .init();

    let registry = ToneRegistry::with_thresholds(Arc::new(ScriptedFinder), &ToneThresholds::default());
    let config = PipelineConfig {
        chunking: ChunkingConfig {
            max_chars: 200,
            max_items: None,
            overlap_lines: 1,
        },
        dispatch: DispatchConfig {
            workers: 2,
            task_timeout: Some(Duration::from_secs(5)),
        },
        ..Default::default()
    };

    for tone in Tone::ALL {
        println!("\n{}", "=".repeat(60));
        println!(
            "TONE: {} (min rating {})",
            tone,
            registry.spec(*tone).min_rating
        );
        println!("{}", "=".repeat(60));

        let results = run_tone_pass(transcript(), *tone, &registry, &config, true).await;

        for (index, spans) in results.iter().enumerate() {
            println!("chunk {index}:");
            for span in spans {
                println!(
                    "  [{:.2}-{:.2}] {}",
                    span.start,
                    span.end,
                    span.text.as_deref().unwrap_or("<no quote>")
                );
            }
        }
    }
}
