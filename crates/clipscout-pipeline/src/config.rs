//! Pipeline configuration.

use std::time::Duration;

use clipscout_models::GenerationOptions;

/// Chunking configuration.
#[derive(Debug, Clone)]
pub struct ChunkingConfig {
    /// Character budget per chunk, measured in prompt-line costs
    pub max_chars: usize,
    /// Optional cap on entries per chunk
    pub max_items: Option<usize>,
    /// Trailing entries carried over into the next chunk
    pub overlap_lines: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chars: 6000,
            max_items: None,
            overlap_lines: 2,
        }
    }
}

impl ChunkingConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            max_chars: std::env::var("PIPELINE_CHUNK_MAX_CHARS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(6000),
            max_items: std::env::var("PIPELINE_CHUNK_MAX_ITEMS")
                .ok()
                .and_then(|s| s.parse().ok()),
            overlap_lines: std::env::var("PIPELINE_CHUNK_OVERLAP_LINES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        }
    }
}

/// Dispatcher configuration.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Maximum concurrently executing tasks
    pub workers: usize,
    /// Per-slot result wait bound; `None` or zero means wait indefinitely
    pub task_timeout: Option<Duration>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            task_timeout: Some(Duration::from_secs(120)),
        }
    }
}

impl DispatchConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            workers: std::env::var("PIPELINE_WORKERS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4),
            task_timeout: Some(Duration::from_secs(
                std::env::var("PIPELINE_TASK_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(120),
            )),
        }
    }
}

/// Minimum-rating thresholds per tone, applied downstream of the finder.
#[derive(Debug, Clone)]
pub struct ToneThresholds {
    pub funny: f64,
    pub inspiring: f64,
    pub educational: f64,
}

impl Default for ToneThresholds {
    fn default() -> Self {
        Self {
            funny: 7.0,
            inspiring: 7.5,
            educational: 6.5,
        }
    }
}

impl ToneThresholds {
    /// Create thresholds from environment variables.
    pub fn from_env() -> Self {
        Self {
            funny: std::env::var("PIPELINE_MIN_RATING_FUNNY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(7.0),
            inspiring: std::env::var("PIPELINE_MIN_RATING_INSPIRING")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(7.5),
            educational: std::env::var("PIPELINE_MIN_RATING_EDUCATIONAL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(6.5),
        }
    }
}

/// Aggregate pipeline configuration.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub chunking: ChunkingConfig,
    pub dispatch: DispatchConfig,
    pub thresholds: ToneThresholds,
    pub generation: GenerationOptions,
}

impl PipelineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            chunking: ChunkingConfig::from_env(),
            dispatch: DispatchConfig::from_env(),
            thresholds: ToneThresholds::from_env(),
            generation: GenerationOptions::default(),
        }
    }
}
