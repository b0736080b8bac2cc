//! Tone registry.
//!
//! Binds every [`Tone`] to its finder and minimum-rating threshold at
//! construction time. The registry holds one field per tone, so adding a
//! variant without wiring a spec breaks the build instead of failing at
//! runtime, and lookup is an exhaustive match with no default branch.

use std::sync::Arc;

use clipscout_models::Tone;

use crate::config::ToneThresholds;
use crate::finder::SpanFinder;

/// Everything a discovery pass needs for one tone.
#[derive(Clone)]
pub struct ToneSpec {
    /// Backend capability used to propose spans for this tone.
    pub finder: Arc<dyn SpanFinder>,
    /// Minimum rating a candidate must reach downstream to be kept.
    pub min_rating: f64,
}

impl ToneSpec {
    /// Create a spec.
    pub fn new(finder: Arc<dyn SpanFinder>, min_rating: f64) -> Self {
        Self { finder, min_rating }
    }
}

/// Immutable tone-to-spec mapping, built once at startup and shared across
/// workers without locking.
#[derive(Clone)]
pub struct ToneRegistry {
    funny: ToneSpec,
    inspiring: ToneSpec,
    educational: ToneSpec,
}

impl ToneRegistry {
    /// Create a registry from one spec per tone.
    pub fn new(funny: ToneSpec, inspiring: ToneSpec, educational: ToneSpec) -> Self {
        Self {
            funny,
            inspiring,
            educational,
        }
    }

    /// Create a registry that routes every tone to the same finder, with
    /// per-tone thresholds from configuration.
    pub fn with_thresholds(finder: Arc<dyn SpanFinder>, thresholds: &ToneThresholds) -> Self {
        Self::new(
            ToneSpec::new(finder.clone(), thresholds.funny),
            ToneSpec::new(finder.clone(), thresholds.inspiring),
            ToneSpec::new(finder, thresholds.educational),
        )
    }

    /// Look up the spec for a tone.
    pub fn spec(&self, tone: Tone) -> &ToneSpec {
        match tone {
            Tone::Funny => &self.funny,
            Tone::Inspiring => &self.inspiring,
            Tone::Educational => &self.educational,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use clipscout_models::{Chunk, GenerationOptions};
    use serde_json::Value;

    use crate::error::PipelineResult;

    struct NullFinder;

    #[async_trait]
    impl SpanFinder for NullFinder {
        async fn find_candidates(
            &self,
            _chunk: &Chunk,
            _options: &GenerationOptions,
        ) -> PipelineResult<Value> {
            Ok(Value::Null)
        }
    }

    #[test]
    fn test_every_tone_resolves() {
        let registry =
            ToneRegistry::with_thresholds(Arc::new(NullFinder), &ToneThresholds::default());

        assert_eq!(registry.spec(Tone::Funny).min_rating, 7.0);
        assert_eq!(registry.spec(Tone::Inspiring).min_rating, 7.5);
        assert_eq!(registry.spec(Tone::Educational).min_rating, 6.5);
    }

    #[test]
    fn test_distinct_specs_per_tone() {
        let finder: Arc<dyn SpanFinder> = Arc::new(NullFinder);
        let registry = ToneRegistry::new(
            ToneSpec::new(finder.clone(), 1.0),
            ToneSpec::new(finder.clone(), 2.0),
            ToneSpec::new(finder, 3.0),
        );

        assert_eq!(registry.spec(Tone::Funny).min_rating, 1.0);
        assert_eq!(registry.spec(Tone::Inspiring).min_rating, 2.0);
        assert_eq!(registry.spec(Tone::Educational).min_rating, 3.0);
    }
}
