//! Finder capability trait.

use async_trait::async_trait;
use clipscout_models::{Chunk, GenerationOptions};
use serde_json::Value;

use crate::error::PipelineResult;

/// Capability for asking a text-generation backend to propose candidate
/// spans for one chunk.
///
/// Implementations own the actual backend call (transport, model choice,
/// provider retries) and return the decoded JSON payload; see
/// [`crate::parser::decode_backend_json`] for handling raw fenced text.
/// Implementations are shared across concurrent workers, so they must be
/// `Send + Sync` and internally cheap to call from many tasks at once.
#[async_trait]
pub trait SpanFinder: Send + Sync {
    /// Propose candidate spans for `chunk`, returning the backend's decoded
    /// JSON answer.
    async fn find_candidates(
        &self,
        chunk: &Chunk,
        options: &GenerationOptions,
    ) -> PipelineResult<Value>;
}
