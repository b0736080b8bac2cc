//! Chunk quality heuristics.
//!
//! Cheap, deterministic checks that flag whether transcript text already
//! looks like well-formed sentence prose. Used to decide whether a chunk
//! needs cleanup before being shown to the backend.

use std::collections::HashSet;

use clipscout_models::Chunk;

/// Minimum fraction of entries ending in terminal punctuation.
pub const SENTENCE_TERMINAL_RATIO: f64 = 0.7;
/// Minimum mean entry text length, in characters.
pub const SENTENCE_AVG_LEN_MIN: f64 = 24.0;
/// Maximum mean entry text length, in characters.
pub const SENTENCE_AVG_LEN_MAX: f64 = 240.0;
/// Minimum average whitespace-delimited token length.
pub const MIN_AVG_TOKEN_LEN: f64 = 3.0;
/// Minimum punctuation-character density over the whole text.
pub const MIN_PUNCT_DENSITY: f64 = 0.01;
/// Maximum ratio of non-alphanumeric, non-whitespace characters.
pub const MAX_SYMBOL_RATIO: f64 = 0.20;
/// Minimum distinct-token to total-token ratio.
pub const MIN_TYPE_TOKEN_RATIO: f64 = 0.3;

/// True when a chunk's entries already read like full sentences.
///
/// An empty chunk is trivially sentence-like. Otherwise the chunk passes
/// when at least [`SENTENCE_TERMINAL_RATIO`] of its entries end in `.`,
/// `!`, or `?` and the mean entry length falls inside
/// [`SENTENCE_AVG_LEN_MIN`]..=[`SENTENCE_AVG_LEN_MAX`].
pub fn chunk_is_sentence_like(chunk: &Chunk) -> bool {
    if chunk.is_empty() {
        return true;
    }

    let total = chunk.len() as f64;
    let terminal = chunk
        .entries
        .iter()
        .filter(|e| {
            let text = e.text.trim();
            text.ends_with('.') || text.ends_with('!') || text.ends_with('?')
        })
        .count() as f64;
    let avg_len = chunk
        .entries
        .iter()
        .map(|e| e.text.chars().count())
        .sum::<usize>() as f64
        / total;

    terminal / total >= SENTENCE_TERMINAL_RATIO
        && avg_len >= SENTENCE_AVG_LEN_MIN
        && avg_len <= SENTENCE_AVG_LEN_MAX
}

/// Score how much a whole transcript looks like clean prose.
///
/// Runs four independent checks over the text (average token length,
/// punctuation density, symbol ratio, type/token ratio) and returns the
/// fraction that pass, so the result is always one of 0.0, 0.25, 0.5,
/// 0.75, or 1.0. Empty or token-free input scores 0.0.
pub fn score_transcript_quality(text: &str) -> f64 {
    let total_chars = text.chars().count();
    if total_chars == 0 {
        return 0.0;
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let token_count = tokens.len() as f64;

    let avg_token_len = tokens
        .iter()
        .map(|t| t.chars().count())
        .sum::<usize>() as f64
        / token_count;

    let punct = text
        .chars()
        .filter(|c| matches!(c, '.' | ',' | '!' | '?' | ';' | ':'))
        .count() as f64;
    let punct_density = punct / total_chars as f64;

    let symbols = text
        .chars()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
        .count() as f64;
    let symbol_ratio = symbols / total_chars as f64;

    let distinct: HashSet<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    let type_token_ratio = distinct.len() as f64 / token_count;

    let checks = [
        avg_token_len >= MIN_AVG_TOKEN_LEN,
        punct_density >= MIN_PUNCT_DENSITY,
        symbol_ratio <= MAX_SYMBOL_RATIO,
        type_token_ratio >= MIN_TYPE_TOKEN_RATIO,
    ];
    checks.iter().filter(|&&passed| passed).count() as f64 / checks.len() as f64
}
