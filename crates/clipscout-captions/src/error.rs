//! Caption error types.

use thiserror::Error;

/// Result type for caption operations.
pub type CaptionResult<T> = Result<T, CaptionError>;

/// Errors that can occur while loading caption files.
///
/// Parsing is lenient by design, so malformed bodies yield empty results
/// rather than errors; only I/O problems surface here.
#[derive(Debug, Error)]
pub enum CaptionError {
    #[error("Failed to read caption file: {0}")]
    Io(#[from] std::io::Error),
}
