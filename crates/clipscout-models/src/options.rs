//! Backend generation options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default sampling temperature (deterministic output)
pub const DEFAULT_TEMPERATURE: f32 = 0.0;
/// Default nucleus sampling threshold
pub const DEFAULT_TOP_P: f32 = 0.9;
/// Default cap on generated tokens per call
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

/// Generation options forwarded to the finder backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationOptions {
    /// Sampling temperature (0.0 for deterministic output)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling threshold
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Cap on generated tokens per call
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}
fn default_top_p() -> f32 {
    DEFAULT_TOP_P
}
fn default_max_output_tokens() -> u32 {
    DEFAULT_MAX_OUTPUT_TOKENS
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl GenerationOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns new options with updated temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Returns new options with updated token cap.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.temperature, 0.0);
        assert_eq!(opts.top_p, 0.9);
        assert_eq!(opts.max_output_tokens, 1024);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let opts: GenerationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, GenerationOptions::default());

        let opts: GenerationOptions = serde_json::from_str(r#"{"temperature":0.7}"#).unwrap();
        assert_eq!(opts.temperature, 0.7);
        assert_eq!(opts.top_p, DEFAULT_TOP_P);
    }

    #[test]
    fn test_builders() {
        let opts = GenerationOptions::new()
            .with_temperature(0.4)
            .with_max_output_tokens(2048);
        assert_eq!(opts.temperature, 0.4);
        assert_eq!(opts.max_output_tokens, 2048);
    }
}
