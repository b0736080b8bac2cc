//! Tone definitions for clip discovery passes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tones a discovery pass can target.
///
/// The set is closed: adding a variant must force every `match` over tones
/// to be revisited, so no wildcard arms and no `Default` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Humorous, laugh-out-loud moments
    Funny,
    /// Motivational or emotionally uplifting moments
    Inspiring,
    /// Explanatory or insight-dense moments
    Educational,
}

impl Tone {
    /// All supported tones, in pass order.
    pub const ALL: &'static [Tone] = &[Tone::Funny, Tone::Inspiring, Tone::Educational];

    /// Returns the tone name as used in filenames and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Funny => "funny",
            Tone::Inspiring => "inspiring",
            Tone::Educational => "educational",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tone {
    type Err = ToneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "funny" => Ok(Tone::Funny),
            "inspiring" => Ok(Tone::Inspiring),
            "educational" => Ok(Tone::Educational),
            _ => Err(ToneParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown tone: {0}")]
pub struct ToneParseError(String);
