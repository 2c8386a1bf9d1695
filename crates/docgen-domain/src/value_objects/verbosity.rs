//! Verbosity presets and the decoding parameters they select

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::Error;

/// Caller-selected summary length preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Short summaries, no repetition penalty
    #[default]
    Concise,
    /// Longer summaries with repetition avoidance
    Detailed,
}

impl Verbosity {
    /// Lowercase wire name of the preset
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concise => "concise",
            Self::Detailed => "detailed",
        }
    }

    /// Decoding parameters for this preset
    pub fn preset(&self) -> DecodingPreset {
        DecodingPreset::for_verbosity(*self)
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "concise" => Ok(Self::Concise),
            "detailed" => Ok(Self::Detailed),
            other => Err(Error::invalid_argument(format!(
                "Unknown verbosity '{other}'. Use concise or detailed"
            ))),
        }
    }
}

/// Sequence-to-sequence decoding configuration
///
/// Only the verbosity preset decides these values; a run never mixes presets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodingPreset {
    /// Upper bound on generated tokens
    pub max_length: u32,
    /// Lower bound on generated tokens
    pub min_length: u32,
    /// Beam search width
    pub num_beams: u32,
    /// Exponential length bias (>1.0 favours longer output)
    pub length_penalty: f32,
    /// Forbid repeating n-grams of this size (0 disables)
    pub no_repeat_ngram_size: u32,
    /// Penalty applied to already generated tokens (1.0 disables)
    pub repetition_penalty: f32,
    /// Stop beams as soon as enough candidates finished
    pub early_stopping: bool,
}

impl DecodingPreset {
    /// Short output, no repetition penalty
    pub const CONCISE: Self = Self {
        max_length: 64,
        min_length: 10,
        num_beams: 4,
        length_penalty: 1.0,
        no_repeat_ngram_size: 0,
        repetition_penalty: 1.0,
        early_stopping: true,
    };

    /// Long output with repetition avoidance
    pub const DETAILED: Self = Self {
        max_length: 256,
        min_length: 30,
        num_beams: 8,
        length_penalty: 1.5,
        no_repeat_ngram_size: 3,
        repetition_penalty: 1.2,
        early_stopping: true,
    };

    /// Preset selected by `verbosity`
    pub fn for_verbosity(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Concise => Self::CONCISE,
            Verbosity::Detailed => Self::DETAILED,
        }
    }
}
