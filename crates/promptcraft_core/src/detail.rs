//! Output verbosity control.

use serde::{Deserialize, Serialize};

/// Coarse three-point control over target output length.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DetailLevel {
    /// Short prompts
    Concise,
    /// Medium-length prompts
    #[default]
    Balanced,
    /// Long, richly described prompts
    Detailed,
}

impl DetailLevel {
    /// Sentence-count guidance handed to the model.
    pub fn sentence_guidance(self) -> &'static str {
        match self {
            Self::Concise => "Keep each positive prompt short: 1-2 sentences.",
            Self::Balanced => "Keep each positive prompt medium length: 3-4 sentences.",
            Self::Detailed => "Make each positive prompt long and richly detailed: 5-7 sentences.",
        }
    }
}
