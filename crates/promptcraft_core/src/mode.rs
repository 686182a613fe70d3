//! Generation mode.

use serde::{Deserialize, Serialize};

/// What the enhanced prompt will be fed into.
///
/// # Examples
///
/// ```
/// use promptcraft_core::GenerationMode;
/// use std::str::FromStr;
///
/// assert_eq!(GenerationMode::from_str("video").unwrap(), GenerationMode::Video);
/// assert_eq!(GenerationMode::default().to_string(), "image");
/// ```
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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GenerationMode {
    /// Still image synthesis
    #[default]
    Image,
    /// Video clip synthesis
    Video,
}
