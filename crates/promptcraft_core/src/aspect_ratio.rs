//! Fixed image aspect ratios.

use serde::{Deserialize, Serialize};

/// Aspect ratios offered for image generation.
///
/// # Examples
///
/// ```
/// use promptcraft_core::AspectRatio;
/// use std::str::FromStr;
///
/// let ratio = AspectRatio::from_str("16:9").unwrap();
/// assert_eq!(ratio, AspectRatio::Widescreen);
/// assert_eq!(ratio.to_string(), "16:9");
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
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum AspectRatio {
    /// 1:1
    #[default]
    #[strum(serialize = "1:1")]
    #[serde(rename = "1:1")]
    Square,
    /// 16:9
    #[strum(serialize = "16:9")]
    #[serde(rename = "16:9")]
    Widescreen,
    /// 9:16
    #[strum(serialize = "9:16")]
    #[serde(rename = "9:16")]
    Vertical,
    /// 4:3
    #[strum(serialize = "4:3")]
    #[serde(rename = "4:3")]
    Standard,
    /// 3:4
    #[strum(serialize = "3:4")]
    #[serde(rename = "3:4")]
    Portrait,
    /// 3:2
    #[strum(serialize = "3:2")]
    #[serde(rename = "3:2")]
    Photo,
    /// 2:3
    #[strum(serialize = "2:3")]
    #[serde(rename = "2:3")]
    PhotoPortrait,
    /// 21:9
    #[strum(serialize = "21:9")]
    #[serde(rename = "21:9")]
    Cinematic,
}
