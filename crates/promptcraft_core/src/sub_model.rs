//! Downstream generation services a prompt can be tailored for.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Which kind of media a sub-model produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ModelFamily {
    /// Image synthesis products
    Image,
    /// Video synthesis products
    Video,
    /// Not in the catalog
    Unknown,
}

/// Target sub-model identifier.
///
/// Parsing never fails: labels outside the catalog become
/// [`SubModel::Other`] and receive the generic instruction.
///
/// # Examples
///
/// ```
/// use promptcraft_core::{ModelFamily, SubModel};
///
/// let model: SubModel = "dall-e 3".parse().unwrap();
/// assert_eq!(model, SubModel::DallE3);
/// assert_eq!(model.to_string(), "DALL-E 3");
/// assert_eq!(model.family(), ModelFamily::Image);
///
/// let other: SubModel = "Ideogram".parse().unwrap();
/// assert_eq!(other.family(), ModelFamily::Unknown);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(from = "String", into = "String")]
pub enum SubModel {
    /// Midjourney
    #[display("Midjourney")]
    Midjourney,
    /// OpenAI DALL-E 3
    #[display("DALL-E 3")]
    DallE3,
    /// Stable Diffusion (SD 1.5 / SDXL)
    #[display("Stable Diffusion")]
    StableDiffusion,
    /// Black Forest Labs Flux.1
    #[display("Flux.1")]
    Flux1,
    /// Runway Gen-3
    #[display("Runway Gen-3")]
    RunwayGen3,
    /// Luma Dream Machine
    #[display("Luma Dream Machine")]
    LumaDreamMachine,
    /// Kling
    #[display("Kling")]
    Kling,
    /// OpenAI Sora
    #[display("OpenAI Sora")]
    Sora,
    /// Google Veo
    #[display("Veo")]
    Veo,
    /// Any identifier outside the catalog
    #[display("{_0}")]
    Other(String),
}

impl SubModel {
    /// Image-family catalog entries.
    pub const IMAGE: [SubModel; 4] = [
        Self::Midjourney,
        Self::DallE3,
        Self::StableDiffusion,
        Self::Flux1,
    ];

    /// Video-family catalog entries.
    pub const VIDEO: [SubModel; 5] = [
        Self::RunwayGen3,
        Self::LumaDreamMachine,
        Self::Kling,
        Self::Sora,
        Self::Veo,
    ];

    /// The media family this sub-model belongs to.
    pub fn family(&self) -> ModelFamily {
        match self {
            Self::Midjourney | Self::DallE3 | Self::StableDiffusion | Self::Flux1 => {
                ModelFamily::Image
            }
            Self::RunwayGen3 | Self::LumaDreamMachine | Self::Kling | Self::Sora | Self::Veo => {
                ModelFamily::Video
            }
            Self::Other(_) => ModelFamily::Unknown,
        }
    }
}

impl FromStr for SubModel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Ok(match key.as_str() {
            "midjourney" | "mj" => Self::Midjourney,
            "dalle3" | "dalle" => Self::DallE3,
            "stablediffusion" | "sd" | "sdxl" => Self::StableDiffusion,
            "flux1" | "flux" => Self::Flux1,
            "runwaygen3" | "runway" => Self::RunwayGen3,
            "lumadreammachine" | "luma" => Self::LumaDreamMachine,
            "kling" => Self::Kling,
            "openaisora" | "sora" => Self::Sora,
            "veo" => Self::Veo,
            _ => Self::Other(s.trim().to_string()),
        })
    }
}

impl From<String> for SubModel {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl From<SubModel> for String {
    fn from(value: SubModel) -> Self {
        value.to_string()
    }
}
