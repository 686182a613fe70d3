//! The user's generation request.

use crate::{AspectRatio, CameraMovement, DetailLevel, GenerationMode, SubModel};
use promptcraft_error::{GenerationError, GenerationErrorKind};
use serde::{Deserialize, Serialize};

/// Everything the template builder needs for one request.
///
/// Optional fields stay `None` until the template builder substitutes its
/// defaults. The idea is trimmed and must not be blank.
///
/// # Examples
///
/// ```
/// use promptcraft_core::{GenerationMode, GenerationOptions, SubModel};
///
/// let options = GenerationOptions::builder()
///     .idea("  a lighthouse in a storm ")
///     .mode(GenerationMode::Image)
///     .sub_model(SubModel::Midjourney)
///     .style("Oil Painting")
///     .build()
///     .unwrap();
///
/// assert_eq!(options.idea(), "a lighthouse in a storm");
/// assert!(options.mood().is_none());
///
/// assert!(GenerationOptions::builder().idea("   ").build().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(
    setter(into),
    build_fn(name = "build_unchecked", private, validate = "Self::validate")
)]
pub struct GenerationOptions {
    /// The user's raw idea
    idea: String,
    /// Image or video
    #[builder(default)]
    mode: GenerationMode,
    /// Target downstream service
    #[builder(default, setter(into, strip_option))]
    sub_model: Option<SubModel>,
    /// Visual style label (image mode)
    #[builder(default, setter(into, strip_option))]
    style: Option<String>,
    /// Emotional tone
    #[builder(default, setter(into, strip_option))]
    mood: Option<String>,
    /// Frame shape (image mode)
    #[builder(default, setter(into, strip_option))]
    aspect_ratio: Option<AspectRatio>,
    /// Camera movement (video mode)
    #[builder(default, setter(into, strip_option))]
    camera: Option<CameraMovement>,
    /// Output verbosity
    #[builder(default)]
    detail: DetailLevel,
}

impl GenerationOptions {
    /// Creates a new builder.
    pub fn builder() -> GenerationOptionsBuilder {
        GenerationOptionsBuilder::default()
    }

    /// Image-mode options for an idea with every other field defaulted.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::EmptyIdea`] for blank input.
    #[track_caller]
    pub fn for_idea(idea: impl Into<String>) -> Result<Self, GenerationError> {
        Self::builder().idea(idea).build()
    }

    /// True when the idea is blank; only reachable through deserialisation.
    pub fn is_blank(&self) -> bool {
        self.idea.trim().is_empty()
    }
}

impl GenerationOptionsBuilder {
    /// Validates and builds, trimming the idea.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::EmptyIdea`] when the idea is missing or blank.
    #[track_caller]
    pub fn build(&self) -> Result<GenerationOptions, GenerationError> {
        let mut options = self.build_unchecked()?;
        options.idea = options.idea.trim().to_string();
        Ok(options)
    }

    fn validate(&self) -> Result<(), String> {
        match &self.idea {
            Some(idea) if idea.trim().is_empty() => Err("idea is blank".to_string()),
            _ => Ok(()),
        }
    }
}

impl From<GenerationOptionsBuilderError> for GenerationError {
    #[track_caller]
    fn from(err: GenerationOptionsBuilderError) -> Self {
        match err {
            GenerationOptionsBuilderError::UninitializedField("idea")
            | GenerationOptionsBuilderError::ValidationError(_) => {
                GenerationError::new(GenerationErrorKind::EmptyIdea)
            }
            other => GenerationError::new(GenerationErrorKind::InvalidOptions(other.to_string())),
        }
    }
}
