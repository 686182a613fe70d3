//! Static rule catalogs consulted by the template builder.
//!
//! Image sub-models each get a [`ImageRuleSet`] record; anything not in
//! [`IMAGE_RULES`] uses [`GENERIC_IMAGE_RULES`]. Camera movements map to fixed
//! cinematographic descriptions, with custom movements passed through as written.

use promptcraft_core::{AspectRatio, CameraMovement, SubModel};
use std::borrow::Cow;

/// Model version appended to Midjourney prompts.
pub const MIDJOURNEY_VERSION: &str = "6.1";

/// Fixed text a sub-model requires at the end of every positive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSuffix {
    /// Nothing appended
    None,
    /// `--ar <ratio> --v <version>`
    AspectAndVersion {
        /// Model version flag value
        version: &'static str,
    },
}

impl PromptSuffix {
    /// The literal suffix for `ratio`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use promptcraft_core::AspectRatio;
    /// use promptcraft_prompt::rules::PromptSuffix;
    ///
    /// let suffix = PromptSuffix::AspectAndVersion { version: "6.1" };
    /// assert_eq!(suffix.render(AspectRatio::Widescreen).unwrap(), "--ar 16:9 --v 6.1");
    /// assert!(PromptSuffix::None.render(AspectRatio::Square).is_none());
    /// ```
    pub fn render(&self, ratio: AspectRatio) -> Option<String> {
        match self {
            Self::None => None,
            Self::AspectAndVersion { version } => Some(format!("--ar {} --v {}", ratio, version)),
        }
    }
}

/// Syntax rules for one image sub-model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRuleSet {
    /// Sub-model the rules apply to, `None` for the generic fallback
    pub model: Option<SubModel>,
    /// Instruction lines injected verbatim
    pub directives: &'static [&'static str],
    /// Required positive-prompt suffix
    pub suffix: PromptSuffix,
}

/// Rules for image sub-models with their own prompt syntax.
pub static IMAGE_RULES: [ImageRuleSet; 4] = [
    ImageRuleSet {
        model: Some(SubModel::Midjourney),
        directives: &[
            "Write each positive prompt as comma-separated descriptive phrases, most important subject first.",
            "Favour concrete art-direction terms: lighting setup, lens, film stock, art movement, rendering style.",
            "Do not use weight syntax such as (word:1.2) or double colons.",
        ],
        suffix: PromptSuffix::AspectAndVersion {
            version: MIDJOURNEY_VERSION,
        },
    },
    ImageRuleSet {
        model: Some(SubModel::DallE3),
        directives: &[
            "Write each positive prompt as natural-language paragraphs in full sentences.",
            "Never append parameters or suffixes such as --ar, --v or --no, and never use weight syntax.",
            "Describe the scene as you would to a human illustrator, including composition and point of view.",
        ],
        suffix: PromptSuffix::None,
    },
    ImageRuleSet {
        model: Some(SubModel::StableDiffusion),
        directives: &[
            "Write each positive prompt as comma-separated tags, not sentences.",
            "Start with quality tags such as masterpiece, best quality, highly detailed.",
            "Emphasise key tags with weighted syntax like (keyword:1.2); keep weights between 1.1 and 1.5.",
            "Write the negative prompt as comma-separated defect tags.",
        ],
        suffix: PromptSuffix::None,
    },
    ImageRuleSet {
        model: Some(SubModel::Flux1),
        directives: &[
            "Describe the scene clinically and literally: materials, surface finishes, exact colours and spatial layout.",
            "State where each element sits in the frame (foreground, midground, background, left, right).",
            "Avoid subjective adjectives such as beautiful, stunning or epic, and avoid weight syntax.",
        ],
        suffix: PromptSuffix::None,
    },
];

/// Rules for unknown sub-models.
pub static GENERIC_IMAGE_RULES: ImageRuleSet = ImageRuleSet {
    model: None,
    directives: &[
        "Write each positive prompt as vivid descriptive prose that any modern image model can follow.",
        "Cover subject, composition, lighting, colour palette, texture and artistic style.",
    ],
    suffix: PromptSuffix::None,
};

/// Rule record for `model`, falling back to the generic rules.
///
/// # Examples
///
/// ```
/// use promptcraft_core::SubModel;
/// use promptcraft_prompt::rules::{image_rules, GENERIC_IMAGE_RULES};
///
/// assert_eq!(image_rules(Some(&SubModel::DallE3)).model, Some(SubModel::DallE3));
/// assert_eq!(image_rules(Some(&SubModel::Kling)), &GENERIC_IMAGE_RULES);
/// assert_eq!(image_rules(None), &GENERIC_IMAGE_RULES);
/// ```
pub fn image_rules(model: Option<&SubModel>) -> &'static ImageRuleSet {
    model
        .and_then(|model| {
            IMAGE_RULES
                .iter()
                .find(|rules| rules.model.as_ref() == Some(model))
        })
        .unwrap_or(&GENERIC_IMAGE_RULES)
}

/// Cinematographic description for each fixed camera movement.
pub static CAMERA_DESCRIPTIONS: [(CameraMovement, &str); 11] = [
    (
        CameraMovement::Static,
        "Static shot: the camera stays locked off on a tripod while only the subject and environment move.",
    ),
    (
        CameraMovement::ZoomIn,
        "Slow zoom in: the lens gradually tightens the framing toward the subject, building intensity.",
    ),
    (
        CameraMovement::ZoomOut,
        "Slow zoom out: the framing gradually widens from the subject to reveal the surrounding scene.",
    ),
    (
        CameraMovement::PanLeft,
        "Pan left: the camera rotates horizontally from right to left on a fixed axis, sweeping across the scene.",
    ),
    (
        CameraMovement::PanRight,
        "Pan right: the camera rotates horizontally from left to right on a fixed axis, sweeping across the scene.",
    ),
    (
        CameraMovement::TruckLeft,
        "Truck left: the whole camera glides sideways to the left, parallel to the subject, producing parallax.",
    ),
    (
        CameraMovement::TruckRight,
        "Truck right: the whole camera glides sideways to the right, parallel to the subject, producing parallax.",
    ),
    (
        CameraMovement::TiltUp,
        "Tilt up: the camera pivots vertically upward from a low point, revealing height and scale.",
    ),
    (
        CameraMovement::TiltDown,
        "Tilt down: the camera pivots vertically downward from above, settling on the subject.",
    ),
    (
        CameraMovement::Orbit,
        "Orbit: the camera circles smoothly around the subject at a constant distance, showing it from every side.",
    ),
    (
        CameraMovement::Handheld,
        "Handheld: subtle organic shake and drift as if an operator carries the camera, giving documentary immediacy.",
    ),
];

/// Instruction fragment for a camera movement.
///
/// Custom movements are returned verbatim.
///
/// # Examples
///
/// ```
/// use promptcraft_core::CameraMovement;
/// use promptcraft_prompt::rules::camera_description;
///
/// assert!(camera_description(&CameraMovement::Orbit).starts_with("Orbit"));
/// let custom = CameraMovement::Custom("whip pan to the door".to_string());
/// assert_eq!(camera_description(&custom), "whip pan to the door");
/// ```
pub fn camera_description(movement: &CameraMovement) -> Cow<'static, str> {
    CAMERA_DESCRIPTIONS
        .iter()
        .find(|(fixed, _)| fixed == movement)
        .map(|(_, description)| Cow::Borrowed(*description))
        .unwrap_or_else(|| Cow::Owned(movement.to_string()))
}
