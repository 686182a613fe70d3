//! System-instruction assembly.
//!
//! [`build_system_instruction`] is a pure function of [`GenerationOptions`]:
//! image and video requests get structurally different instructions, and
//! both end with [`CLOSING_DIRECTIVE`] so the normalizer always sees the same
//! response contract.

use crate::rules::{camera_description, image_rules};
use promptcraft_core::{GenerationMode, GenerationOptions};
use std::fmt::Write;

/// Style label used when none is selected.
pub const DEFAULT_STYLE: &str = "General";

/// Mood label used when none is selected.
pub const DEFAULT_MOOD: &str = "Neutral";

/// Fixed tail of every generation instruction.
pub const CLOSING_DIRECTIVE: &str = r#"Return exactly three prompt variants named "balanced", "creative" and "artistic".
"balanced" stays faithful to the idea, "creative" takes imaginative liberties, "artistic" leans into a strong artistic style.
Each variant is an object with a "positive" string (what to include) and a "negative" string (what to exclude).
Respond with raw JSON only, shaped exactly like {"balanced":{"positive":"...","negative":"..."},"creative":{"positive":"...","negative":"..."},"artistic":{"positive":"...","negative":"..."}}.
Do not add any explanation, prose or markdown code fences."#;

/// Instruction for the single-prompt enhancement path.
pub const LEGACY_SYSTEM_PROMPT: &str = r#"You are an expert prompt engineer specializing in Midjourney and AI image generation.
Your task is to take a user's short, simple idea and expand it into a highly detailed, professional prompt.

Rules:
- Add specific details about lighting (e.g., golden hour, cinematic lighting, soft ambient light)
- Include artistic style references (e.g., hyperrealistic, oil painting, cyberpunk aesthetic)
- Specify camera settings when appropriate (e.g., 85mm lens, shallow depth of field, bird's eye view)
- Add artistic techniques (e.g., volumetric fog, chromatic aberration, double exposure)
- Include mood and atmosphere descriptors
- Keep the prompt concise but rich (2-4 sentences max)
- Output the enhanced prompt, then the separator |||, then a comma-separated negative prompt of things to avoid
- No explanations, no headings, no comments"#;

/// Instruction for reverse-engineering an image into a prompt.
pub const VISION_SYSTEM_PROMPT: &str = r#"You are an expert prompt engineer who reverse-engineers images into prompts for AI image generators.
Study the image and write one prompt that would recreate it: subject, composition, lighting, colour palette, texture, lens and artistic style.
Output the prompt, then the separator |||, then a comma-separated negative prompt of things to avoid.
No explanations, no headings, no comments."#;

/// Builds the system instruction for a generation request.
///
/// Never fails; absent options fall back to `General` style, `Neutral` mood,
/// a `1:1` aspect ratio and a static camera.
///
/// # Examples
///
/// ```
/// use promptcraft_core::{AspectRatio, GenerationOptions, SubModel};
/// use promptcraft_prompt::{CLOSING_DIRECTIVE, build_system_instruction};
///
/// let options = GenerationOptions::builder()
///     .idea("a fox in the snow")
///     .sub_model(SubModel::Midjourney)
///     .aspect_ratio(AspectRatio::Widescreen)
///     .build()
///     .unwrap();
///
/// let instruction = build_system_instruction(&options);
/// assert!(instruction.contains("--ar 16:9 --v 6.1"));
/// assert!(instruction.ends_with(CLOSING_DIRECTIVE));
/// ```
pub fn build_system_instruction(options: &GenerationOptions) -> String {
    let mut instruction = match options.mode() {
        GenerationMode::Image => image_instruction(options),
        GenerationMode::Video => video_instruction(options),
    };
    instruction.push('\n');
    instruction.push_str(CLOSING_DIRECTIVE);

    tracing::trace!(
        mode = %options.mode(),
        length = instruction.len(),
        "Built system instruction"
    );
    instruction
}

/// Renders the user turn for a generation request.
///
/// # Examples
///
/// ```
/// use promptcraft_core::GenerationOptions;
/// use promptcraft_prompt::build_user_message;
///
/// let options = GenerationOptions::for_idea("a red bicycle").unwrap();
/// assert_eq!(build_user_message(&options), "Idea: \"a red bicycle\"");
/// ```
pub fn build_user_message(options: &GenerationOptions) -> String {
    format!("Idea: \"{}\"", options.idea())
}

fn image_instruction(options: &GenerationOptions) -> String {
    let rules = image_rules(options.sub_model().as_ref());
    let ratio = options.aspect_ratio().unwrap_or_default();
    let target = options
        .sub_model()
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "any modern text-to-image model".to_string());

    let mut out = String::new();
    out.push_str("You are a world-class prompt engineer for AI image generation.\n");
    out.push_str(
        "Transform the user's idea into vivid, production-ready image prompts. \
         Describe subject, composition, lighting, colour palette, texture, lens and rendering style.\n\n",
    );
    // Writing to a String is infallible.
    let _ = writeln!(out, "Target model: {}", target);
    let _ = writeln!(out, "Style: {}", label_or(options.style(), DEFAULT_STYLE));
    let _ = writeln!(out, "Mood: {}", label_or(options.mood(), DEFAULT_MOOD));
    let _ = writeln!(out, "Aspect ratio: {}", ratio);
    let _ = writeln!(out, "Length: {}", options.detail().sentence_guidance());

    out.push_str("\nModel syntax rules:\n");
    for directive in rules.directives {
        let _ = writeln!(out, "- {}", directive);
    }
    if let Some(suffix) = rules.suffix.render(ratio) {
        let _ = writeln!(
            out,
            "- Every positive prompt must end with exactly: {}",
            suffix
        );
    }
    out
}

fn video_instruction(options: &GenerationOptions) -> String {
    let camera = options.camera().clone().unwrap_or_default();
    let target = options
        .sub_model()
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "any modern text-to-video model".to_string());

    let mut out = String::new();
    out.push_str("You are a world-class prompt engineer for AI video generation.\n");
    out.push_str(
        "Transform the user's idea into cinematic video prompts. \
         Describe the shot, subject motion, pacing, lighting changes and atmosphere over time.\n\n",
    );
    let _ = writeln!(out, "Target video model: {}", target);
    let _ = writeln!(out, "Mood: {}", label_or(options.mood(), DEFAULT_MOOD));
    let _ = writeln!(out, "Camera movement: {}", camera_description(&camera));
    let _ = writeln!(out, "Length: {}", options.detail().sentence_guidance());
    out.push_str(
        "\nWrite each positive prompt as continuous shot description in present tense. \
         Keep the camera movement consistent across all variants. \
         Write the negative prompt as comma-separated artifacts to avoid, such as flicker, morphing or jittery motion.\n",
    );
    out
}

fn label_or<'a>(label: &'a Option<String>, fallback: &'a str) -> &'a str {
    label
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .unwrap_or(fallback)
}
