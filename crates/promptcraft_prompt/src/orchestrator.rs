//! Template → completion → normalizer composition.

use crate::{
    LEGACY_SYSTEM_PROMPT, RequestSequencer, VISION_SYSTEM_PROMPT, build_system_instruction,
    build_user_message, parse_delimited, parse_variants,
};
use promptcraft_core::{
    CompletionRequest, GenerationOptions, GenerationResult, ImageInput, Input, Message,
    PromptVariant, Role,
};
use promptcraft_error::{
    GenerationError, GenerationErrorKind, PromptcraftError, PromptcraftErrorKind, PromptcraftResult,
};
use promptcraft_interface::{CompletionDriver, Vision};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Shown instead of an error when the vision model cannot be used.
pub const VISION_UNAVAILABLE_MESSAGE: &str =
    "Image analysis is temporarily unavailable: the vision model could not be reached. Please describe your idea in text instead.";

/// Temperature and token caps per operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct SamplingSettings {
    /// Temperature for three-variant generation
    generate_temperature: f32,
    /// Token cap for three-variant generation
    generate_max_tokens: u32,
    /// Temperature for single-prompt enhancement
    enhance_temperature: f32,
    /// Token cap for single-prompt enhancement
    enhance_max_tokens: u32,
    /// Temperature for image description
    vision_temperature: f32,
    /// Token cap for image description
    vision_max_tokens: u32,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            generate_temperature: 0.8,
            generate_max_tokens: 1024,
            enhance_temperature: 0.7,
            enhance_max_tokens: 512,
            vision_temperature: 0.5,
            vision_max_tokens: 512,
        }
    }
}

/// Result of an image-description request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisionOutcome {
    /// The image was described; one prompt duplicated across all keys
    Described(GenerationResult),
    /// The vision model is missing or rejected the request
    Unavailable(String),
}

/// Drives one generation request end to end.
///
/// Each call issues a request ticket. When a newer call starts before an
/// older one resolves, the older call returns
/// [`GenerationErrorKind::Superseded`] instead of its result.
///
/// # Examples
///
/// ```no_run
/// use promptcraft_core::GenerationOptions;
/// use promptcraft_interface::CompletionDriver;
/// use promptcraft_prompt::PromptOrchestrator;
///
/// async fn run<D: CompletionDriver>(driver: D) -> promptcraft_error::PromptcraftResult<()> {
///     let orchestrator = PromptOrchestrator::new(driver);
///     let options = GenerationOptions::for_idea("a lighthouse in a storm")?;
///     let result = orchestrator.generate(&options).await?;
///     println!("{}", result.balanced().positive());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct PromptOrchestrator<D> {
    driver: D,
    sampling: SamplingSettings,
    sequencer: RequestSequencer,
}

impl<D> PromptOrchestrator<D> {
    /// Creates an orchestrator with default sampling settings.
    pub fn new(driver: D) -> Self {
        Self::with_sampling(driver, SamplingSettings::default())
    }

    /// Creates an orchestrator with explicit sampling settings.
    pub fn with_sampling(driver: D, sampling: SamplingSettings) -> Self {
        Self {
            driver,
            sampling,
            sequencer: RequestSequencer::new(),
        }
    }

    /// The completion backend.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Active sampling settings.
    pub fn sampling(&self) -> &SamplingSettings {
        &self.sampling
    }

    /// Ticket source shared by every operation.
    pub fn sequencer(&self) -> &RequestSequencer {
        &self.sequencer
    }
}

impl<D: CompletionDriver> PromptOrchestrator<D> {
    /// Generates the three prompt variants for an idea.
    ///
    /// # Errors
    ///
    /// - [`GenerationErrorKind::EmptyIdea`] for a blank idea, before any request
    /// - [`GenerationErrorKind::Superseded`] when a newer request was issued meanwhile
    /// - Configuration and completion errors from the driver
    #[instrument(
        skip(self, options),
        fields(
            mode = %options.mode(),
            model = self.driver.model_name(),
            idea_length = options.idea().len()
        )
    )]
    pub async fn generate(&self, options: &GenerationOptions) -> PromptcraftResult<GenerationResult> {
        if options.is_blank() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyIdea).into());
        }

        let ticket = self.sequencer.issue();
        let request = CompletionRequest::text(
            build_system_instruction(options),
            build_user_message(options),
            self.sampling.generate_temperature,
            self.sampling.generate_max_tokens,
        );

        debug!(ticket = %ticket, "Requesting prompt variants");
        let outcome = self.driver.complete(&request).await;
        self.sequencer.ensure_current(ticket)?;
        let raw = outcome?;

        let result = parse_variants(&raw);
        info!(ticket = %ticket, response_length = raw.len(), "Generated prompt variants");
        Ok(result)
    }

    /// Expands an idea into a single positive/negative prompt pair.
    ///
    /// # Errors
    ///
    /// Same contract as [`PromptOrchestrator::generate`].
    #[instrument(skip(self, idea), fields(model = self.driver.model_name(), idea_length = idea.len()))]
    pub async fn enhance(&self, idea: &str) -> PromptcraftResult<PromptVariant> {
        let idea = idea.trim();
        if idea.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyIdea).into());
        }

        let ticket = self.sequencer.issue();
        let request = CompletionRequest::text(
            LEGACY_SYSTEM_PROMPT,
            idea,
            self.sampling.enhance_temperature,
            self.sampling.enhance_max_tokens,
        );

        let outcome = self.driver.complete(&request).await;
        self.sequencer.ensure_current(ticket)?;
        let variant = parse_delimited(&outcome?);
        info!(ticket = %ticket, "Enhanced prompt");
        Ok(variant)
    }
}

impl<D: Vision> PromptOrchestrator<D> {
    /// Reverse-engineers an image into a prompt.
    ///
    /// A missing, retired or rejected vision model is not an error: it
    /// yields [`VisionOutcome::Unavailable`] with
    /// [`VISION_UNAVAILABLE_MESSAGE`].
    ///
    /// # Errors
    ///
    /// - [`GenerationErrorKind::InvalidOptions`] for unsupported formats or oversized images
    /// - [`GenerationErrorKind::Superseded`] when a newer request was issued meanwhile
    /// - Configuration and other completion errors from the driver
    #[instrument(
        skip(self, image, hint),
        fields(model = self.driver.vision_model_name(), mime = %image.mime())
    )]
    pub async fn describe_image(
        &self,
        image: &ImageInput,
        hint: Option<&str>,
    ) -> PromptcraftResult<VisionOutcome> {
        self.check_image(image)?;

        let mut text = "Write a prompt that recreates this image.".to_string();
        if let Some(hint) = hint.map(str::trim).filter(|hint| !hint.is_empty()) {
            text.push_str(&format!(" Focus on: {}", hint));
        }
        let request = CompletionRequest::builder()
            .messages(vec![
                Message::system(VISION_SYSTEM_PROMPT),
                Message {
                    role: Role::User,
                    content: vec![Input::Text(text), Input::Image(image.clone())],
                },
            ])
            .temperature(self.sampling.vision_temperature)
            .max_tokens(self.sampling.vision_max_tokens)
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::InvalidOptions(e.to_string())))?;

        let ticket = self.sequencer.issue();
        let outcome = self.driver.complete_vision(&request).await;
        self.sequencer.ensure_current(ticket)?;

        match outcome {
            Ok(raw) => Ok(VisionOutcome::Described(GenerationResult::uniform(
                parse_delimited(&raw),
            ))),
            Err(e) if vision_unavailable(&e) => {
                warn!(error = %e, "Vision model unavailable");
                Ok(VisionOutcome::Unavailable(VISION_UNAVAILABLE_MESSAGE.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    fn check_image(&self, image: &ImageInput) -> Result<(), GenerationError> {
        let mime = image.mime().to_ascii_lowercase();
        if !self.driver.supported_image_formats().contains(&mime.as_str()) {
            return Err(GenerationError::new(GenerationErrorKind::InvalidOptions(
                format!("Unsupported image format: {}", image.mime()),
            )));
        }

        let decoded_len = image.base64().len() / 4 * 3;
        let limit = self.driver.max_image_size_bytes();
        if decoded_len > limit {
            return Err(GenerationError::new(GenerationErrorKind::InvalidOptions(
                format!("Image is {} bytes, the limit is {} bytes", decoded_len, limit),
            )));
        }
        Ok(())
    }
}

fn vision_unavailable(err: &PromptcraftError) -> bool {
    matches!(
        err.kind(),
        PromptcraftErrorKind::Completion(completion) if completion.kind.indicates_model_unavailable()
    )
}
