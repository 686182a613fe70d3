//! Prompt assembly and response handling for PromptCraft.
//!
//! The pipeline is three steps wired together by [`PromptOrchestrator`]:
//!
//! 1. [`build_system_instruction`] turns [`GenerationOptions`] into the
//!    instruction sent to the model, using the rule tables in [`rules`].
//! 2. A [`CompletionDriver`] sends it.
//! 3. [`parse_variants`] turns whatever came back into a complete
//!    [`GenerationResult`], never failing.
//!
//! [`GenerationOptions`]: promptcraft_core::GenerationOptions
//! [`GenerationResult`]: promptcraft_core::GenerationResult
//! [`CompletionDriver`]: promptcraft_interface::CompletionDriver

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod normalizer;
mod orchestrator;
pub mod rules;
mod sequencer;
mod template;

pub use normalizer::{
    DELIMITER, EMPTY_RESPONSE_PROMPT, parse_delimited, parse_variants, strip_code_fences,
};
pub use orchestrator::{
    PromptOrchestrator, SamplingSettings, VISION_UNAVAILABLE_MESSAGE, VisionOutcome,
};
pub use sequencer::{RequestSequencer, RequestTicket};
pub use template::{
    build_system_instruction, build_user_message, CLOSING_DIRECTIVE, LEGACY_SYSTEM_PROMPT,
    VISION_SYSTEM_PROMPT,
};
