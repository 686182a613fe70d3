//! Core data types for PromptCraft.
//!
//! This crate provides the request and result types shared by the template
//! builder, the completion clients, the response normalizer and history.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aspect_ratio;
mod camera;
mod detail;
mod history;
mod input;
mod mode;
mod options;
mod preset;
mod request;
mod role;
mod sub_model;
mod variant;

pub use aspect_ratio::AspectRatio;
pub use camera::CameraMovement;
pub use detail::DetailLevel;
pub use history::{HistoryRecord, RecordId, UserId};
pub use input::{ImageInput, Input};
pub use mode::GenerationMode;
pub use options::{GenerationOptions, GenerationOptionsBuilder, GenerationOptionsBuilderError};
pub use preset::{StylePreset, apply_preset};
pub use request::{CompletionRequest, CompletionRequestBuilder, Message};
pub use role::Role;
pub use sub_model::{ModelFamily, SubModel};
pub use variant::{DEFAULT_NEGATIVE, GenerationResult, PromptVariant, VariantKey};
