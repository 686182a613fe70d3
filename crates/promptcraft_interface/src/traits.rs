//! Trait definitions for remote completion backends.

use async_trait::async_trait;
use promptcraft_core::CompletionRequest;
use promptcraft_error::PromptcraftResult;

/// Core trait that every chat-completion backend implements.
///
/// One call issues exactly one request; implementations never retry.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Send the request and return the first completion's trimmed text.
    ///
    /// # Errors
    ///
    /// - `ConfigError` when the credential is missing or a placeholder
    /// - `CompletionError` for transport failures, non-2xx responses and empty completions
    async fn complete(&self, req: &CompletionRequest) -> PromptcraftResult<String>;

    /// Provider name (e.g., "groq").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama3-70b-8192").
    fn model_name(&self) -> &str;
}

/// Backends that accept image parts in the user message.
#[async_trait]
pub trait Vision: CompletionDriver {
    /// Send a multimodal request against the vision-capable model.
    ///
    /// Same error contract as [`CompletionDriver::complete`].
    async fn complete_vision(&self, req: &CompletionRequest) -> PromptcraftResult<String>;

    /// Vision model identifier.
    fn vision_model_name(&self) -> &str;

    /// Supported image formats (MIME types).
    fn supported_image_formats(&self) -> &[&'static str] {
        &["image/png", "image/jpeg", "image/webp", "image/gif"]
    }

    /// Maximum image size in bytes.
    fn max_image_size_bytes(&self) -> usize {
        4 * 1024 * 1024
    }
}
