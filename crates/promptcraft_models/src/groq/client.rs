//! Groq chat-completion client.

use super::conversion::to_chat_request;
use super::dto::{ChatCompletionResponse, ErrorEnvelope};
use crate::ProviderConfig;
use async_trait::async_trait;
use promptcraft_core::CompletionRequest;
use promptcraft_error::{
    CompletionError, CompletionErrorKind, ConfigError, PromptcraftResult,
};
use promptcraft_interface::{CompletionDriver, Vision};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Groq API client (any OpenAI-compatible endpoint works).
///
/// Each call is a single non-streaming POST bounded by the configured
/// deadline. Failures are returned immediately; there is no retry.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    config: ProviderConfig,
}

impl GroqClient {
    /// Creates a client.
    ///
    /// The credential is not checked here; a missing key fails the first call
    /// instead, before any network traffic.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(model = %config.model(), endpoint = %config.endpoint()))]
    pub fn new(config: ProviderConfig) -> PromptcraftResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        debug!("Created Groq client");
        Ok(Self { client, config })
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    #[instrument(skip_all, fields(model = %model, multimodal = request.is_multimodal()))]
    async fn send(&self, request: &CompletionRequest, model: &str) -> PromptcraftResult<String> {
        let api_key = self.config.require_api_key()?;
        let body = to_chat_request(request, model);

        debug!(endpoint = %self.config.endpoint(), "Sending chat-completion request");

        let response = self
            .client
            .post(self.config.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send chat-completion request");
                let message = if e.is_timeout() {
                    format!("timed out after {}s", self.config.timeout_secs())
                } else {
                    e.to_string()
                };
                CompletionError::new(CompletionErrorKind::Transport(message))
            })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            error!(error = ?e, status, "Failed to read response body");
            CompletionError::new(CompletionErrorKind::Transport(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        let content = interpret_response(status, &text, self.config.service_name())?;
        debug!(status, content_len = content.len(), "Received completion");
        Ok(content)
    }
}

/// Maps a raw HTTP status and body to completion text or a typed failure.
///
/// - non-2xx: the body's `error.message` if it parses, else `"<service> error: <status>"`
/// - 2xx: the first choice's trimmed content, or `EmptyResponse`
///
/// # Examples
///
/// ```
/// use promptcraft_error::CompletionErrorKind;
/// use promptcraft_models::interpret_response;
///
/// let err = interpret_response(429, r#"{"error":{"message":"rate limited"}}"#, "Groq").unwrap_err();
/// assert_eq!(
///     err.kind,
///     CompletionErrorKind::RemoteService { status: 429, message: "rate limited".to_string() }
/// );
///
/// let err = interpret_response(502, "<html>bad gateway</html>", "Groq").unwrap_err();
/// assert_eq!(err.kind.user_message(), "Groq error: 502");
///
/// let text = interpret_response(200, r#"{"choices":[{"message":{"content":"  hi  "}}]}"#, "Groq");
/// assert_eq!(text.unwrap(), "hi");
/// ```
#[track_caller]
pub fn interpret_response(status: u16, body: &str, service: &str) -> Result<String, CompletionError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| format!("{} error: {}", service, status));
        error!(status, message = %message, "Completion endpoint returned error");
        return Err(CompletionError::new(CompletionErrorKind::RemoteService {
            status,
            message,
        }));
    }

    let parsed: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        error!(error = %e, "Failed to decode completion body");
        CompletionError::new(CompletionErrorKind::InvalidResponse(e.to_string()))
    })?;

    parsed
        .first_text()
        .ok_or_else(|| CompletionError::new(CompletionErrorKind::EmptyResponse(service.to_string())))
}

#[async_trait]
impl CompletionDriver for GroqClient {
    #[instrument(skip(self, req), fields(provider = "groq", model = %self.config.model()))]
    async fn complete(&self, req: &CompletionRequest) -> PromptcraftResult<String> {
        self.send(req, self.config.model()).await
    }

    fn provider_name(&self) -> &'static str {
        "groq"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}

#[async_trait]
impl Vision for GroqClient {
    #[instrument(skip(self, req), fields(provider = "groq", model = %self.config.vision_model()))]
    async fn complete_vision(&self, req: &CompletionRequest) -> PromptcraftResult<String> {
        self.send(req, self.config.vision_model()).await
    }

    fn vision_model_name(&self) -> &str {
        self.config.vision_model()
    }
}
