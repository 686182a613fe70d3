//! Provider settings.
//!
//! Loaded from the `[provider]` table of `promptcraft.toml` by the facade
//! crate; every field has a default so an empty table is valid.

use promptcraft_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Value shipped in `.env.example`; treated the same as a missing key.
pub const API_KEY_PLACEHOLDER: &str = "your_groq_api_key_here";

/// Endpoint, model and sampling settings for the completion client.
///
/// # Example
///
/// ```toml
/// [provider]
/// endpoint = "https://api.groq.com/openai/v1/chat/completions"
/// model = "llama3-70b-8192"
/// vision_model = "llama-3.2-11b-vision-preview"
/// timeout_secs = 30
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
#[builder(setter(into))]
pub struct ProviderConfig {
    /// Bearer credential
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    api_key: Option<String>,
    /// Chat-completion URL
    #[serde(default = "default_endpoint")]
    #[builder(default = "default_endpoint()")]
    endpoint: String,
    /// Text model identifier
    #[serde(default = "default_model")]
    #[builder(default = "default_model()")]
    model: String,
    /// Vision-capable model identifier
    #[serde(default = "default_vision_model")]
    #[builder(default = "default_vision_model()")]
    vision_model: String,
    /// Name used in generic error messages
    #[serde(default = "default_service_name")]
    #[builder(default = "default_service_name()")]
    service_name: String,
    /// Per-request deadline in seconds
    #[serde(default = "default_timeout_secs")]
    #[builder(default = "default_timeout_secs()")]
    timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "llama3-70b-8192".to_string()
}

fn default_vision_model() -> String {
    "llama-3.2-11b-vision-preview".to_string()
}

fn default_service_name() -> String {
    "Groq".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            model: default_model(),
            vision_model: default_vision_model(),
            service_name: default_service_name(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    /// Creates a new builder.
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::default()
    }

    /// Defaults with the key taken from `GROQ_API_KEY`, if set.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GROQ_API_KEY").ok(),
            ..Self::default()
        }
    }

    /// Fills in the key from `GROQ_API_KEY` when none was configured.
    pub fn with_env_fallback(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = std::env::var("GROQ_API_KEY").ok();
        }
        self
    }

    /// Request deadline.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured credential, rejecting blanks and the placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the key is missing, blank, or still
    /// [`API_KEY_PLACEHOLDER`].
    #[track_caller]
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() && key != API_KEY_PLACEHOLDER => Ok(key),
            _ => Err(ConfigError::new(format!(
                "{} API key is not configured. Set GROQ_API_KEY or PROMPTCRAFT_PROVIDER__API_KEY, or add api_key to promptcraft.toml.",
                self.service_name
            ))),
        }
    }
}
