//! Chat-completion provider clients for PromptCraft.
//!
//! The default provider is Groq's OpenAI-compatible endpoint. Any service that
//! speaks the same `/chat/completions` shape can be targeted by changing the
//! endpoint and model in [`ProviderConfig`].
//!
//! # Example
//!
//! ```no_run
//! use promptcraft_core::CompletionRequest;
//! use promptcraft_interface::CompletionDriver;
//! use promptcraft_models::{GroqClient, ProviderConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GroqClient::new(ProviderConfig::from_env())?;
//! let request = CompletionRequest::text("You are terse.", "a cat", 0.7, 512);
//! let text = client.complete(&request).await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod groq;

pub use config::{API_KEY_PLACEHOLDER, ProviderConfig, ProviderConfigBuilder};
pub use groq::{
    ChatCompletionRequest, ChatCompletionResponse, ChatContent, ChatMessage, ContentPart,
    GroqClient, interpret_response,
};
