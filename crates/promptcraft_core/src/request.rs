//! Completion request types.

use crate::{Input, Role};
use serde::{Deserialize, Serialize};

/// One chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Sender role
    pub role: Role,
    /// Content parts; a single text part for plain messages
    pub content: Vec<Input>,
}

impl Message {
    /// System message with text content.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: vec![Input::Text(text.into())],
        }
    }

    /// User message with text content.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![Input::Text(text.into())],
        }
    }

    /// True when any part is an image.
    pub fn is_multimodal(&self) -> bool {
        self.content.iter().any(|part| matches!(part, Input::Image(_)))
    }
}

/// Provider-neutral chat-completion request.
///
/// # Examples
///
/// ```
/// use promptcraft_core::{CompletionRequest, Message};
///
/// let request = CompletionRequest::builder()
///     .messages(vec![Message::system("You are terse."), Message::user("a cat")])
///     .temperature(0.7)
///     .max_tokens(512u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 2);
/// assert_eq!(*request.max_tokens(), 512);
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
pub struct CompletionRequest {
    /// Conversation messages, system first
    messages: Vec<Message>,
    /// Sampling temperature
    #[builder(default = "0.7")]
    temperature: f32,
    /// Completion token cap
    #[builder(default = "512")]
    max_tokens: u32,
}

impl CompletionRequest {
    /// Creates a new builder.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }

    /// System instruction plus one text user message.
    pub fn text(
        system: impl Into<String>,
        user: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            messages: vec![Message::system(system), Message::user(user)],
            temperature,
            max_tokens,
        }
    }

    /// True when any message carries an image.
    pub fn is_multimodal(&self) -> bool {
        self.messages.iter().any(Message::is_multimodal)
    }
}
