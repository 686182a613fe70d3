//! Groq (OpenAI-compatible) chat-completion integration.

mod client;
mod conversion;
mod dto;

pub use client::{GroqClient, interpret_response};
pub use dto::{
    ChatCompletionRequest, ChatCompletionResponse, ChatContent, ChatMessage, ContentPart,
};
