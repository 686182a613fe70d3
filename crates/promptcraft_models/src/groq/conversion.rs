//! Type conversions between PromptCraft and OpenAI-compatible wire types.

use super::dto::{ChatCompletionRequest, ChatContent, ChatMessage, ContentPart, ImageUrl};
use promptcraft_core::{CompletionRequest, Input, Message};

/// Converts a provider-neutral request to the wire body for `model`.
pub fn to_chat_request(request: &CompletionRequest, model: &str) -> ChatCompletionRequest {
    let messages = request.messages().iter().map(to_chat_message).collect();
    ChatCompletionRequest::new(model, messages, *request.temperature(), *request.max_tokens())
}

/// Plain text messages become a string; anything with an image becomes parts.
fn to_chat_message(message: &Message) -> ChatMessage {
    let role = message.role.to_string();

    if !message.is_multimodal() {
        let text = message
            .content
            .iter()
            .filter_map(|part| match part {
                Input::Text(text) => Some(text.as_str()),
                Input::Image(_) => None,
            })
            .collect::<Vec<_>>()
            .join("\n");
        return ChatMessage::new(role, ChatContent::Text(text));
    }

    let parts = message
        .content
        .iter()
        .map(|part| match part {
            Input::Text(text) => ContentPart::Text { text: text.clone() },
            Input::Image(image) => ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: image.data_url(),
                },
            },
        })
        .collect();
    ChatMessage::new(role, ChatContent::Parts(parts))
}
