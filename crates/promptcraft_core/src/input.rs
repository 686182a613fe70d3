//! User-turn content parts.

use serde::{Deserialize, Serialize};

/// Inline image payload for vision requests.
///
/// # Examples
///
/// ```
/// use promptcraft_core::ImageInput;
///
/// let image = ImageInput::from_bytes("image/png", b"\x89PNG");
/// assert!(image.data_url().starts_with("data:image/png;base64,"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ImageInput {
    /// MIME type, e.g. "image/png"
    mime: String,
    /// Base64-encoded bytes
    base64: String,
}

impl ImageInput {
    /// Wraps already-encoded base64 data.
    pub fn new(mime: impl Into<String>, base64: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            base64: base64.into(),
        }
    }

    /// Encodes raw bytes.
    pub fn from_bytes(mime: impl Into<String>, bytes: &[u8]) -> Self {
        use base64::Engine;
        Self {
            mime: mime.into(),
            base64: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// `data:` URL form used by OpenAI-compatible image parts.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

/// A single part of a user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text
    Text(String),
    /// Inline image
    Image(ImageInput),
}
