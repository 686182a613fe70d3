//! Top-level error wrapper types.

use crate::{CompletionError, ConfigError, GenerationError, HistoryError, JsonError};

/// Every error condition a PromptCraft operation can surface.
///
/// # Examples
///
/// ```
/// use promptcraft_error::{ConfigError, PromptcraftError};
///
/// let config_err = ConfigError::new("Missing API key");
/// let err: PromptcraftError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PromptcraftErrorKind {
    /// Missing or placeholder credential, unreadable configuration
    #[from(ConfigError)]
    Config(ConfigError),
    /// Remote completion failure
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Generation request rejected or superseded
    #[from(GenerationError)]
    Generation(GenerationError),
    /// History persistence failure
    #[from(HistoryError)]
    History(HistoryError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// PromptCraft error with kind discrimination.
///
/// # Examples
///
/// ```
/// use promptcraft_error::{ConfigError, PromptcraftErrorKind, PromptcraftResult};
///
/// fn might_fail() -> PromptcraftResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), PromptcraftErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("PromptCraft Error: {}", _0)]
pub struct PromptcraftError(Box<PromptcraftErrorKind>);

impl PromptcraftError {
    /// Create a new error from a kind.
    pub fn new(kind: PromptcraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PromptcraftErrorKind {
        &self.0
    }

    /// Short message suitable for a transient user notification.
    ///
    /// Strips the location suffixes and wrapper prefixes used in logs.
    pub fn user_message(&self) -> String {
        match self.kind() {
            PromptcraftErrorKind::Config(e) => e.message.clone(),
            PromptcraftErrorKind::Completion(e) => e.kind.user_message(),
            PromptcraftErrorKind::Generation(e) => e.kind.to_string(),
            PromptcraftErrorKind::History(e) => e.kind.to_string(),
            PromptcraftErrorKind::Json(e) => e.message.clone(),
        }
    }
}

// Generic From implementation for any type that converts to PromptcraftErrorKind
impl<T> From<T> for PromptcraftError
where
    T: Into<PromptcraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for PromptCraft operations.
///
/// # Examples
///
/// ```
/// use promptcraft_error::{JsonError, PromptcraftResult};
///
/// fn decode() -> PromptcraftResult<String> {
///     Err(JsonError::new("expected value at line 1 column 1"))?
/// }
/// ```
pub type PromptcraftResult<T> = std::result::Result<T, PromptcraftError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CompletionErrorKind, GenerationErrorKind};

    #[test]
    fn remote_service_message_is_surfaced_verbatim() {
        let err: PromptcraftError = CompletionError::new(CompletionErrorKind::RemoteService {
            status: 429,
            message: "rate limited".to_string(),
        })
        .into();
        assert_eq!(err.user_message(), "rate limited");
    }

    #[test]
    fn empty_response_suggests_retry() {
        let err: PromptcraftError =
            CompletionError::new(CompletionErrorKind::EmptyResponse("Groq".to_string())).into();
        assert!(err.user_message().contains("try again"));
    }

    #[test]
    fn location_is_captured_at_construction() {
        let err = GenerationError::new(GenerationErrorKind::EmptyIdea);
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }
}
