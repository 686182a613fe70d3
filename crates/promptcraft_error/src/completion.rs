//! Remote completion error types.

/// Specific failure conditions of a chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CompletionErrorKind {
    /// Non-2xx response. The message is the service's own text when it
    /// supplied one, otherwise `"<service> error: <status>"`.
    #[display("{}", message)]
    RemoteService {
        /// HTTP status code
        status: u16,
        /// Human-readable message
        message: String,
    },
    /// 2xx response without usable completion text
    #[display("Empty response from {}", _0)]
    EmptyResponse(String),
    /// Request never produced a response (connect failure, timeout, TLS)
    #[display("Request failed: {}", _0)]
    Transport(String),
    /// 2xx response whose body could not be decoded
    #[display("Invalid response body: {}", _0)]
    InvalidResponse(String),
}

impl CompletionErrorKind {
    /// The text a user should see for this failure.
    ///
    /// Remote messages are surfaced verbatim; empty responses get a generic
    /// retry suggestion.
    pub fn user_message(&self) -> String {
        match self {
            Self::RemoteService { message, .. } => message.clone(),
            Self::EmptyResponse(_) => {
                "The model returned an empty response. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// True when the service's message reports the requested model as missing,
    /// retired or rejected outright.
    ///
    /// Only the message text is inspected. A bare 400 whose message names some
    /// other problem (a malformed payload, an oversized image) is not a model
    /// availability failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use promptcraft_error::CompletionErrorKind;
    ///
    /// let kind = CompletionErrorKind::RemoteService {
    ///     status: 404,
    ///     message: "The model `llava` has been decommissioned".to_string(),
    /// };
    /// assert!(kind.indicates_model_unavailable());
    /// ```
    pub fn indicates_model_unavailable(&self) -> bool {
        const MARKERS: [&str; 5] = [
            "model_not_found",
            "model not found",
            "does not exist",
            "decommissioned",
            "bad request",
        ];
        match self {
            Self::RemoteService { message, .. } => {
                let message = message.to_ascii_lowercase();
                MARKERS.iter().any(|marker| message.contains(marker))
            }
            _ => false,
        }
    }

    /// HTTP status code, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteService { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Completion error with location tracking.
///
/// # Examples
///
/// ```
/// use promptcraft_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::RemoteService {
///     status: 429,
///     message: "rate limited".to_string(),
/// });
/// assert_eq!(err.kind.user_message(), "rate limited");
/// assert_eq!(err.kind.status(), Some(429));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The kind of error that occurred
    pub kind: CompletionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new completion error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
