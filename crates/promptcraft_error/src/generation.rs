//! Generation request errors.

/// Specific error conditions for a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The idea text was empty or whitespace only
    #[display("Enter a prompt idea first")]
    EmptyIdea,
    /// A newer request was issued before this one resolved
    #[display("Request {} was superseded by request {}", ticket, latest)]
    Superseded {
        /// Ticket of the discarded request
        ticket: u64,
        /// Ticket of the newest request at resolution time
        latest: u64,
    },
    /// Options could not be assembled
    #[display("Invalid generation options: {}", _0)]
    InvalidOptions(String),
}

/// Generation error with location tracking.
///
/// # Examples
///
/// ```
/// use promptcraft_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyIdea);
/// assert!(format!("{}", err).contains("prompt idea"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Convert from derive_builder error string.
impl From<String> for GenerationError {
    #[track_caller]
    fn from(msg: String) -> Self {
        Self::new(GenerationErrorKind::InvalidOptions(msg))
    }
}
