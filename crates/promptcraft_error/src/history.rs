//! History persistence error types.

/// Kinds of history persistence errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum HistoryErrorKind {
    /// Failed to create the history directory
    #[display("Failed to create history directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write the history file
    #[display("Failed to write history file: {}", _0)]
    FileWrite(String),
    /// Failed to read the history file
    #[display("Failed to read history file: {}", _0)]
    FileRead(String),
    /// Failed to encode or decode history records
    #[display("History serialization failed: {}", _0)]
    Serialization(String),
}

/// History error with location tracking.
///
/// # Examples
///
/// ```
/// use promptcraft_error::{HistoryError, HistoryErrorKind};
///
/// let err = HistoryError::new(HistoryErrorKind::FileRead("/tmp/history.json".to_string()));
/// assert!(format!("{}", err).contains("read history"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("History Error: {} at line {} in {}", kind, line, file)]
pub struct HistoryError {
    /// The kind of error that occurred
    pub kind: HistoryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl HistoryError {
    /// Create a new history error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: HistoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
