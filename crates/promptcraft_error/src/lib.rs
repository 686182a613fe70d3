//! Error types for PromptCraft.
//!
//! This crate provides the foundation error types used throughout the PromptCraft workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use promptcraft_error::{ConfigError, PromptcraftResult};
//!
//! fn load_key() -> PromptcraftResult<String> {
//!     Err(ConfigError::new("API key is not configured"))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod completion;
mod config;
mod error;
mod generation;
mod history;
mod json;

pub use completion::{CompletionError, CompletionErrorKind};
pub use config::ConfigError;
pub use error::{PromptcraftError, PromptcraftErrorKind, PromptcraftResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use history::{HistoryError, HistoryErrorKind};
pub use json::JsonError;
