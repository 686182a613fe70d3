//! Trait definitions for PromptCraft.
//!
//! This crate defines the seams between the orchestrator and its collaborators:
//! the remote completion drivers and the history persistence backends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod history;
mod traits;

pub use history::{HistoryEvent, HistoryRepository, HistorySubscription};
pub use traits::{CompletionDriver, Vision};
