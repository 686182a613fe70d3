//! History storage for PromptCraft.
//!
//! Two backends share the record type from `promptcraft_core`:
//!
//! - [`LocalHistoryStore`]: anonymous history kept as one JSON file,
//!   newest first and capped at [`LOCAL_HISTORY_LIMIT`] entries.
//! - [`InMemoryHistoryRepository`]: per-user [`HistoryRepository`] with a
//!   live change feed, for tests and single-process use.
//!
//! [`HistoryFeed`] is the display state for a short live list, updated
//! purely from [`HistoryEvent`]s.
//!
//! [`HistoryRepository`]: promptcraft_interface::HistoryRepository
//! [`HistoryEvent`]: promptcraft_interface::HistoryEvent

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod feed;
mod local;
mod memory;

pub use config::{DEFAULT_FEED_CAPACITY, HistoryConfig, LOCAL_HISTORY_LIMIT};
pub use feed::HistoryFeed;
pub use local::LocalHistoryStore;
pub use memory::InMemoryHistoryRepository;
