//! PromptCraft turns a short idea into tailored prompts for image and video
//! generation models.
//!
//! This crate re-exports the workspace crates and adds the pieces an
//! application needs on top: layered configuration ([`AppConfig`]) and a
//! [`Workbench`] that pairs the orchestrator with history storage.
//!
//! # Example
//!
//! ```no_run
//! use promptcraft::{AppConfig, GenerationOptions, HistoryTarget, SubModel, Workbench};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let workbench = Workbench::from_config(&config)?;
//!
//! let options = GenerationOptions::builder()
//!     .idea("a lighthouse in a storm")
//!     .sub_model(SubModel::Midjourney)
//!     .build()?;
//! let result = workbench.generate(&options, &HistoryTarget::Local).await?;
//! println!("{}", result.balanced().positive());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod workbench;

pub use crate::config::AppConfig;
pub use workbench::{HistoryTarget, Workbench};

pub use promptcraft_core::*;
pub use promptcraft_error::*;
pub use promptcraft_history::{
    DEFAULT_FEED_CAPACITY, HistoryConfig, HistoryFeed, InMemoryHistoryRepository,
    LOCAL_HISTORY_LIMIT, LocalHistoryStore,
};
pub use promptcraft_interface::{
    CompletionDriver, HistoryEvent, HistoryRepository, HistorySubscription, Vision,
};
pub use promptcraft_models::{API_KEY_PLACEHOLDER, GroqClient, ProviderConfig};
pub use promptcraft_prompt::{
    PromptOrchestrator, RequestSequencer, RequestTicket, SamplingSettings,
    VISION_UNAVAILABLE_MESSAGE, VisionOutcome, build_system_instruction, build_user_message,
    parse_delimited, parse_variants,
};
