//! Generation plus best-effort history recording.

use crate::AppConfig;
use promptcraft_core::{
    GenerationOptions, GenerationResult, HistoryRecord, ImageInput, PromptVariant, RecordId,
    UserId,
};
use promptcraft_error::PromptcraftResult;
use promptcraft_history::LocalHistoryStore;
use promptcraft_interface::{CompletionDriver, HistoryRepository, Vision};
use promptcraft_models::GroqClient;
use promptcraft_prompt::{PromptOrchestrator, VisionOutcome};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Where a result is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryTarget {
    /// The anonymous local history file
    Local,
    /// A signed-in user's repository history
    User(UserId),
}

/// An orchestrator paired with history storage.
///
/// Successful generations are recorded, but a failed save is only logged:
/// it never turns a successful generation into an error.
pub struct Workbench<D> {
    orchestrator: PromptOrchestrator<D>,
    local: LocalHistoryStore,
    repository: Option<Arc<dyn HistoryRepository>>,
}

impl Workbench<GroqClient> {
    /// Builds the Groq-backed workbench described by `config`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the HTTP client cannot be built or
    /// no history path can be resolved. A missing API key is reported by the
    /// first request instead.
    pub fn from_config(config: &AppConfig) -> PromptcraftResult<Self> {
        let client = GroqClient::new(config.provider().clone())?;
        let orchestrator = PromptOrchestrator::with_sampling(client, *config.sampling());
        let local = LocalHistoryStore::from_config(config.history())?;
        Ok(Self::new(orchestrator, local))
    }
}

impl<D> Workbench<D> {
    /// Pairs an orchestrator with the local history file.
    pub fn new(orchestrator: PromptOrchestrator<D>, local: LocalHistoryStore) -> Self {
        Self {
            orchestrator,
            local,
            repository: None,
        }
    }

    /// Adds a per-user repository used for [`HistoryTarget::User`].
    pub fn with_repository(mut self, repository: Arc<dyn HistoryRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// The wrapped orchestrator.
    pub fn orchestrator(&self) -> &PromptOrchestrator<D> {
        &self.orchestrator
    }

    /// The anonymous history file.
    pub fn local_history(&self) -> &LocalHistoryStore {
        &self.local
    }

    /// Recent records for `target`, newest first.
    ///
    /// # Errors
    ///
    /// Returns repository errors for user history. Local history never fails.
    pub async fn history(
        &self,
        target: &HistoryTarget,
        limit: usize,
    ) -> PromptcraftResult<Vec<HistoryRecord>> {
        match (target, &self.repository) {
            (HistoryTarget::User(user_id), Some(repository)) => {
                repository.list_recent(user_id, limit).await
            }
            _ => {
                let mut records = self.local.load().await;
                records.truncate(limit);
                Ok(records)
            }
        }
    }

    /// Removes one record from `target`, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns storage errors from the repository or the history file.
    pub async fn delete_history_entry(
        &self,
        target: &HistoryTarget,
        id: &RecordId,
    ) -> PromptcraftResult<bool> {
        match (target, &self.repository) {
            (HistoryTarget::User(user_id), Some(repository)) => {
                repository.delete(user_id, id).await
            }
            _ => self.local.remove(id).await,
        }
    }

    /// Removes every record for `target`.
    ///
    /// # Errors
    ///
    /// Returns storage errors from the repository or the history file.
    pub async fn clear_history(&self, target: &HistoryTarget) -> PromptcraftResult<()> {
        match (target, &self.repository) {
            (HistoryTarget::User(user_id), Some(repository)) => {
                repository.delete_all(user_id).await
            }
            _ => self.local.clear().await,
        }
    }

    /// Saves a result, logging instead of failing.
    async fn record(&self, target: &HistoryTarget, original: &str, result: &PromptVariant) {
        let saved = match (target, &self.repository) {
            (HistoryTarget::User(user_id), Some(repository)) => {
                repository.insert(user_id, original, result).await
            }
            (HistoryTarget::User(user_id), None) => {
                warn!(user_id = %user_id, "No history repository configured, saving locally");
                self.local.save(original, result).await
            }
            (HistoryTarget::Local, _) => self.local.save(original, result).await,
        };

        match saved {
            Ok(record) => info!(id = %record.id(), "Recorded history"),
            Err(e) => warn!(error = %e, "Failed to record history"),
        }
    }
}

impl<D: CompletionDriver> Workbench<D> {
    /// Generates the three variants and records the balanced one.
    ///
    /// # Errors
    ///
    /// Same contract as [`PromptOrchestrator::generate`].
    #[instrument(skip(self, options))]
    pub async fn generate(
        &self,
        options: &GenerationOptions,
        target: &HistoryTarget,
    ) -> PromptcraftResult<GenerationResult> {
        let result = self.orchestrator.generate(options).await?;
        self.record(target, options.idea(), result.balanced()).await;
        Ok(result)
    }

    /// Expands an idea into one prompt pair and records it.
    ///
    /// # Errors
    ///
    /// Same contract as [`PromptOrchestrator::enhance`].
    #[instrument(skip(self, idea))]
    pub async fn enhance(
        &self,
        idea: &str,
        target: &HistoryTarget,
    ) -> PromptcraftResult<PromptVariant> {
        let variant = self.orchestrator.enhance(idea).await?;
        self.record(target, idea.trim(), &variant).await;
        Ok(variant)
    }
}

impl<D: Vision> Workbench<D> {
    /// Describes an image; descriptions are not recorded.
    ///
    /// # Errors
    ///
    /// Same contract as [`PromptOrchestrator::describe_image`].
    pub async fn describe(
        &self,
        image: &ImageInput,
        hint: Option<&str>,
    ) -> PromptcraftResult<VisionOutcome> {
        self.orchestrator.describe_image(image, hint).await
    }
}
