//! Anonymous history in a single JSON file.

use crate::HistoryConfig;
use promptcraft_core::{HistoryRecord, PromptVariant, RecordId};
use promptcraft_error::{HistoryError, HistoryErrorKind, PromptcraftResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Newest-first history list persisted as one JSON array.
///
/// The file is the whole store: every save rewrites it. A missing or
/// unreadable file loads as an empty history. Writers through one store
/// (and its clones) are serialized, so concurrent saves never drop records.
///
/// # Examples
///
/// ```no_run
/// use promptcraft_core::PromptVariant;
/// use promptcraft_history::LocalHistoryStore;
///
/// # async fn demo() -> promptcraft_error::PromptcraftResult<()> {
/// let store = LocalHistoryStore::new("/tmp/promptcraft/history.json", 20);
/// store.save("a fox", &PromptVariant::new("a red fox in snow", "")).await?;
/// assert_eq!(store.load().await.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LocalHistoryStore {
    path: PathBuf,
    limit: usize,
    write_lock: Arc<Mutex<()>>,
}

impl LocalHistoryStore {
    /// Creates a store over `path` keeping at most `limit` records.
    pub fn new(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            path: path.into(),
            limit,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a store from the `[history]` table.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no history path can be resolved.
    pub fn from_config(config: &HistoryConfig) -> PromptcraftResult<Self> {
        Ok(Self::new(config.resolved_path()?, *config.limit()))
    }

    /// History file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Maximum number of stored records.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Reads the history, newest first.
    ///
    /// Never fails: a missing file, an unreadable file and malformed JSON all
    /// yield an empty list.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> Vec<HistoryRecord> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No history file yet");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "History file unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<HistoryRecord>>(&text) {
            Ok(mut records) => {
                records.truncate(self.limit);
                tracing::debug!(count = records.len(), "Loaded history");
                records
            }
            Err(e) => {
                tracing::warn!(error = %e, "History file corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    /// Prepends a record and rewrites the file, dropping the oldest entries
    /// beyond the limit.
    ///
    /// # Errors
    ///
    /// Returns a history error when the directory or file cannot be written.
    #[tracing::instrument(skip(self, original, result), fields(path = %self.path.display()))]
    pub async fn save(
        &self,
        original: &str,
        result: &PromptVariant,
    ) -> PromptcraftResult<HistoryRecord> {
        let record = HistoryRecord::new(None, original, result.clone());

        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await;
        records.insert(0, record.clone());
        records.truncate(self.limit);
        self.write(&records).await?;

        tracing::info!(id = %record.id(), count = records.len(), "Saved history record");
        Ok(record)
    }

    /// Removes the record with `id`, returning whether one was found.
    ///
    /// # Errors
    ///
    /// Returns a history error when the file cannot be rewritten.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn remove(&self, id: &RecordId) -> PromptcraftResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await;
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            tracing::debug!("No history record with that id");
            return Ok(false);
        }

        self.write(&records).await?;
        tracing::info!(count = records.len(), "Removed history record");
        Ok(true)
    }

    /// Deletes the history file.
    ///
    /// # Errors
    ///
    /// Returns a history error when the file exists but cannot be removed.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn clear(&self) -> PromptcraftResult<()> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::info!("Cleared history");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(HistoryError::new(HistoryErrorKind::FileWrite(format!(
                "remove {}: {}",
                self.path.display(),
                e
            )))
            .into()),
        }
    }

    /// Caller must hold `write_lock`.
    async fn write(&self, records: &[HistoryRecord]) -> PromptcraftResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                HistoryError::new(HistoryErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| HistoryError::new(HistoryErrorKind::Serialization(e.to_string())))?;

        // Temp file + rename so a crash never leaves a half-written history.
        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, json).await.map_err(|e| {
            HistoryError::new(HistoryErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;
        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            HistoryError::new(HistoryErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;
        Ok(())
    }
}
