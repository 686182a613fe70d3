//! Persistence seam for generation history.

use async_trait::async_trait;
use futures_util::stream::{Stream, StreamExt};
use promptcraft_core::{HistoryRecord, PromptVariant, RecordId, UserId};
use promptcraft_error::PromptcraftResult;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Change notification delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryEvent {
    /// A record was saved
    Inserted(HistoryRecord),
    /// A single record was removed
    Removed(RecordId),
    /// Records were removed; listeners should reload
    Deleted,
}

/// Live change feed for one user.
///
/// Holding the subscription keeps the channel open; dropping it releases it.
pub struct HistorySubscription {
    user_id: UserId,
    events: Pin<Box<dyn Stream<Item = HistoryEvent> + Send>>,
}

impl HistorySubscription {
    /// Wraps an event stream that is already filtered to `user_id`.
    pub fn new(user_id: UserId, events: Pin<Box<dyn Stream<Item = HistoryEvent> + Send>>) -> Self {
        tracing::debug!(user_id = %user_id, "Opened history subscription");
        Self { user_id, events }
    }

    /// The subscribed user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Waits for the next change, `None` once the backend closes the feed.
    pub async fn next(&mut self) -> Option<HistoryEvent> {
        self.events.next().await
    }
}

impl std::fmt::Debug for HistorySubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistorySubscription")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

impl Drop for HistorySubscription {
    fn drop(&mut self) {
        tracing::debug!(user_id = %self.user_id, "Closed history subscription");
    }
}

/// Per-user append/list store for saved prompts.
///
/// Only per-user filtering and creation-time ordering are assumed.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Save a generation and return the stored record.
    async fn insert(
        &self,
        user_id: &UserId,
        original: &str,
        enhanced: &PromptVariant,
    ) -> PromptcraftResult<HistoryRecord>;

    /// Most recent records for a user, newest first, at most `limit`.
    async fn list_recent(&self, user_id: &UserId, limit: usize)
    -> PromptcraftResult<Vec<HistoryRecord>>;

    /// Remove one record owned by a user.
    ///
    /// Returns `false` when the user has no record with that id.
    async fn delete(&self, user_id: &UserId, id: &RecordId) -> PromptcraftResult<bool>;

    /// Remove every record owned by a user.
    async fn delete_all(&self, user_id: &UserId) -> PromptcraftResult<()>;

    /// Open a change feed for a user's inserts and deletes.
    async fn subscribe(&self, user_id: &UserId) -> PromptcraftResult<HistorySubscription>;
}
