//! In-process implementation of [`HistoryRepository`].

use crate::LOCAL_HISTORY_LIMIT;
use async_trait::async_trait;
use futures_util::stream;
use promptcraft_core::{HistoryRecord, PromptVariant, RecordId, UserId};
use promptcraft_error::PromptcraftResult;
use promptcraft_interface::{HistoryEvent, HistoryRepository, HistorySubscription};
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

/// Buffered events per subscriber before it starts lagging.
const EVENT_BUFFER: usize = 64;

/// Per-user history held in memory, with a broadcast change feed.
///
/// Each user keeps at most `limit` records; inserting past the cap drops
/// that user's oldest records. Cloning shares the same storage and feed. All data is lost when the last
/// clone is dropped.
///
/// # Examples
///
/// ```
/// use promptcraft_core::{PromptVariant, UserId};
/// use promptcraft_history::InMemoryHistoryRepository;
/// use promptcraft_interface::HistoryRepository;
///
/// # #[tokio::main]
/// # async fn main() -> promptcraft_error::PromptcraftResult<()> {
/// let repo = InMemoryHistoryRepository::new();
/// let alice = UserId::new("alice");
/// repo.insert(&alice, "a fox", &PromptVariant::new("a red fox", "")).await?;
/// assert_eq!(repo.list_recent(&alice, 10).await?.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryHistoryRepository {
    records: Arc<RwLock<Vec<HistoryRecord>>>,
    events: broadcast::Sender<(UserId, HistoryEvent)>,
    limit: usize,
}

impl InMemoryHistoryRepository {
    /// Creates an empty repository capped at [`LOCAL_HISTORY_LIMIT`] records per user.
    pub fn new() -> Self {
        Self::with_limit(LOCAL_HISTORY_LIMIT)
    }

    /// Creates an empty repository keeping at most `limit` records per user.
    pub fn with_limit(limit: usize) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            events,
            limit,
        }
    }

    /// Maximum records kept per user.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Total records across all users.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True when no user has any record.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Number of open subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }

    fn publish(&self, user_id: &UserId, event: HistoryEvent) {
        // Sending only fails when nobody is subscribed.
        if self.events.send((user_id.clone(), event)).is_err() {
            tracing::trace!(user_id = %user_id, "No history subscribers");
        }
    }
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    #[tracing::instrument(skip(self, original, enhanced), fields(user_id = %user_id))]
    async fn insert(
        &self,
        user_id: &UserId,
        original: &str,
        enhanced: &PromptVariant,
    ) -> PromptcraftResult<HistoryRecord> {
        let record = HistoryRecord::new(Some(user_id.clone()), original, enhanced.clone());
        let evicted = {
            let mut records = self.records.write().await;
            records.push(record.clone());
            evict_oldest(&mut records, user_id, self.limit)
        };
        self.publish(user_id, HistoryEvent::Inserted(record.clone()));
        tracing::debug!(id = %record.id(), evicted, "Inserted history record");
        Ok(record)
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> PromptcraftResult<Vec<HistoryRecord>> {
        let records = self.records.read().await;
        // Reverse first so equal timestamps keep newest-inserted first.
        let mut owned: Vec<HistoryRecord> = records
            .iter()
            .rev()
            .filter(|record| record.user_id().as_ref() == Some(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        owned.truncate(limit);
        Ok(owned)
    }

    #[tracing::instrument(skip(self), fields(user_id = %user_id))]
    async fn delete_all(&self, user_id: &UserId) -> PromptcraftResult<()> {
        let removed = {
            let mut records = self.records.write().await;
            let before = records.len();
            records.retain(|record| record.user_id().as_ref() != Some(user_id));
            before - records.len()
        };
        self.publish(user_id, HistoryEvent::Deleted);
        tracing::debug!(removed, "Deleted history records");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(user_id = %user_id))]
    async fn delete(&self, user_id: &UserId, id: &RecordId) -> PromptcraftResult<bool> {
        let removed = {
            let mut records = self.records.write().await;
            let before = records.len();
            records.retain(|record| {
                !(record.id() == id && record.user_id().as_ref() == Some(user_id))
            });
            before != records.len()
        };
        if removed {
            self.publish(user_id, HistoryEvent::Removed(*id));
        }
        tracing::debug!(removed, "Deleted history record");
        Ok(removed)
    }

    async fn subscribe(&self, user_id: &UserId) -> PromptcraftResult<HistorySubscription> {
        let receiver = self.events.subscribe();
        let events = stream::unfold(
            (receiver, user_id.clone()),
            |(mut receiver, owner)| async move {
                loop {
                    match receiver.recv().await {
                        Ok((user, event)) if user == owner => {
                            return Some((event, (receiver, owner)));
                        }
                        Ok(_) => {}
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            // Missed events cannot be replayed; ask the listener to reload.
                            tracing::warn!(user_id = %owner, skipped, "History subscriber lagged");
                            return Some((HistoryEvent::Deleted, (receiver, owner)));
                        }
                        Err(broadcast::error::RecvError::Closed) => return None,
                    }
                }
            },
        );
        Ok(HistorySubscription::new(user_id.clone(), Box::pin(events)))
    }
}

/// Drops `user_id`'s oldest records until at most `limit` remain.
///
/// Records are stored in insertion order, so the oldest come first.
fn evict_oldest(records: &mut Vec<HistoryRecord>, user_id: &UserId, limit: usize) -> usize {
    let owned = records
        .iter()
        .filter(|record| record.user_id().as_ref() == Some(user_id))
        .count();
    let mut excess = owned.saturating_sub(limit);
    let evicted = excess;
    records.retain(|record| {
        if excess > 0 && record.user_id().as_ref() == Some(user_id) {
            excess -= 1;
            false
        } else {
            true
        }
    });
    evicted
}
