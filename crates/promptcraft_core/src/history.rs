//! Persisted history records.

use crate::PromptVariant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a stored [`HistoryRecord`].
pub type RecordId = Uuid;

/// Identity of an authenticated user, as issued by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display, derive_more::From)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wraps an identity string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One saved generation.
///
/// # Examples
///
/// ```
/// use promptcraft_core::{HistoryRecord, PromptVariant};
///
/// let record = HistoryRecord::new(None, "a fox", PromptVariant::new("a red fox in snow", ""));
/// assert_eq!(record.original_idea(), "a fox");
/// assert!(record.user_id().is_none());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct HistoryRecord {
    /// Record id
    id: RecordId,
    /// Owner, `None` for anonymous local history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<UserId>,
    /// The idea as the user typed it
    original_idea: String,
    /// The prompt that was produced
    result: PromptVariant,
    /// Creation time
    created_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Creates a record stamped with a fresh id and the current time.
    pub fn new(user_id: Option<UserId>, original_idea: impl Into<String>, result: PromptVariant) -> Self {
        Self::with_timestamp(user_id, original_idea, result, Utc::now())
    }

    /// Creates a record with an explicit creation time.
    pub fn with_timestamp(
        user_id: Option<UserId>,
        original_idea: impl Into<String>,
        result: PromptVariant,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            original_idea: original_idea.into(),
            result,
            created_at,
        }
    }
}
