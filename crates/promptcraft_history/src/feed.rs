//! Display state for a live history list.

use crate::DEFAULT_FEED_CAPACITY;
use promptcraft_core::HistoryRecord;
use promptcraft_interface::HistoryEvent;

/// The most recent records shown to a user, updated from change events.
///
/// Updates are pure: [`HistoryFeed::apply`] consumes the feed and returns
/// the next one.
///
/// # Examples
///
/// ```
/// use promptcraft_core::{HistoryRecord, PromptVariant};
/// use promptcraft_history::HistoryFeed;
/// use promptcraft_interface::HistoryEvent;
///
/// let record = HistoryRecord::new(None, "a fox", PromptVariant::new("a red fox", ""));
/// let feed = HistoryFeed::default()
///     .apply(HistoryEvent::Inserted(record.clone()))
///     .apply(HistoryEvent::Inserted(record));
/// assert_eq!(feed.len(), 1);
///
/// let cleared = feed.apply(HistoryEvent::Deleted);
/// assert!(cleared.is_empty());
/// assert!(cleared.needs_reload());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct HistoryFeed {
    /// Records, newest first
    records: Vec<HistoryRecord>,
    /// Maximum records kept
    capacity: usize,
    /// Set by a delete; the owner should fetch a fresh list
    #[getter(skip)]
    needs_reload: bool,
}

impl Default for HistoryFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_CAPACITY)
    }
}

impl HistoryFeed {
    /// Empty feed holding at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
            needs_reload: false,
        }
    }

    /// Feed seeded from a newest-first listing.
    pub fn with_records(mut records: Vec<HistoryRecord>, capacity: usize) -> Self {
        records.truncate(capacity);
        Self {
            records,
            capacity,
            needs_reload: false,
        }
    }

    /// Next state after `event`.
    ///
    /// Inserts are prepended unless the id is already shown. Removing a
    /// shown record drops it and flags the feed for reload so the gap can be
    /// backfilled; a delete empties the feed and flags it for reload.
    #[must_use]
    pub fn apply(self, event: HistoryEvent) -> Self {
        match event {
            HistoryEvent::Inserted(record) => {
                if self.records.iter().any(|shown| shown.id() == record.id()) {
                    tracing::trace!(id = %record.id(), "Ignoring duplicate history insert");
                    return self;
                }
                let mut records = Vec::with_capacity(self.capacity);
                records.push(record);
                records.extend(self.records);
                records.truncate(self.capacity);
                Self {
                    records,
                    capacity: self.capacity,
                    needs_reload: self.needs_reload,
                }
            }
            HistoryEvent::Removed(id) => {
                if !self.records.iter().any(|shown| shown.id() == &id) {
                    return self;
                }
                Self {
                    records: self.records.into_iter().filter(|shown| shown.id() != &id).collect(),
                    capacity: self.capacity,
                    needs_reload: true,
                }
            }
            HistoryEvent::Deleted => Self {
                records: Vec::new(),
                capacity: self.capacity,
                needs_reload: true,
            },
        }
    }

    /// Replaces the contents with a fresh listing and clears the reload flag.
    #[must_use]
    pub fn reloaded(self, records: Vec<HistoryRecord>) -> Self {
        Self::with_records(records, self.capacity)
    }

    /// True after a delete until [`HistoryFeed::reloaded`] is applied.
    pub fn needs_reload(&self) -> bool {
        self.needs_reload
    }

    /// Number of records shown.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing is shown.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
