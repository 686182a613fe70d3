//! Last-submitted-wins sequencing for overlapping requests.

use promptcraft_error::{GenerationError, GenerationErrorKind};
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic ticket identifying one submitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{}", _0)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// Raw ticket number.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues request tickets and decides whether a resolved request is stale.
///
/// A request whose response arrives after a newer ticket was issued is
/// superseded; its result must not reach the caller.
///
/// # Examples
///
/// ```
/// use promptcraft_prompt::RequestSequencer;
///
/// let sequencer = RequestSequencer::new();
/// let first = sequencer.issue();
/// let second = sequencer.issue();
///
/// assert!(sequencer.ensure_current(first).is_err());
/// assert!(sequencer.ensure_current(second).is_ok());
/// ```
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    /// Creates a sequencer with no tickets issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket, making every earlier ticket stale.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Most recently issued ticket number, `0` before the first request.
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }

    /// True when no newer ticket has been issued since `ticket`.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest() == ticket.0
    }

    /// Fails with [`GenerationErrorKind::Superseded`] when `ticket` is stale.
    #[track_caller]
    pub fn ensure_current(&self, ticket: RequestTicket) -> Result<(), GenerationError> {
        let latest = self.latest();
        if latest == ticket.0 {
            Ok(())
        } else {
            Err(GenerationError::new(GenerationErrorKind::Superseded {
                ticket: ticket.0,
                latest,
            }))
        }
    }
}
