use tokio::sync::watch;

use crate::candidate::Candidate;

/// A live view of the cache.
///
/// The first `next()` resolves immediately with the current list; each later
/// call waits for the next change. Intermediate values may be coalesced, the
/// latest one always wins. `next()` only returns `None` once every cache
/// handle has been dropped.
pub struct CandidateFeed {
    receiver: watch::Receiver<Vec<Candidate>>,
    replayed: bool,
}

impl CandidateFeed {
    pub(crate) fn new(receiver: watch::Receiver<Vec<Candidate>>) -> Self {
        Self {
            receiver,
            replayed: false,
        }
    }

    /// The latest list, without consuming a change notification.
    pub fn current(&self) -> Vec<Candidate> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next value.
    pub async fn next(&mut self) -> Option<Vec<Candidate>> {
        if !self.replayed {
            self.replayed = true;
            return Some(self.receiver.borrow_and_update().clone());
        }
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// True if a change arrived that `next()` has not yielded yet.
    pub fn has_changed(&self) -> bool {
        !self.replayed || self.receiver.has_changed().unwrap_or(false)
    }
}
