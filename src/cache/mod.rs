//! CandidateCache - the single in-memory mirror of the server collection.
//!
//! The cache is an ordered list (newest first) that is only mutated by the
//! `apply_*` methods, which the store calls after a successful server
//! response. Consumers read a snapshot or subscribe to a `CandidateFeed`,
//! which replays the current list and then yields every later change.
//!
//! ## Example
//!
//! ```ignore
//! let cache = CandidateCache::new();
//! let mut feed = cache.subscribe();
//!
//! cache.apply_loaded(candidates);
//! let latest = feed.next().await; // current list, immediately
//! ```

mod feed;

use std::sync::Arc;

use tokio::sync::watch;

use crate::candidate::{Candidate, CandidatePatch};

pub use feed::CandidateFeed;

/// Shared candidate list. Clone-friendly via Arc; clones share one list.
#[derive(Clone)]
pub struct CandidateCache {
    sender: Arc<watch::Sender<Vec<Candidate>>>,
}

impl Default for CandidateCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Vec::new());
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Copy of the current list.
    pub fn snapshot(&self) -> Vec<Candidate> {
        self.sender.borrow().clone()
    }

    /// Run `f` against the current list without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&[Candidate]) -> R) -> R {
        f(self.sender.borrow().as_slice())
    }

    pub fn len(&self) -> usize {
        self.sender.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sender.borrow().is_empty()
    }

    pub fn get(&self, id: &str) -> Option<Candidate> {
        self.sender.borrow().iter().find(|c| c.id == id).cloned()
    }

    /// Subscribe to the list. The feed yields the current value first.
    pub fn subscribe(&self) -> CandidateFeed {
        CandidateFeed::new(self.sender.subscribe())
    }

    /// Replace the whole list with a fresh server listing.
    ///
    /// Later duplicates of an id are dropped so the list never holds two
    /// entries for the same candidate.
    pub fn apply_loaded(&self, candidates: Vec<Candidate>) {
        let mut unique: Vec<Candidate> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if unique.iter().any(|c| c.id == candidate.id) {
                tracing::warn!(id = %candidate.id, "dropping duplicate candidate from listing");
                continue;
            }
            unique.push(candidate);
        }
        tracing::debug!(count = unique.len(), "cache replaced");
        self.sender.send_replace(unique);
    }

    /// Insert a created candidate at the front.
    ///
    /// If the id is already cached (the same response seen twice), the entry
    /// is replaced in place instead.
    pub fn apply_created(&self, candidate: Candidate) {
        self.sender.send_if_modified(|list| {
            match list.iter_mut().find(|c| c.id == candidate.id) {
                Some(existing) if *existing == candidate => false,
                Some(existing) => {
                    *existing = candidate.clone();
                    true
                }
                None => {
                    tracing::debug!(id = %candidate.id, "cache insert");
                    list.insert(0, candidate.clone());
                    true
                }
            }
        });
    }

    /// Merge an update response into the entry with `id`, keeping its
    /// position. Unknown ids leave the cache unchanged.
    pub fn apply_updated(&self, id: &str, patch: &CandidatePatch) -> Option<Candidate> {
        let mut merged = None;
        self.sender.send_if_modified(|list| {
            let Some(existing) = list.iter_mut().find(|c| c.id == id) else {
                tracing::debug!(id, "update for uncached candidate ignored");
                return false;
            };
            let before = existing.clone();
            existing.merge(patch);
            merged = Some(existing.clone());
            *existing != before
        });
        merged
    }

    /// Remove the entry with `id`. Returns whether anything was removed.
    pub fn apply_deleted(&self, id: &str) -> bool {
        self.sender.send_if_modified(|list| {
            let before = list.len();
            list.retain(|c| c.id != id);
            let removed = list.len() != before;
            if removed {
                tracing::debug!(id, "cache remove");
            }
            removed
        })
    }
}
