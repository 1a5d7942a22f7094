//! CandidateStore - remote store adapter over a `CandidateTransport`.
//!
//! The store owns the one authoritative `CandidateCache`. Each mutating call
//! goes to the server first; the cache is updated exactly once, and only
//! after the server acknowledged the call. A failed call leaves the cache
//! untouched and hands the error back to the caller. Nothing is retried.
//!
//! ## Example
//!
//! ```ignore
//! use candidate_board::{CandidateStore, Config, NewCandidate};
//!
//! let store = CandidateStore::connect(&Config::from_env())?;
//! store.load_all().await?;
//!
//! let mut feed = store.observe_candidates();
//! store.create(&NewCandidate::new("Ada", "Lovelace")).await?;
//! ```

use crate::cache::{CandidateCache, CandidateFeed};
use crate::candidate::{Candidate, CandidateUpdate, NewCandidate};
use crate::error::StoreError;
use crate::transport::CandidateTransport;

#[cfg(feature = "http")]
use crate::config::Config;
#[cfg(feature = "http")]
use crate::transport::HttpTransport;

/// Remote candidate collection plus its local cache.
#[derive(Clone)]
pub struct CandidateStore<T> {
    transport: T,
    cache: CandidateCache,
}

#[cfg(feature = "http")]
impl CandidateStore<HttpTransport> {
    /// Store backed by the HTTP transport for `config.api_url`.
    pub fn connect(config: &Config) -> Result<Self, StoreError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: CandidateTransport> CandidateStore<T> {
    /// Create a store with an empty cache.
    pub fn new(transport: T) -> Self {
        Self::with_cache(transport, CandidateCache::new())
    }

    /// Create a store around an existing cache.
    pub fn with_cache(transport: T, cache: CandidateCache) -> Self {
        Self { transport, cache }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn cache(&self) -> &CandidateCache {
        &self.cache
    }

    /// Copy of the cached collection.
    pub fn snapshot(&self) -> Vec<Candidate> {
        self.cache.snapshot()
    }

    /// Live view of the cache, replaying the current list first.
    pub fn observe_candidates(&self) -> CandidateFeed {
        self.cache.subscribe()
    }

    /// Fetch the whole collection and replace the cache with it.
    ///
    /// On failure the previous cache contents stay in place.
    pub async fn load_all(&self) -> Result<Vec<Candidate>, StoreError> {
        match self.transport.list().await {
            Ok(candidates) => {
                self.cache.apply_loaded(candidates.clone());
                Ok(candidates)
            }
            Err(e) => {
                tracing::warn!(error = %e, "loading candidates failed, keeping cached list");
                Err(e)
            }
        }
    }

    /// Fetch a single candidate. The cache is not touched.
    pub async fn fetch(&self, id: &str) -> Result<Candidate, StoreError> {
        self.transport.get(id).await
    }

    /// Create a candidate and put it at the front of the cache.
    pub async fn create(&self, payload: &NewCandidate) -> Result<Candidate, StoreError> {
        let created = self.transport.create(payload).await.map_err(|e| {
            tracing::warn!(error = %e, "creating candidate failed");
            e
        })?;
        self.cache.apply_created(created.clone());
        Ok(created)
    }

    /// Send a partial update and merge the response into the cached entry.
    ///
    /// Returns the merged entry, or `None` if the id was not cached.
    pub async fn update(
        &self,
        id: &str,
        payload: &CandidateUpdate,
    ) -> Result<Option<Candidate>, StoreError> {
        let patch = self.transport.update(id, payload).await.map_err(|e| {
            tracing::warn!(id, error = %e, "updating candidate failed");
            e
        })?;
        Ok(self.cache.apply_updated(id, &patch))
    }

    /// Delete a candidate and drop it from the cache.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.transport.delete(id).await.map_err(|e| {
            tracing::warn!(id, error = %e, "deleting candidate failed");
            e
        })?;
        self.cache.apply_deleted(id);
        Ok(())
    }
}
