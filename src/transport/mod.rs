//! Transport - the network seam under the candidate store.
//!
//! A `CandidateTransport` speaks the REST contract of the collection
//! endpoint and nothing else: no caching, no retries, no timeouts of its own.
//!
//! | Call           | Request                          | Success body        |
//! |----------------|----------------------------------|---------------------|
//! | `list`         | `GET {base}`                     | `[Candidate]`       |
//! | `get`          | `GET {base}/{id}`                | `Candidate`         |
//! | `create`       | `POST {base}` (multipart)        | `Candidate`         |
//! | `update`       | `PATCH {base}/{id}` (JSON)       | partial `Candidate` |
//! | `delete`       | `DELETE {base}/{id}`             | empty               |
//!
//! Two implementations ship with the crate: `HttpTransport` (feature
//! `http`, reqwest) and `InMemoryTransport`, which emulates the backend for
//! tests and local development.

#[cfg(feature = "http")]
mod http;
mod in_memory;

use async_trait::async_trait;

use crate::candidate::{Candidate, CandidatePatch, CandidateUpdate, NewCandidate};
use crate::error::StoreError;

#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use in_memory::{InMemoryTransport, TransportCall};

/// REST calls against the candidate collection.
#[async_trait]
pub trait CandidateTransport: Send + Sync {
    /// `GET {base}`
    async fn list(&self) -> Result<Vec<Candidate>, StoreError>;

    /// `GET {base}/{id}`
    async fn get(&self, id: &str) -> Result<Candidate, StoreError>;

    /// `POST {base}` with a multipart body.
    async fn create(&self, payload: &NewCandidate) -> Result<Candidate, StoreError>;

    /// `PATCH {base}/{id}` with a JSON body.
    async fn update(&self, id: &str, payload: &CandidateUpdate)
        -> Result<CandidatePatch, StoreError>;

    /// `DELETE {base}/{id}`
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
