//! Client core for a candidate roster.
//!
//! - `CandidateStore` wraps the REST collection and owns the shared cache.
//! - `ViewState` derives the sorted, paginated rows and the aggregate counts.
//! - `CandidateBoard` runs the create/edit/delete flow on top of both.

mod board;
mod cache;
mod candidate;
mod config;
mod error;
mod form;
mod store;
mod transport;
mod view;

pub use board::{CandidateBoard, ConfirmPrompt, LogNotifier, Mode, Notifier};
pub use cache::{CandidateCache, CandidateFeed};
pub use candidate::{
    Candidate, CandidateField, CandidatePatch, CandidateUpdate, NewCandidate, Seniority, Upload,
};
pub use config::{Config, API_URL_ENV};
pub use error::{BoardError, StoreError};
pub use form::{CandidateForm, FormPayload, SubmitRejection};
pub use store::CandidateStore;
#[cfg(feature = "http")]
pub use transport::HttpTransport;
pub use transport::{CandidateTransport, InMemoryTransport, TransportCall};
pub use view::{
    page_bounds, sort_candidates, total_pages, CandidatePage, CandidateStats, SortDirection,
    ViewState,
};

// Re-export so implementors of the seams don't need a direct dependency.
pub use async_trait::async_trait;
