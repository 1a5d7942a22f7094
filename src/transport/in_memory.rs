//! InMemoryTransport - backend emulation for testing and development.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};

use super::CandidateTransport;
use crate::candidate::{Candidate, CandidatePatch, CandidateUpdate, NewCandidate, Seniority};
use crate::error::StoreError;

/// A call observed by the in-memory backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    List,
    Get(String),
    Create(NewCandidate),
    Update(String, CandidateUpdate),
    Delete(String),
}

#[derive(Default)]
struct State {
    records: Vec<Candidate>,
    next_id: u64,
    calls: Vec<TransportCall>,
    fail_next: Option<StoreError>,
}

/// Emulates the REST backend in memory.
///
/// Ids are assigned sequentially (`"1"`, `"2"`, ...), `createdAt` is the
/// RFC 3339 creation time, listings are newest first, and unknown ids yield
/// `StoreError::NotFound`. Every call is recorded, failed ones included.
///
/// Clone-friendly via Arc; clones share the same backend.
#[derive(Clone, Default)]
pub struct InMemoryTransport {
    state: Arc<Mutex<State>>,
}

impl InMemoryTransport {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend holding `records`, listed in the given order.
    pub fn with_records(records: Vec<Candidate>) -> Self {
        let transport = Self::new();
        if let Ok(mut state) = transport.state.lock() {
            state.next_id = records
                .iter()
                .filter_map(|c| c.id.parse::<u64>().ok())
                .max()
                .unwrap_or(0);
            state.records = records;
        }
        transport
    }

    fn state(&self) -> Result<MutexGuard<'_, State>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::Transport("in-memory backend lock poisoned".into()))
    }

    /// Make the next call fail with `error` without touching any record.
    pub fn fail_next(&self, error: StoreError) {
        match self.state.lock() {
            Ok(mut state) => state.fail_next = Some(error),
            Err(_) => tracing::warn!(%error, "in-memory backend lock poisoned, failure not armed"),
        }
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<TransportCall> {
        self.state
            .lock()
            .map(|state| state.calls.clone())
            .unwrap_or_default()
    }

    /// Server-side records, as a listing would return them.
    pub fn records(&self) -> Vec<Candidate> {
        self.state
            .lock()
            .map(|state| state.records.clone())
            .unwrap_or_default()
    }

    /// Record the call, then surface an injected failure if one is pending.
    fn begin(&self, call: TransportCall) -> Result<MutexGuard<'_, State>, StoreError> {
        let mut state = self.state()?;
        state.calls.push(call);
        let pending = state.fail_next.take();
        match pending {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl CandidateTransport for InMemoryTransport {
    async fn list(&self) -> Result<Vec<Candidate>, StoreError> {
        let state = self.begin(TransportCall::List)?;
        Ok(state.records.clone())
    }

    async fn get(&self, id: &str) -> Result<Candidate, StoreError> {
        let state = self.begin(TransportCall::Get(id.to_string()))?;
        state
            .records
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn create(&self, payload: &NewCandidate) -> Result<Candidate, StoreError> {
        let mut state = self.begin(TransportCall::Create(payload.clone()))?;
        state.next_id += 1;
        let candidate = Candidate {
            id: state.next_id.to_string(),
            name: payload.name.clone(),
            surname: payload.surname.clone(),
            seniority: Seniority::Junior,
            years: 0,
            availability: false,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        state.records.insert(0, candidate.clone());
        Ok(candidate)
    }

    async fn update(
        &self,
        id: &str,
        payload: &CandidateUpdate,
    ) -> Result<CandidatePatch, StoreError> {
        let mut state = self.begin(TransportCall::Update(id.to_string(), payload.clone()))?;
        let record = state
            .records
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let patch = CandidatePatch::from(payload.clone());
        record.merge(&patch);

        // The backend echoes the fields it changed plus the id.
        Ok(CandidatePatch {
            id: Some(record.id.clone()),
            ..patch
        })
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.begin(TransportCall::Delete(id.to_string()))?;
        let before = state.records.len();
        state.records.retain(|c| c.id != id);
        if state.records.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
