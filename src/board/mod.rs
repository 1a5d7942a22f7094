//! CandidateBoard - editing and deletion orchestration for the list screen.
//!
//! The board ties together the store, the derived view, the form session
//! and the notifier. Its mode is one of:
//!
//! ```text
//!            open_create              submit ok / close_form
//!   Idle ───────────────▶ Creating ─────────────────────────▶ Idle
//!     │      open_edit(c)             submit ok / close_form
//!     ├─────────────────▶ Editing(c) ───────────────────────▶ Idle
//!     │  begin_delete(c)              resolve_delete(_)
//!     └─────────────────▶ ConfirmingDelete(c) ──────────────▶ Idle
//! ```
//!
//! A submission is routed by the current target, not by the payload: with
//! an edit target it becomes `update(target.id, fields)`, otherwise
//! `create(payload)`. The form stays open until the call settles.

mod notify;

use crate::candidate::{Candidate, CandidateField, CandidateUpdate, NewCandidate};
use crate::config::Config;
use crate::error::{BoardError, StoreError};
use crate::form::{CandidateForm, FormPayload, SubmitRejection};
use crate::store::CandidateStore;
use crate::transport::CandidateTransport;
use crate::view::{CandidatePage, CandidateStats, ViewState};

#[cfg(feature = "http")]
use crate::transport::HttpTransport;

pub use notify::{ConfirmPrompt, LogNotifier, Notifier};

const UPDATED: &str = "Candidate updated";
const UPLOADED: &str = "Candidates uploaded";
const DELETED: &str = "Candidate deleted";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Creating,
    Editing(Candidate),
    ConfirmingDelete(Candidate),
}

pub struct CandidateBoard<T, N> {
    store: CandidateStore<T>,
    notifier: N,
    view: ViewState,
    form: CandidateForm,
    mode: Mode,
}

#[cfg(feature = "http")]
impl<N: Notifier> CandidateBoard<HttpTransport, N> {
    /// Board over the HTTP store for `config.api_url`, paged by
    /// `config.page_size`.
    pub fn connect(config: &Config, notifier: N) -> Result<Self, StoreError> {
        Ok(Self::with_config(CandidateStore::connect(config)?, notifier, config))
    }
}

impl<T: CandidateTransport, N: Notifier> CandidateBoard<T, N> {
    pub fn new(store: CandidateStore<T>, notifier: N) -> Self {
        Self::with_view(store, notifier, ViewState::default())
    }

    /// Board whose view uses `config.page_size`.
    pub fn with_config(store: CandidateStore<T>, notifier: N, config: &Config) -> Self {
        Self::with_view(store, notifier, ViewState::from_config(config))
    }

    pub fn with_view(store: CandidateStore<T>, notifier: N, view: ViewState) -> Self {
        Self {
            store,
            notifier,
            view,
            form: CandidateForm::new(),
            mode: Mode::Idle,
        }
    }

    pub fn store(&self) -> &CandidateStore<T> {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The edit target, if the form is open in edit mode.
    pub fn selected(&self) -> Option<&Candidate> {
        match &self.mode {
            Mode::Editing(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_form_open(&self) -> bool {
        matches!(self.mode, Mode::Creating | Mode::Editing(_))
    }

    pub fn form(&self) -> &CandidateForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CandidateForm {
        &mut self.form
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    // ---------------------------------------------------------------------
    // Collection and derived view
    // ---------------------------------------------------------------------

    /// Load the collection. Failures are reported and the stale list kept.
    pub async fn load(&self) -> Result<(), BoardError> {
        match self.store.load_all().await {
            Ok(_) => Ok(()),
            Err(e) => Err(self.report("Could not load candidates", e)),
        }
    }

    /// The rows and aggregates for the current view state.
    pub fn page(&self) -> CandidatePage {
        self.store.cache().with(|list| self.view.derive(list))
    }

    pub fn stats(&self) -> CandidateStats {
        self.store.cache().with(CandidateStats::from_candidates)
    }

    pub fn total_pages(&self) -> usize {
        self.view.total_pages(self.store.cache().len())
    }

    pub fn sort_by(&mut self, column: CandidateField) {
        self.view.sort_by(column);
    }

    pub fn sort_icon(&self, column: CandidateField) -> &'static str {
        self.view.sort_icon(column)
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.view.go_to_page(page);
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.view.next_page(total);
    }

    pub fn prev_page(&mut self) {
        self.view.prev_page();
    }

    // ---------------------------------------------------------------------
    // Create / edit
    // ---------------------------------------------------------------------

    /// Open the form for a new candidate, clearing any previous target.
    pub fn open_create(&mut self) -> bool {
        if !self.can_switch() {
            return false;
        }
        self.form.bind(None);
        self.mode = Mode::Creating;
        true
    }

    /// Open the form to edit `candidate`.
    pub fn open_edit(&mut self, candidate: &Candidate) -> bool {
        if !self.can_switch() {
            return false;
        }
        self.form.bind(Some(candidate));
        self.mode = Mode::Editing(candidate.clone());
        true
    }

    /// Cancel the form. Ignored while a submission is in flight.
    pub fn close_form(&mut self) -> bool {
        if !self.form.cancel() {
            tracing::warn!("cancel ignored: request in flight");
            return false;
        }
        self.reset_form();
        true
    }

    /// Submit the form's current fields.
    pub async fn submit(&mut self) -> Result<Candidate, BoardError> {
        let payload = self.form.submit().map_err(|rejection| match rejection {
            SubmitRejection::InFlight => BoardError::Busy,
            SubmitRejection::MissingName => {
                BoardError::Invalid("name and surname are required".into())
            }
        })?;
        self.dispatch(payload).await
    }

    /// Submit a ready-made payload, routed by the current edit target.
    pub async fn submit_payload(&mut self, payload: FormPayload) -> Result<Candidate, BoardError> {
        if self.form.is_loading() {
            return Err(BoardError::Busy);
        }
        self.dispatch(payload).await
    }

    async fn dispatch(&mut self, payload: FormPayload) -> Result<Candidate, BoardError> {
        let result = match self.selected().cloned() {
            Some(target) => self.dispatch_update(&target, payload).await,
            None => self.dispatch_create(payload).await,
        };
        match result {
            Ok(candidate) => {
                self.reset_form();
                Ok(candidate)
            }
            Err(e) => {
                self.form.settle();
                Err(e)
            }
        }
    }

    async fn dispatch_update(
        &self,
        target: &Candidate,
        payload: FormPayload,
    ) -> Result<Candidate, BoardError> {
        let update = match payload {
            FormPayload::Update(update) => update,
            FormPayload::Create(new) => CandidateUpdate::default().name(new.name).surname(new.surname),
        };

        match self.store.update(&target.id, &update).await {
            Ok(merged) => {
                self.notifier.success(UPDATED);
                Ok(merged.unwrap_or_else(|| {
                    let mut local = target.clone();
                    local.merge(&update.into());
                    local
                }))
            }
            Err(e) => Err(self.report("Could not update candidate", e)),
        }
    }

    async fn dispatch_create(&self, payload: FormPayload) -> Result<Candidate, BoardError> {
        let new = match payload {
            FormPayload::Create(new) => new,
            FormPayload::Update(CandidateUpdate {
                name: Some(name),
                surname: Some(surname),
                ..
            }) => NewCandidate::new(name, surname),
            FormPayload::Update(_) => {
                return Err(BoardError::Invalid(
                    "a new candidate needs a name and a surname".into(),
                ))
            }
        };

        match self.store.create(&new).await {
            Ok(created) => {
                self.notifier.success(UPLOADED);
                Ok(created)
            }
            Err(e) => Err(self.report("Could not upload candidates", e)),
        }
    }

    // ---------------------------------------------------------------------
    // Delete
    // ---------------------------------------------------------------------

    /// Enter delete confirmation for `candidate` and return the prompt to
    /// show. Only possible from `Idle`.
    pub fn begin_delete(&mut self, candidate: &Candidate) -> Option<ConfirmPrompt> {
        if self.mode != Mode::Idle {
            tracing::warn!(id = %candidate.id, "delete ignored: board is busy");
            return None;
        }
        self.mode = Mode::ConfirmingDelete(candidate.clone());
        Some(delete_prompt(candidate))
    }

    /// Leave delete confirmation. Deletes only when `confirmed`.
    ///
    /// Returns whether a candidate was deleted.
    pub async fn resolve_delete(&mut self, confirmed: bool) -> Result<bool, BoardError> {
        let target = match std::mem::take(&mut self.mode) {
            Mode::ConfirmingDelete(target) => target,
            other => {
                self.mode = other;
                return Ok(false);
            }
        };
        if !confirmed {
            return Ok(false);
        }

        match self.store.delete(&target.id).await {
            Ok(()) => {
                self.notifier.success(DELETED);
                Ok(true)
            }
            Err(e) => Err(self.report("Could not delete candidate", e)),
        }
    }

    /// Ask the notifier for confirmation, then delete if confirmed.
    pub async fn request_delete(&mut self, candidate: &Candidate) -> Result<bool, BoardError> {
        let Some(prompt) = self.begin_delete(candidate) else {
            return Ok(false);
        };
        let confirmed = self.notifier.confirm(&prompt).await;
        self.resolve_delete(confirmed).await
    }

    // ---------------------------------------------------------------------

    fn can_switch(&self) -> bool {
        !self.form.is_loading() && !matches!(self.mode, Mode::ConfirmingDelete(_))
    }

    fn reset_form(&mut self) {
        self.form.bind(None);
        self.mode = Mode::Idle;
    }

    fn report(&self, action: &str, err: StoreError) -> BoardError {
        self.notifier.error(&format!("{}: {}", action, err));
        BoardError::Store(err)
    }
}

fn delete_prompt(candidate: &Candidate) -> ConfirmPrompt {
    ConfirmPrompt::new(
        "Delete candidate",
        format!("Are you sure you want to delete {}?", candidate.full_name()),
    )
    .labels("Delete", "Cancel")
}
