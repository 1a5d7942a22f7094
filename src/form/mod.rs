//! CandidateForm - field state and submission guard for the create/edit panel.
//!
//! A form is bound to an edit target or to nothing (create mode). `submit()`
//! validates, marks the form as in flight and hands back the payload to send;
//! until the call settles, further submits, cancels and file changes are
//! ignored. Binding a new target always clears the in-flight flag.

use crate::candidate::{Candidate, CandidateUpdate, NewCandidate, Seniority, Upload};

/// What a successful `submit()` produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPayload {
    /// Create mode: multipart name, surname and optional file.
    Create(NewCandidate),
    /// Edit mode: the editable fields.
    Update(CandidateUpdate),
}

/// Why a submit produced no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A submission is already in flight.
    InFlight,
    /// Name or surname is blank after trimming.
    MissingName,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateForm {
    pub name: String,
    pub surname: String,
    pub seniority: Seniority,
    pub years: u32,
    pub availability: bool,
    file: Option<Upload>,
    target: Option<String>,
    loading: bool,
}

impl CandidateForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the form to an edit target (copying its fields) or, with `None`,
    /// reset it for a new candidate.
    pub fn bind(&mut self, candidate: Option<&Candidate>) {
        match candidate {
            Some(c) => {
                self.name = c.name.clone();
                self.surname = c.surname.clone();
                self.seniority = c.seniority;
                self.years = c.years;
                self.availability = c.availability;
                self.file = None;
                self.target = Some(c.id.clone());
            }
            None => *self = Self::default(),
        }
        self.loading = false;
    }

    /// Id of the candidate being edited, if any.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn file(&self) -> Option<&Upload> {
        self.file.as_ref()
    }

    /// Attach a file. Ignored in edit mode and while in flight.
    pub fn set_file(&mut self, file: Upload) -> bool {
        if self.is_editing() || self.loading {
            return false;
        }
        self.file = Some(file);
        true
    }

    /// Validate and build the payload, marking the form as in flight.
    pub fn submit(&mut self) -> Result<FormPayload, SubmitRejection> {
        if self.loading {
            tracing::warn!("submit ignored: request already in flight");
            return Err(SubmitRejection::InFlight);
        }
        let name = self.name.trim();
        let surname = self.surname.trim();
        if name.is_empty() || surname.is_empty() {
            return Err(SubmitRejection::MissingName);
        }

        let payload = if self.is_editing() {
            FormPayload::Update(
                CandidateUpdate::default()
                    .name(name)
                    .surname(surname)
                    .seniority(self.seniority)
                    .years(self.years)
                    .availability(self.availability),
            )
        } else {
            let mut new = NewCandidate::new(name, surname);
            new.file = self.file.clone();
            FormPayload::Create(new)
        };

        self.loading = true;
        Ok(payload)
    }

    /// Returns `false` (and does nothing) while a submission is in flight.
    pub fn cancel(&self) -> bool {
        !self.loading
    }

    /// Clear the in-flight flag after a failed call so the user can retry.
    pub fn settle(&mut self) {
        self.loading = false;
    }
}
