//! Candidate data model.
//!
//! A `Candidate` mirrors the JSON shape served by the backend:
//!
//! ```text
//! { id, name, surname, seniority: "junior"|"senior", years, availability, createdAt }
//! ```
//!
//! `id` and `created_at` are assigned by the server and never changed on the
//! client. Outbound payloads (`NewCandidate`, `CandidateUpdate`) live in
//! `payload` and cannot carry either field.

mod payload;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use payload::{CandidatePatch, CandidateUpdate, NewCandidate, Upload};

/// Seniority level. Declaration order gives `Junior < Senior`, which matches
/// the dictionary order of their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    #[default]
    Junior,
    Senior,
}

impl Seniority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Junior => "junior",
            Seniority::Senior => "senior",
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job applicant record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub seniority: Seniority,
    pub years: u32,
    pub availability: bool,
    pub created_at: String,
}

impl Candidate {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `"{name} {surname}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    /// Merge the fields present in a server response into this record.
    ///
    /// Absent fields keep their prior value. The id is the merge key and is
    /// never overwritten.
    pub fn merge(&mut self, patch: &CandidatePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(surname) = &patch.surname {
            self.surname = surname.clone();
        }
        if let Some(seniority) = patch.seniority {
            self.seniority = seniority;
        }
        if let Some(years) = patch.years {
            self.years = years;
        }
        if let Some(availability) = patch.availability {
            self.availability = availability;
        }
        if let Some(created_at) = &patch.created_at {
            self.created_at = created_at.clone();
        }
    }

    /// Natural ordering of this record and `other` on a single field.
    pub fn compare_by(&self, other: &Candidate, field: CandidateField) -> Ordering {
        match field {
            CandidateField::Id => self.id.cmp(&other.id),
            CandidateField::Name => self.name.cmp(&other.name),
            CandidateField::Surname => self.surname.cmp(&other.surname),
            CandidateField::Seniority => self.seniority.cmp(&other.seniority),
            CandidateField::Years => self.years.cmp(&other.years),
            CandidateField::Availability => self.availability.cmp(&other.availability),
            CandidateField::CreatedAt => self.created_at.cmp(&other.created_at),
        }
    }
}

/// The columns a candidate list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CandidateField {
    Id,
    Name,
    Surname,
    Seniority,
    Years,
    Availability,
    CreatedAt,
}

impl CandidateField {
    pub const ALL: [CandidateField; 7] = [
        CandidateField::Id,
        CandidateField::Name,
        CandidateField::Surname,
        CandidateField::Seniority,
        CandidateField::Years,
        CandidateField::Availability,
        CandidateField::CreatedAt,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateField::Id => "id",
            CandidateField::Name => "name",
            CandidateField::Surname => "surname",
            CandidateField::Seniority => "seniority",
            CandidateField::Years => "years",
            CandidateField::Availability => "availability",
            CandidateField::CreatedAt => "createdAt",
        }
    }
}

impl fmt::Display for CandidateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
