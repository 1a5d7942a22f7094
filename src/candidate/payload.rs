//! Outbound request payloads and the partial shape of PATCH responses.

use serde::{Deserialize, Serialize};

use super::Seniority;

/// A binary file attached to a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Multipart create payload: `name`, `surname`, optional `file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandidate {
    pub name: String,
    pub surname: String,
    pub file: Option<Upload>,
}

impl NewCandidate {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: Upload) -> Self {
        self.file = Some(file);
        self
    }
}

/// Partial update sent as the PATCH body.
///
/// Only the editable fields exist here, so a request can never carry an id
/// or a creation timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seniority: Option<Seniority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,
}

impl CandidateUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    pub fn seniority(mut self, seniority: Seniority) -> Self {
        self.seniority = Some(seniority);
        self
    }

    pub fn years(mut self, years: u32) -> Self {
        self.years = Some(years);
        self
    }

    pub fn availability(mut self, availability: bool) -> Self {
        self.availability = Some(availability);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.surname.is_none()
            && self.seniority.is_none()
            && self.years.is_none()
            && self.availability.is_none()
    }
}

/// Whatever subset of a candidate the server echoes back from a PATCH.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidatePatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub seniority: Option<Seniority>,
    pub years: Option<u32>,
    pub availability: Option<bool>,
    pub created_at: Option<String>,
}

impl From<CandidateUpdate> for CandidatePatch {
    fn from(update: CandidateUpdate) -> Self {
        Self {
            id: None,
            name: update.name,
            surname: update.surname,
            seniority: update.seniority,
            years: update.years,
            availability: update.availability,
            created_at: None,
        }
    }
}
