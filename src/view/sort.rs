use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::candidate::{Candidate, CandidateField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Stable sort of `candidates` on one field.
///
/// Descending flips the comparison, so records with equal keys keep their
/// incoming relative order in both directions.
pub fn sort_candidates(candidates: &mut [Candidate], field: CandidateField, direction: SortDirection) {
    candidates.sort_by(|a, b| direction.apply(a.compare_by(b, field)));
}
