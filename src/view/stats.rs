use serde::{Deserialize, Serialize};

use crate::candidate::{Candidate, Seniority};

/// Aggregate counts over the whole cached collection.
///
/// `seniors + juniors == total` and `available + unavailable == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateStats {
    pub total: usize,
    pub seniors: usize,
    pub juniors: usize,
    pub available: usize,
    pub unavailable: usize,
}

impl CandidateStats {
    pub fn from_candidates(candidates: &[Candidate]) -> Self {
        candidates.iter().fold(Self::default(), |mut stats, c| {
            stats.total += 1;
            match c.seniority {
                Seniority::Senior => stats.seniors += 1,
                Seniority::Junior => stats.juniors += 1,
            }
            if c.availability {
                stats.available += 1;
            } else {
                stats.unavailable += 1;
            }
            stats
        })
    }
}
