//! Derived view - sort, paginate and aggregate the cached collection.
//!
//! A `CandidatePage` is a pure function of the cached list and a
//! `ViewState` (sort column, direction, page, page size). Nothing is
//! remembered between derivations, so callers simply derive again whenever
//! the cache or the view state changes.
//!
//! ## Example
//!
//! ```ignore
//! let mut view = ViewState::new(2);
//! view.sort_by(CandidateField::Years);
//!
//! let page = view.derive(&store.snapshot());
//! println!("{} of {} ({} total)", page.page, page.total_pages, page.stats.total);
//! ```

mod page;
mod sort;
mod stats;

use serde::{Deserialize, Serialize};

use crate::candidate::{Candidate, CandidateField};
use crate::config::Config;

pub use page::{page_bounds, total_pages};
pub use sort::{sort_candidates, SortDirection};
pub use stats::CandidateStats;

/// User-selected view parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    sort_column: CandidateField,
    sort_direction: SortDirection,
    page: usize,
    page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ViewState {
    /// Sorted by name ascending, on page 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            sort_column: CandidateField::Name,
            sort_direction: SortDirection::Asc,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Default view using the configured page size.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.page_size)
    }

    pub fn sort_column(&self) -> CandidateField {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Column header click: the active column flips direction, any other
    /// column becomes active in ascending order.
    pub fn sort_by(&mut self, column: CandidateField) {
        if self.sort_column == column {
            self.sort_direction = self.sort_direction.toggled();
            return;
        }
        self.sort_column = column;
        self.sort_direction = SortDirection::Asc;
    }

    /// Header indicator for `column`.
    pub fn sort_icon(&self, column: CandidateField) -> &'static str {
        if self.sort_column != column {
            return "↕";
        }
        match self.sort_direction {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }

    /// Jump to `page` (at least 1).
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Advance one page, but not past `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    /// Go back one page, but not before page 1.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Page count for a collection of `total` records.
    pub fn total_pages(&self, total: usize) -> usize {
        total_pages(total, self.page_size)
    }

    /// Derive the visible page and the aggregates from `candidates`.
    pub fn derive(&self, candidates: &[Candidate]) -> CandidatePage {
        let mut sorted = candidates.to_vec();
        sort_candidates(&mut sorted, self.sort_column, self.sort_direction);

        let (start, end) = page_bounds(self.page, self.page_size, sorted.len());
        let rows = sorted.drain(start..end).collect();

        CandidatePage {
            rows,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages(candidates.len()),
            stats: CandidateStats::from_candidates(candidates),
        }
    }
}

/// What the list screen renders for one view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePage {
    pub rows: Vec<Candidate>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub stats: CandidateStats,
}
