//! Normalization of student-directory query parameters.
//!
//! The listing endpoint takes the raw request state (sort order, the filter
//! that was active on the previous page view, an optional new search string,
//! and a page number) and resolves it into the effective query: which filter
//! applies, and which page to fetch. Submitting a search always restarts at
//! page 1; navigating between pages without a search box submission keeps
//! the previously active filter.

use serde::{Deserialize, Serialize};

use crate::pagination::clamp_page;

/// Sort keys for the student directory. `NameAsc` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentSort {
    #[default]
    #[serde(rename = "name")]
    NameAsc,
    NameDesc,
    #[serde(rename = "date")]
    DateAsc,
    DateDesc,
}

/// Raw listing request state, as supplied by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryRequest {
    pub sort_order: Option<StudentSort>,
    /// The filter that was active when the caller last saw the list.
    pub current_filter: Option<String>,
    /// A newly submitted search string. Presence (even empty, which clears
    /// the filter) restarts paging at page 1.
    pub search_string: Option<String>,
    pub page_number: Option<i64>,
}

/// The resolved, effective directory query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub sort: StudentSort,
    /// Case-insensitive substring filter over last name OR first/middle
    /// name. `None` means no filter.
    pub filter: Option<String>,
    /// Clamped, 1-based page to fetch.
    pub page_number: i64,
}

impl DirectoryRequest {
    /// Resolve the raw request into the effective query.
    pub fn resolve(self) -> DirectoryQuery {
        let (filter, page_number) = match self.search_string {
            // A search submission always restarts at page 1.
            Some(search) => (non_empty(search), 1),
            // Plain page navigation keeps the previously active filter.
            None => (
                self.current_filter.and_then(non_empty),
                clamp_page(self.page_number.unwrap_or(1)),
            ),
        };

        DirectoryQuery {
            sort: self.sort_order.unwrap_or_default(),
            filter,
            page_number,
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
