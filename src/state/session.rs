/// Page-loading state machine
///
/// Owns everything the table shows: the current page slot, the
/// pagination cursor and the cross-page selection. The UI feeds it
/// events; it never performs I/O itself, it only tells the caller which
/// page to fetch.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use tracing::{debug, error, info};

use super::cursor::PaginationCursor;
use super::data::{Page, Record, RecordId};
use super::selection::{SelectionStore, ValidationError};
use crate::api::RequestError;

/// Where the session is in its fetch lifecycle
#[derive(Debug, Clone)]
pub enum LoadState {
    /// Not mounted yet, nothing requested
    Idle,
    /// Waiting for `page`, which starts at row offset `first`
    Loading { page: u32, first: usize },
    /// The last requested page is displayed
    Loaded,
    /// The last request failed; the previous page (if any) is displayed
    Error(RequestError),
}

/// What happened to a fetch completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page replaced the displayed one
    Applied,
    /// The request failed, the display is unchanged
    Failed,
    /// The completion belongs to a request that is no longer wanted
    Stale,
}

#[derive(Debug)]
pub struct Session {
    state: LoadState,
    cursor: PaginationCursor,
    /// Displayed page; None until the first successful fetch
    page: Option<Page>,
    selection: SelectionStore,
}

impl Session {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            state: LoadState::Idle,
            cursor: PaginationCursor::new(page_size),
            page: None,
            selection: SelectionStore::new(),
        }
    }

    /// Start the session by requesting the first page
    ///
    /// Returns the page number to fetch.
    pub fn mount(&mut self) -> u32 {
        self.request_offset(0)
    }

    /// The user asked for the page starting at row offset `first`
    ///
    /// Returns the 1-based page number to fetch. Any request still in
    /// flight is superseded: its completion will be reported as stale.
    pub fn request_offset(&mut self, first: usize) -> u32 {
        let page = self.cursor.page_for_offset(first);
        // Align to the page boundary so the cursor never sits mid-page
        let first = self.cursor.offset_of_page(page);

        if let LoadState::Loading { page: pending, .. } = self.state {
            if pending != page {
                debug!(superseded = pending, page, "Superseding pending page request.");
            }
        }

        info!(page, first, "Loading page.");
        self.state = LoadState::Loading { page, first };
        page
    }

    /// Deliver the result of fetching `page`
    pub fn finish_fetch(&mut self, page: u32, result: Result<Page, RequestError>) -> FetchOutcome {
        let first = match self.state {
            LoadState::Loading { page: pending, first } if pending == page => first,
            _ => {
                debug!(page, state = ?self.state, "Discarding stale page response.");
                return FetchOutcome::Stale;
            }
        };

        match result {
            Ok(loaded) => {
                self.cursor.settle(first, loaded.total_count);
                self.page = Some(loaded);
                self.state = LoadState::Loaded;
                FetchOutcome::Applied
            }
            Err(error) => {
                error!(page, %error, "Error fetching artworks.");
                self.state = LoadState::Error(error);
                FetchOutcome::Failed
            }
        }
    }

    /// The table reported the complete set of checked rows on the page
    pub fn change_selection(&mut self, checked: &BTreeSet<RecordId>) {
        let Some(page) = &self.page else {
            debug!("Ignoring selection change without a page.");
            return;
        };

        self.selection
            .apply_page_selection_change(page, checked.iter().copied());
    }

    /// Select the first `n` rows of the displayed page
    pub fn select_first_n(&mut self, n: Option<i64>) -> Result<usize, ValidationError> {
        let empty = Page::default();
        let page = self.page.as_ref().unwrap_or(&empty);

        self.selection.select_first_n(page, n)
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Error of the most recent request, if it failed
    pub fn last_error(&self) -> Option<&RequestError> {
        match &self.state {
            LoadState::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn cursor(&self) -> &PaginationCursor {
        &self.cursor
    }

    /// Records of the displayed page (empty before the first load)
    pub fn records(&self) -> &[Record] {
        self.page
            .as_ref()
            .map(|page| page.records.as_slice())
            .unwrap_or_default()
    }

    /// Selected ids among the displayed records
    pub fn visible_selection(&self) -> BTreeSet<RecordId> {
        self.page
            .as_ref()
            .map(|page| self.selection.visible_ids(page))
            .unwrap_or_default()
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }
}
