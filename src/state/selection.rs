/// Cross-page selection tracking
///
/// The table only ever shows one page, and its checkboxes only know
/// about the rows on that page. The store keeps the global set of
/// selected ids and reconciles it with whatever page is visible.

use std::collections::BTreeSet;
use std::num::IntErrorKind;

use thiserror::Error;
use tracing::{debug, trace};

use super::data::{Page, Record, RecordId};

/// Invalid input for "select the first N rows"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a valid number")]
    Missing,

    #[error("\"{0}\" is not a number")]
    NotANumber(String),

    #[error("Enter a number greater than zero (got {0})")]
    NotPositive(i64),

    #[error("Cannot select {requested} rows, only {available} available in current page")]
    ExceedsPage { requested: i64, available: usize },
}

/// Parse the raw text of the "select N" input
///
/// Blank input is `None`; range checks happen in
/// [`SelectionStore::select_first_n`] where the page is known.
/// Integers outside `i64` saturate so they are reported as too large or
/// not positive rather than as text.
pub fn parse_count(input: &str) -> Result<Option<i64>, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    match input.parse::<i64>() {
        Ok(n) => Ok(Some(n)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(Some(i64::MAX)),
            IntErrorKind::NegOverflow => Ok(Some(i64::MIN)),
            _ => Err(ValidationError::NotANumber(input.to_owned())),
        },
    }
}

/// The set of globally selected record ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: BTreeSet<RecordId>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records of `page`, in page order, that are currently selected
    pub fn visible_selection<'p>(&self, page: &'p Page) -> Vec<&'p Record> {
        page.records
            .iter()
            .filter(|record| self.selected.contains(&record.id))
            .collect()
    }

    /// Ids of `page` that are currently selected
    pub fn visible_ids(&self, page: &Page) -> BTreeSet<RecordId> {
        self.visible_selection(page)
            .into_iter()
            .map(|record| record.id)
            .collect()
    }

    /// Replace the selection within `page` by `checked`
    ///
    /// `checked` is the complete set of checked rows on the page, not a
    /// delta. Every id of the page is evicted first, so a row that was
    /// unchecked does not stay selected globally.
    pub fn apply_page_selection_change<I>(&mut self, page: &Page, checked: I)
    where
        I: IntoIterator<Item = RecordId>,
    {
        for id in page.ids() {
            self.selected.remove(&id);
        }

        for id in checked {
            if page.contains(id) {
                self.selected.insert(id);
            } else {
                trace!(id, "Ignoring checked id that is not on the current page.");
            }
        }

        debug!(
            on_page = self.visible_ids(page).len(),
            total = self.selected.len(),
            "Page selection changed."
        );
    }

    /// Select the first `n` rows of `page`
    ///
    /// Returns how many ids were not already selected. Fails without
    /// touching the selection when `n` is missing, not positive, or
    /// larger than the page.
    pub fn select_first_n(&mut self, page: &Page, n: Option<i64>) -> Result<usize, ValidationError> {
        let requested = n.ok_or(ValidationError::Missing)?;
        if requested <= 0 {
            return Err(ValidationError::NotPositive(requested));
        }

        let available = page.len();
        let count = usize::try_from(requested)
            .ok()
            .filter(|count| *count <= available)
            .ok_or(ValidationError::ExceedsPage { requested, available })?;

        let added = page
            .ids()
            .take(count)
            .filter(|id| self.selected.insert(*id))
            .count();

        debug!(count, added, total = self.selected.len(), "Selected first rows of page.");

        Ok(added)
    }

    /// Selected ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.selected.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
