/// Pagination bookkeeping for the lazily-loaded table
///
/// The server decides the page size; the cursor only maps between
/// row offsets (what the paginator works in) and 1-based page numbers
/// (what the API works in).

use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    /// Offset of the first row of the displayed page
    first: usize,
    page_size: NonZeroUsize,
    /// Size of the full remote dataset, as last reported by the server
    total: u64,
}

impl PaginationCursor {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            first: 0,
            page_size,
            total: 0,
        }
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// 1-based number of the displayed page
    pub fn current_page(&self) -> u32 {
        self.page_for_offset(self.first)
    }

    /// Map a row offset to the 1-based page containing it
    pub fn page_for_offset(&self, offset: usize) -> u32 {
        let page = offset / self.page_size.get() + 1;
        u32::try_from(page).unwrap_or(u32::MAX)
    }

    /// Row offset of the first row on a 1-based page
    pub fn offset_of_page(&self, page: u32) -> usize {
        (page.max(1) as usize - 1).saturating_mul(self.page_size.get())
    }

    /// Number of pages in the remote dataset (at least 1)
    pub fn page_count(&self) -> u32 {
        let size = self.page_size.get() as u64;
        let pages = self.total.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page() < self.page_count()
    }

    /// Commit a loaded page: the cursor now describes it
    pub fn settle(&mut self, first: usize, total: u64) {
        self.first = first;
        self.total = total;
    }

    /// Human-readable range of displayed rows, e.g. "11–20 of 100"
    pub fn row_range(&self, rows_on_page: usize) -> String {
        if rows_on_page == 0 {
            return format!("0 of {}", self.total);
        }

        format!(
            "{}–{} of {}",
            self.first + 1,
            self.first + rows_on_page,
            self.total
        )
    }
}
