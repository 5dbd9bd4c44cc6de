/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Row offset / page number bookkeeping (cursor.rs)
/// - The cross-page selection set (selection.rs)
/// - The page-loading state machine that ties them together (session.rs)

pub mod cursor;
pub mod data;
pub mod selection;
pub mod session;

#[cfg(test)]
pub mod fixtures;

pub use cursor::PaginationCursor;
pub use data::{Page, Record, RecordId};
pub use selection::ValidationError;
pub use session::{FetchOutcome, LoadState, Session};
