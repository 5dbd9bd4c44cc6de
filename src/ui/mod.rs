/// Widgets for the artworks window
///
/// - `table.rs` - the checkbox table for one page of records
/// - `paginator.rs` - first / previous / next / last navigation
/// - `select_rows.rs` - the "select first N rows" panel

pub mod paginator;
pub mod select_rows;
pub mod table;

pub use select_rows::SelectRowsPanel;

/// Text color for errors and validation feedback
pub const ERROR_COLOR: iced::Color = iced::Color::from_rgb(0.85, 0.2, 0.2);
