use iced::widget::{button, horizontal_space, row, text};
use iced::{Alignment, Element};

use crate::state::PaginationCursor;
use crate::{Message, PageChange};

/// Row offsets the navigation buttons lead to (None = disabled)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub first: Option<usize>,
    pub previous: Option<usize>,
    pub next: Option<usize>,
    pub last: Option<usize>,
}

impl Navigation {
    pub fn from_cursor(cursor: &PaginationCursor) -> Self {
        let current = cursor.current_page();
        let last = cursor.page_count();
        let offset = |page: u32| cursor.offset_of_page(page);

        Self {
            first: cursor.has_previous().then(|| offset(1)),
            previous: cursor.has_previous().then(|| offset(current - 1)),
            next: cursor.has_next().then(|| offset(current + 1)),
            last: cursor.has_next().then(|| offset(last)),
        }
    }
}

pub fn view<'a>(cursor: &PaginationCursor, rows_on_page: usize) -> Element<'a, Message> {
    let nav = Navigation::from_cursor(cursor);

    row![
        nav_button("«", nav.first),
        nav_button("‹", nav.previous),
        text(format!("Page {} of {}", cursor.current_page(), cursor.page_count())).size(14),
        nav_button("›", nav.next),
        nav_button("»", nav.last),
        horizontal_space(),
        text(cursor.row_range(rows_on_page)).size(14),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

fn nav_button<'a>(label: &'static str, target: Option<usize>) -> Element<'a, Message> {
    button(text(label))
        .on_press_maybe(target.map(|first| Message::PageChanged(PageChange { first })))
        .padding([4, 12])
        .into()
}
