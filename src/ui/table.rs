/// Checkbox table for one page of artworks
///
/// Like most table widgets, it reports the *complete* set of checked
/// rows on the page whenever a checkbox changes, never a delta. The
/// session reconciles that with the cross-page selection.

use std::collections::BTreeSet;

use iced::widget::{checkbox, container, horizontal_rule, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::state::{Record, RecordId};
use crate::{Message, SelectionChange};

/// Header and relative width of every data column
const COLUMNS: [(&str, u16); 6] = [
    ("Title", 4),
    ("Origin", 2),
    ("Artist", 4),
    ("Inscriptions", 3),
    ("Start Year", 1),
    ("End Year", 1),
];

const CHECKBOX_WIDTH: f32 = 32.0;

/// Checked rows of the page after one row checkbox changed
pub fn checked_after_toggle(
    checked: &BTreeSet<RecordId>,
    id: RecordId,
    is_checked: bool,
) -> BTreeSet<RecordId> {
    let mut checked = checked.clone();
    if is_checked {
        checked.insert(id);
    } else {
        checked.remove(&id);
    }
    checked
}

/// Checked rows of the page after the header checkbox changed
pub fn checked_after_toggle_all(records: &[Record], is_checked: bool) -> BTreeSet<RecordId> {
    if is_checked {
        records.iter().map(|record| record.id).collect()
    } else {
        BTreeSet::new()
    }
}

/// Build the table for `records`, with `checked` the selected ids among them
pub fn view<'a>(records: &'a [Record], checked: &BTreeSet<RecordId>) -> Element<'a, Message> {
    let all_checked = !records.is_empty() && records.iter().all(|record| checked.contains(&record.id));

    let header_checkbox = checkbox("", all_checked);
    let header_checkbox = if records.is_empty() {
        header_checkbox
    } else {
        header_checkbox.on_toggle(move |is_checked| {
            Message::SelectionChanged(SelectionChange {
                checked_ids: checked_after_toggle_all(records, is_checked),
            })
        })
    };

    let header = COLUMNS.iter().fold(
        Row::new()
            .push(container(header_checkbox).width(CHECKBOX_WIDTH))
            .spacing(8)
            .align_y(Alignment::Center),
        |row, (title, portion)| row.push(cell(text(*title).size(14), *portion)),
    );

    let body: Element<'a, Message> = if records.is_empty() {
        container(text("No artworks found").size(14))
            .padding(20)
            .center_x(Length::Fill)
            .into()
    } else {
        let rows = records.iter().map(|record| table_row(record, checked));
        scrollable(Column::with_children(rows).spacing(6))
            .height(Length::Fill)
            .into()
    };

    Column::new()
        .push(header)
        .push(horizontal_rule(1))
        .push(body)
        .spacing(6)
        .into()
}

fn table_row<'a>(record: &'a Record, checked: &BTreeSet<RecordId>) -> Element<'a, Message> {
    let id = record.id;
    let page_checked = checked.clone();

    let row_checkbox = checkbox("", checked.contains(&id)).on_toggle(move |is_checked| {
        Message::SelectionChanged(SelectionChange {
            checked_ids: checked_after_toggle(&page_checked, id, is_checked),
        })
    });

    Row::new()
        .push(container(row_checkbox).width(CHECKBOX_WIDTH))
        .push(cell(text(&record.title).size(13), COLUMNS[0].1))
        .push(cell(text(&record.place_of_origin).size(13), COLUMNS[1].1))
        .push(cell(text(&record.artist_display).size(13), COLUMNS[2].1))
        .push(cell(text(&record.inscriptions).size(13), COLUMNS[3].1))
        .push(cell(text(year(record.date_start)).size(13), COLUMNS[4].1))
        .push(cell(text(year(record.date_end)).size(13), COLUMNS[5].1))
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

fn cell<'a>(content: impl Into<Element<'a, Message>>, portion: u16) -> Element<'a, Message> {
    container(content)
        .width(Length::FillPortion(portion))
        .into()
}

fn year(value: Option<i32>) -> String {
    value.map(|year| year.to_string()).unwrap_or_default()
}
