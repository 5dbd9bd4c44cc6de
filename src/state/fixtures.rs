/// Record and page builders shared by unit tests

use super::data::{Page, Record, RecordId};

pub fn record(id: RecordId) -> Record {
    Record {
        id,
        title: format!("Artwork #{id}"),
        place_of_origin: "Chicago".to_owned(),
        artist_display: format!("Artist {id}"),
        inscriptions: String::new(),
        date_start: Some(1900),
        date_end: Some(1901),
    }
}

pub fn page(ids: impl IntoIterator<Item = RecordId>, total_count: u64) -> Page {
    Page {
        records: ids.into_iter().map(record).collect(),
        total_count,
    }
}
