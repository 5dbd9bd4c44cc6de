/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the API layer and the UI layer.

use serde::{Deserialize, Deserializer};

/// Identifier of an artwork, unique within the remote dataset
pub type RecordId = u64;

/// Represents a single artwork on a page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub place_of_origin: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist_display: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub inscriptions: String,
    /// Year the work was started (None if unknown)
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Year the work was completed (None if unknown)
    #[serde(default)]
    pub date_end: Option<i32>,
}

/// One server-paginated batch of records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Records in the order the server returned them
    pub records: Vec<Record>,
    /// Size of the full remote dataset
    pub total_count: u64,
}

impl Page {
    /// Iterate over the identifiers of every record on this page
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.iter().map(|record| record.id)
    }

    /// Check whether a record with this id is on the page
    pub fn contains(&self, id: RecordId) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// The API sends `null` for missing text fields
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
