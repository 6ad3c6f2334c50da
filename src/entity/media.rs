use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// An uploaded image in the media library. `url` is a base64 data URI, so
/// the record is self-contained and survives store export/import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    pub url: String,
    pub name: String,
    /// Original file size in bytes (before base64 expansion).
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl MediaItem {
    pub fn new(url: String, name: String, size: u64) -> Self {
        Self {
            id: super::record_id(),
            url,
            name,
            size,
            uploaded_at: Utc::now(),
        }
    }
}

impl Record for MediaItem {
    fn id(&self) -> &str {
        &self.id
    }
}
