use serde::{Deserialize, Serialize};

use super::Record;

/// A work-experience entry. Dates are stored at month precision
/// ("2021-03"); a current position has no end date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub current: bool,
    pub description: String,
}

impl Experience {
    pub fn new(title: String, company: String, start_date: String) -> Self {
        Self {
            id: super::record_id(),
            title,
            company,
            location: String::new(),
            start_date,
            end_date: None,
            current: false,
            description: String::new(),
        }
    }
}

impl Record for Experience {
    fn id(&self) -> &str {
        &self.id
    }
}
