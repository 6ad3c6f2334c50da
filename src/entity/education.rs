use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl Education {
    pub fn new(degree: String, institution: String) -> Self {
        Self {
            id: super::record_id(),
            degree,
            institution,
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

impl Record for Education {
    fn id(&self) -> &str {
        &self.id
    }
}
