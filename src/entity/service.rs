use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
}

impl Service {
    pub fn new(title: String, description: String) -> Self {
        Self {
            id: super::record_id(),
            title,
            description,
            icon: String::new(),
            features: Vec::new(),
        }
    }
}

impl Record for Service {
    fn id(&self) -> &str {
        &self.id
    }
}
