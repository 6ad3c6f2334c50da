use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Proficiency from 0 to 100.
    pub level: u8,
}

impl Skill {
    pub fn new(name: String, category: String, level: u8) -> Self {
        Self {
            id: super::record_id(),
            name,
            category,
            level: level.min(100),
        }
    }
}

impl Record for Skill {
    fn id(&self) -> &str {
        &self.id
    }
}
