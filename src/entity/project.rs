use serde::{Deserialize, Serialize};

use super::Record;

/// Category list used for filtering on the public projects page. Categories
/// are free text on the record; this list is a UI allow-list, not a
/// referential constraint.
pub const PROJECT_CATEGORIES: [&str; 6] = [
    "Full-Stack Development",
    "Frontend Development",
    "Backend Development",
    "Mobile Development",
    "DevOps & Cloud",
    "UI/UX Design",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub gallery: Vec<String>,
    pub tech_stack: Vec<String>,
    pub category: String,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub completed_date: String,
}

impl Project {
    pub fn new(title: String, description: String, category: String) -> Self {
        Self {
            id: super::record_id(),
            title,
            description,
            long_description: String::new(),
            image: String::new(),
            gallery: Vec::new(),
            tech_stack: Vec::new(),
            category,
            featured: false,
            live_url: None,
            github_url: None,
            completed_date: String::new(),
        }
    }
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }
}
