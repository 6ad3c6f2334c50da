use serde::{Deserialize, Serialize};

use super::Record;

pub const BLOG_CATEGORIES: [&str; 7] = [
    "Web Development",
    "Frontend Development",
    "Backend Development",
    "DevOps",
    "Mobile Development",
    "Software Engineering",
    "Career & Growth",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown body.
    pub content: String,
    pub image: String,
    pub author: String,
    pub published_date: String,
    pub tags: Vec<String>,
    pub category: String,
    /// Estimated reading time in minutes.
    pub read_time: u32,
}

impl BlogPost {
    pub fn new(title: String, category: String) -> Self {
        Self {
            id: super::record_id(),
            title,
            excerpt: String::new(),
            content: String::new(),
            image: String::new(),
            author: String::new(),
            published_date: String::new(),
            tags: Vec::new(),
            category,
            read_time: 0,
        }
    }
}

impl Record for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }
}
