use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// A message received through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl ContactMessage {
    pub fn new(name: String, email: String, subject: String, message: String) -> Self {
        Self {
            id: super::record_id(),
            name,
            email,
            subject,
            message,
            created_at: Utc::now(),
            read: false,
        }
    }
}

impl Record for ContactMessage {
    fn id(&self) -> &str {
        &self.id
    }
}
