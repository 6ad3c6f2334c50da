use serde::{Deserialize, Serialize};

/// A social profile link rendered in the site chrome. Edited by position,
/// not by id, so it carries no `Record` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

impl SocialLink {
    pub fn new(platform: String, url: String, icon: String) -> Self {
        Self { platform, url, icon }
    }
}
