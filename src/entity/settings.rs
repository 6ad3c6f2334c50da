use serde::{Deserialize, Serialize};

/// Site-wide settings. A singleton document: saving always overwrites the
/// whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_name: String,
    pub tagline: String,
    pub bio: String,
    pub full_bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub cv_url: String,
    pub meta_title: String,
    pub meta_description: String,
    pub og_image: String,
}
