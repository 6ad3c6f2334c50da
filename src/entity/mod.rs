mod blog_post;
mod education;
mod experience;
mod media;
mod message;
mod project;
mod service;
mod settings;
mod skill;
mod social;

pub use blog_post::{BlogPost, BLOG_CATEGORIES};
pub use education::Education;
pub use experience::Experience;
pub use media::MediaItem;
pub use message::ContactMessage;
pub use project::{Project, PROJECT_CATEGORIES};
pub use service::Service;
pub use settings::SiteSettings;
pub use skill::Skill;
pub use social::SocialLink;

use uuid::Uuid;

/// A record that lives in a list collection and is addressed by id.
///
/// Ids are strings: bundled defaults carry short numeric ids ("1", "2")
/// while records created at runtime get UUIDv4 ids.
pub trait Record {
    fn id(&self) -> &str;
}

/// Generate a collision-resistant id for a new record.
pub fn record_id() -> String {
    Uuid::new_v4().to_string()
}
