mod collection;
mod record_store;

pub use collection::Binding;
pub use record_store::RecordStore;

/// Persisted document keys, one per entity collection. The key set is part
/// of the external storage layout and must stay stable across versions.
pub mod keys {
    pub const SITE_SETTINGS: &str = "portfolio_site_settings";
    pub const SOCIAL_LINKS: &str = "portfolio_social_links";
    pub const SKILLS: &str = "portfolio_skills";
    pub const EXPERIENCE: &str = "portfolio_experience";
    pub const EDUCATION: &str = "portfolio_education";
    pub const PROJECTS: &str = "portfolio_projects";
    pub const BLOG_POSTS: &str = "portfolio_blog_posts";
    pub const CONTACT_MESSAGES: &str = "portfolio_messages";
    pub const SERVICES: &str = "portfolio_services";
    pub const MEDIA_LIBRARY: &str = "portfolio_media";

    pub const ALL: [&str; 10] = [
        SITE_SETTINGS,
        SOCIAL_LINKS,
        SKILLS,
        EXPERIENCE,
        EDUCATION,
        PROJECTS,
        BLOG_POSTS,
        CONTACT_MESSAGES,
        SERVICES,
        MEDIA_LIBRARY,
    ];
}
