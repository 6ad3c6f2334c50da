use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about = "A local-first content manager for personal portfolio sites")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new folio project in the current directory
    Init,

    /// Log in as the site admin
    Login {
        /// Admin email
        #[arg(long)]
        email: String,

        /// Admin password
        #[arg(long)]
        password: String,
    },

    /// Discard the admin session
    Logout,

    /// Show or change site settings
    Settings(SettingsCommand),

    /// Add a new record (admin)
    Add(AddCommand),

    /// List records (project, post, skill, experience, education, service)
    List {
        /// Collection to list
        #[arg(value_name = "TYPE")]
        entity_type: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get a single record by id
    Get {
        /// Collection the record belongs to
        #[arg(value_name = "TYPE")]
        entity_type: String,

        /// Record id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a record (admin)
    Update(UpdateCommand),

    /// Delete a record by id (admin)
    Delete {
        /// Collection the record belongs to
        #[arg(value_name = "TYPE")]
        entity_type: String,

        /// Record id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Manage social links (admin for mutations)
    Social(SocialCommand),

    /// Submit the contact form
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,
    },

    /// Manage received contact messages (admin)
    Messages(MessagesCommand),

    /// Manage the media library (admin for mutations)
    Media(MediaCommand),

    /// Delete all stored content and fall back to the bundled defaults (admin)
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Show the current site settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change site settings; only the given fields are touched, but the
    /// whole settings document is rewritten
    Set {
        #[arg(long)]
        site_name: Option<String>,

        #[arg(long)]
        tagline: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        #[arg(long)]
        full_bio: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        cv_url: Option<String>,

        #[arg(long)]
        meta_title: Option<String>,

        #[arg(long)]
        meta_description: Option<String>,

        #[arg(long)]
        og_image: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct AddCommand {
    #[command(subcommand)]
    pub entity: AddEntity,
}

#[derive(Subcommand, Debug)]
pub enum AddEntity {
    /// Add a project
    Project {
        /// Project title
        title: String,

        /// Short description
        #[arg(long, default_value = "")]
        description: String,

        /// Long description for the detail page
        #[arg(long)]
        long_description: Option<String>,

        /// Project category
        #[arg(long, default_value = "Full-Stack Development")]
        category: String,

        /// Cover image URL
        #[arg(long)]
        image: Option<String>,

        /// Technology used (can be specified multiple times)
        #[arg(long = "tech")]
        tech: Vec<String>,

        /// Mark as featured
        #[arg(long)]
        featured: bool,

        /// Live deployment URL
        #[arg(long)]
        live_url: Option<String>,

        /// Repository URL
        #[arg(long)]
        github_url: Option<String>,

        /// Completion date (YYYY-MM)
        #[arg(long)]
        completed: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a blog post
    Post {
        /// Post title
        title: String,

        /// One-paragraph excerpt
        #[arg(long, default_value = "")]
        excerpt: String,

        /// Post category
        #[arg(long, default_value = "Web Development")]
        category: String,

        /// Cover image URL
        #[arg(long)]
        image: Option<String>,

        /// Author name (defaults to the site name)
        #[arg(long)]
        author: Option<String>,

        /// Publication date (YYYY-MM-DD)
        #[arg(long)]
        published: Option<String>,

        /// Tags (can be specified multiple times)
        #[arg(long = "tag", short = 't')]
        tags: Vec<String>,

        /// Estimated reading time in minutes
        #[arg(long, default_value_t = 5)]
        read_time: u32,

        /// Read the markdown body from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a skill
    Skill {
        /// Skill name
        name: String,

        /// Skill category (Frontend, Backend, ...)
        #[arg(long, default_value = "Other")]
        category: String,

        /// Proficiency from 0 to 100
        #[arg(long, default_value_t = 50)]
        level: u8,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a work-experience entry
    Experience {
        /// Position title
        title: String,

        /// Company name
        #[arg(long)]
        company: String,

        /// Location
        #[arg(long)]
        location: Option<String>,

        /// Start date (YYYY-MM)
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM); omit for a current position
        #[arg(long)]
        end: Option<String>,

        /// Mark as the current position
        #[arg(long)]
        current: bool,

        /// Role description
        #[arg(long)]
        description: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add an education entry
    Education {
        /// Degree title
        degree: String,

        /// Institution name
        #[arg(long)]
        institution: String,

        /// Location
        #[arg(long)]
        location: Option<String>,

        /// Start date (YYYY-MM)
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM)
        #[arg(long)]
        end: Option<String>,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a service
    Service {
        /// Service title
        title: String,

        /// Service description
        #[arg(long, default_value = "")]
        description: String,

        /// Icon name
        #[arg(long)]
        icon: Option<String>,

        /// Feature bullet (can be specified multiple times)
        #[arg(long = "feature")]
        features: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct UpdateCommand {
    #[command(subcommand)]
    pub entity: UpdateEntity,
}

#[derive(Subcommand, Debug)]
pub enum UpdateEntity {
    /// Update a project
    Project {
        /// Record id
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        long_description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        image: Option<String>,

        /// Replace the technology list (can be specified multiple times)
        #[arg(long = "tech")]
        tech: Vec<String>,

        #[arg(long)]
        featured: Option<bool>,

        #[arg(long)]
        live_url: Option<String>,

        #[arg(long)]
        github_url: Option<String>,

        #[arg(long)]
        completed: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a blog post
    Post {
        /// Record id
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        excerpt: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        image: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        published: Option<String>,

        /// Replace the tag list (can be specified multiple times)
        #[arg(long = "tag", short = 't')]
        tags: Vec<String>,

        #[arg(long)]
        read_time: Option<u32>,

        /// Replace the markdown body from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a skill
    Skill {
        /// Record id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        level: Option<u8>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a work-experience entry
    Experience {
        /// Record id
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        current: Option<bool>,

        #[arg(long)]
        description: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update an education entry
    Education {
        /// Record id
        id: String,

        #[arg(long)]
        degree: Option<String>,

        #[arg(long)]
        institution: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a service
    Service {
        /// Record id
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        icon: Option<String>,

        /// Replace the feature list (can be specified multiple times)
        #[arg(long = "feature")]
        features: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct SocialCommand {
    #[command(subcommand)]
    pub action: SocialAction,
}

#[derive(Subcommand, Debug)]
pub enum SocialAction {
    /// List social links
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Append a social link
    Add {
        /// Platform name (GitHub, LinkedIn, ...)
        platform: String,

        /// Profile URL
        url: String,

        /// Icon name (defaults to the lowercased platform)
        #[arg(long)]
        icon: Option<String>,
    },

    /// Remove a social link by its list position (0-based)
    Remove {
        /// Position in the list
        index: usize,
    },
}

#[derive(Args, Debug)]
pub struct MessagesCommand {
    #[command(subcommand)]
    pub action: MessagesAction,
}

#[derive(Subcommand, Debug)]
pub enum MessagesAction {
    /// List received messages
    List {
        /// Only show unread messages
        #[arg(long)]
        unread: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a message as read
    Read {
        /// Message id
        id: String,
    },

    /// Delete a message
    Delete {
        /// Message id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct MediaCommand {
    #[command(subcommand)]
    pub action: MediaAction,
}

#[derive(Subcommand, Debug)]
pub enum MediaAction {
    /// Upload an image into the media library
    Upload {
        /// Path to the image file
        path: std::path::PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List media library entries
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a media library entry
    Delete {
        /// Media item id
        id: String,
    },

    /// Empty the media library
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}
