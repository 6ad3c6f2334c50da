use std::env;
use std::io::{self, Read as _};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::entity::{
    BlogPost, ContactMessage, Education, Experience, Project, Record, Service, Skill, SocialLink,
};
use crate::error::{FolioError, Result};
use crate::storage::{Binding, RecordStore};
use crate::{media, session};

/// Find the project root by looking for .folio/ or .git/
fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(".folio").exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

fn open_store() -> Result<RecordStore> {
    RecordStore::open(&find_project_root())
}

/// Interactive yes/no gate used before destructive operations. Without
/// --force a non-tty context aborts instead of guessing.
fn confirm(prompt: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }

    eprintln!("{} [y/N] ", prompt);

    if atty::is(atty::Stream::Stdin) {
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().eq_ignore_ascii_case("y"))
    } else {
        Err(FolioError::Storage(
            "Use --force to delete in non-interactive mode".to_string(),
        ))
    }
}

fn short_id(id: &str) -> &str {
    &id[..7.min(id.len())]
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FolioError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;

    let _store = RecordStore::init(&root)?;

    println!("Initialized folio project in {}", root.display());
    println!("Content starts from the bundled defaults; run 'folio login' to edit.");

    Ok(())
}

// ========== Session ==========

pub fn handle_login(email: String, password: String) -> Result<()> {
    let store = open_store()?;
    let s = session::login(&store, &email, &password)?;

    println!("Logged in as {} (token {})", s.email, short_id(&s.token));
    Ok(())
}

pub fn handle_logout() -> Result<()> {
    let store = open_store()?;
    session::logout(&store);

    println!("Logged out.");
    Ok(())
}

// ========== Settings ==========

pub fn handle_settings_show(json: bool) -> Result<()> {
    let store = open_store()?;
    let settings = store.site_settings().load();

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        println!("{} - {}", settings.site_name, settings.tagline);
        println!("Email:    {}", settings.email);
        println!("Phone:    {}", settings.phone);
        println!("Location: {}", settings.location);
        println!("CV:       {}", settings.cv_url);
        println!("\n{}", settings.bio);
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_settings_set(
    site_name: Option<String>,
    tagline: Option<String>,
    bio: Option<String>,
    full_bio: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    location: Option<String>,
    cv_url: Option<String>,
    meta_title: Option<String>,
    meta_description: Option<String>,
    og_image: Option<String>,
) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    // The settings document is a singleton: load, patch, write back whole.
    let mut settings = store.site_settings().load();

    if let Some(v) = site_name {
        settings.site_name = v;
    }
    if let Some(v) = tagline {
        settings.tagline = v;
    }
    if let Some(v) = bio {
        settings.bio = v;
    }
    if let Some(v) = full_bio {
        settings.full_bio = v;
    }
    if let Some(v) = email {
        settings.email = v;
    }
    if let Some(v) = phone {
        settings.phone = v;
    }
    if let Some(v) = location {
        settings.location = v;
    }
    if let Some(v) = cv_url {
        settings.cv_url = v;
    }
    if let Some(v) = meta_title {
        settings.meta_title = v;
    }
    if let Some(v) = meta_description {
        settings.meta_description = v;
    }
    if let Some(v) = og_image {
        settings.og_image = v;
    }

    store.site_settings().replace(&settings);
    println!("Saved settings for '{}'", settings.site_name);

    Ok(())
}

// ========== Add ==========

#[allow(clippy::too_many_arguments)]
pub fn handle_add_project(
    title: String,
    description: String,
    long_description: Option<String>,
    category: String,
    image: Option<String>,
    tech: Vec<String>,
    featured: bool,
    live_url: Option<String>,
    github_url: Option<String>,
    completed: Option<String>,
    json: bool,
) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    require_non_empty("title", &title)?;

    let mut project = Project::new(title, description, category);
    project.long_description = long_description.unwrap_or_default();
    project.image = image.unwrap_or_default();
    project.tech_stack = tech;
    project.featured = featured;
    project.live_url = live_url;
    project.github_url = github_url;
    project.completed_date = completed.unwrap_or_default();

    store.projects().insert(project.clone());

    if json {
        println!("{}", serde_json::to_string_pretty(&project)?);
    } else {
        println!(
            "Created project ({}) - {}",
            short_id(&project.id),
            project.title
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_add_post(
    title: String,
    excerpt: String,
    category: String,
    image: Option<String>,
    author: Option<String>,
    published: Option<String>,
    tags: Vec<String>,
    read_time: u32,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    require_non_empty("title", &title)?;

    let mut post = BlogPost::new(title, category);
    post.excerpt = excerpt;
    post.image = image.unwrap_or_default();
    post.author = author.unwrap_or_else(|| store.site_settings().load().site_name);
    post.published_date = published.unwrap_or_else(|| {
        chrono::Utc::now().format("%Y-%m-%d").to_string()
    });
    post.tags = tags;
    post.read_time = read_time;

    if stdin {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        post.content = content;
    }

    store.blog_posts().insert(post.clone());

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        println!("Created post ({}) - {}", short_id(&post.id), post.title);
    }

    Ok(())
}

pub fn handle_add_skill(name: String, category: String, level: u8, json: bool) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    require_non_empty("name", &name)?;

    let skill = Skill::new(name, category, level);
    store.skills().insert(skill.clone());

    if json {
        println!("{}", serde_json::to_string_pretty(&skill)?);
    } else {
        println!(
            "Created skill ({}) - {} [{} {}]",
            short_id(&skill.id),
            skill.name,
            skill.category,
            skill.level
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_add_experience(
    title: String,
    company: String,
    location: Option<String>,
    start: String,
    end: Option<String>,
    current: bool,
    description: Option<String>,
    json: bool,
) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    require_non_empty("title", &title)?;
    require_non_empty("company", &company)?;

    let mut entry = Experience::new(title, company, start);
    entry.location = location.unwrap_or_default();
    entry.end_date = end;
    entry.current = current || entry.end_date.is_none();
    entry.description = description.unwrap_or_default();

    store.experience().insert(entry.clone());

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        println!(
            "Created experience ({}) - {} at {}",
            short_id(&entry.id),
            entry.title,
            entry.company
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_add_education(
    degree: String,
    institution: String,
    location: Option<String>,
    start: Option<String>,
    end: Option<String>,
    description: Option<String>,
    json: bool,
) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    require_non_empty("degree", &degree)?;
    require_non_empty("institution", &institution)?;

    let mut entry = Education::new(degree, institution);
    entry.location = location.unwrap_or_default();
    entry.start_date = start.unwrap_or_default();
    entry.end_date = end.unwrap_or_default();
    entry.description = description.unwrap_or_default();

    store.education().insert(entry.clone());

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        println!(
            "Created education ({}) - {}, {}",
            short_id(&entry.id),
            entry.degree,
            entry.institution
        );
    }

    Ok(())
}

pub fn handle_add_service(
    title: String,
    description: String,
    icon: Option<String>,
    features: Vec<String>,
    json: bool,
) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    require_non_empty("title", &title)?;

    let mut service = Service::new(title, description);
    service.icon = icon.unwrap_or_default();
    service.features = features;

    store.services().insert(service.clone());

    if json {
        println!("{}", serde_json::to_string_pretty(&service)?);
    } else {
        println!(
            "Created service ({}) - {}",
            short_id(&service.id),
            service.title
        );
    }

    Ok(())
}

// ========== List / Get / Delete ==========

pub fn handle_list(entity_type: String, json: bool) -> Result<()> {
    let store = open_store()?;

    match entity_type.as_str() {
        "project" | "projects" => {
            let projects = store.projects().load();
            if json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else if projects.is_empty() {
                println!("No projects found.");
            } else {
                println!("Projects:\n");
                for p in projects {
                    let featured = if p.featured { " *" } else { "" };
                    println!(
                        "  ({}) [{}]{} {}",
                        short_id(&p.id),
                        p.category,
                        featured,
                        p.title
                    );
                    if !p.tech_stack.is_empty() {
                        println!("      tech: {}", p.tech_stack.join(", "));
                    }
                }
            }
        }
        "post" | "posts" => {
            let posts = store.blog_posts().load();
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else if posts.is_empty() {
                println!("No posts found.");
            } else {
                println!("Posts:\n");
                for p in posts {
                    println!(
                        "  ({}) [{}] {} ({} min read, {})",
                        short_id(&p.id),
                        p.category,
                        p.title,
                        p.read_time,
                        p.published_date
                    );
                }
            }
        }
        "skill" | "skills" => {
            let skills = store.skills().load();
            if json {
                println!("{}", serde_json::to_string_pretty(&skills)?);
            } else if skills.is_empty() {
                println!("No skills found.");
            } else {
                println!("Skills:\n");
                for s in skills {
                    println!(
                        "  ({}) [{}] {} - {}",
                        short_id(&s.id),
                        s.category,
                        s.name,
                        s.level
                    );
                }
            }
        }
        "experience" => {
            let entries = store.experience().load();
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No experience entries found.");
            } else {
                println!("Experience:\n");
                for e in entries {
                    let until = if e.current {
                        "present".to_string()
                    } else {
                        e.end_date.clone().unwrap_or_default()
                    };
                    println!(
                        "  ({}) {} at {} ({} - {})",
                        short_id(&e.id),
                        e.title,
                        e.company,
                        e.start_date,
                        until
                    );
                }
            }
        }
        "education" => {
            let entries = store.education().load();
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No education entries found.");
            } else {
                println!("Education:\n");
                for e in entries {
                    println!(
                        "  ({}) {}, {} ({} - {})",
                        short_id(&e.id),
                        e.degree,
                        e.institution,
                        e.start_date,
                        e.end_date
                    );
                }
            }
        }
        "service" | "services" => {
            let services = store.services().load();
            if json {
                println!("{}", serde_json::to_string_pretty(&services)?);
            } else if services.is_empty() {
                println!("No services found.");
            } else {
                println!("Services:\n");
                for s in services {
                    println!("  ({}) {} - {}", short_id(&s.id), s.title, s.description);
                }
            }
        }
        other => {
            return Err(FolioError::InvalidEntityType(format!(
                "{} (valid: project, post, skill, experience, education, service)",
                other
            )));
        }
    }

    Ok(())
}

pub fn handle_get(entity_type: String, id: String, json: bool) -> Result<()> {
    let store = open_store()?;

    match entity_type.as_str() {
        "project" | "projects" => {
            let project = store
                .projects()
                .find(&id)
                .ok_or_else(|| FolioError::EntityNotFound(id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&project)?);
            } else {
                println!("Project {} - {}", project.id, project.title);
                println!("Category: {}", project.category);
                println!("Featured: {}", project.featured);
                if !project.tech_stack.is_empty() {
                    println!("Tech: {}", project.tech_stack.join(", "));
                }
                if let Some(ref url) = project.live_url {
                    println!("Live: {}", url);
                }
                if let Some(ref url) = project.github_url {
                    println!("Repo: {}", url);
                }
                println!("\n{}", project.description);
                if !project.long_description.is_empty() {
                    println!("\n{}", project.long_description);
                }
            }
        }
        "post" | "posts" => {
            let post = store
                .blog_posts()
                .find(&id)
                .ok_or_else(|| FolioError::EntityNotFound(id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&post)?);
            } else {
                println!("Post {} - {}", post.id, post.title);
                println!(
                    "By {} on {} ({} min read)",
                    post.author, post.published_date, post.read_time
                );
                if !post.tags.is_empty() {
                    println!("Tags: {}", post.tags.join(", "));
                }
                println!("\n{}", post.excerpt);
                if !post.content.is_empty() {
                    println!("\n{}", post.content);
                }
            }
        }
        "skill" | "skills" => {
            let skill = store
                .skills()
                .find(&id)
                .ok_or_else(|| FolioError::EntityNotFound(id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&skill)?);
            } else {
                println!(
                    "Skill {} - {} [{}] level {}",
                    skill.id, skill.name, skill.category, skill.level
                );
            }
        }
        "experience" => {
            let entry = store
                .experience()
                .find(&id)
                .ok_or_else(|| FolioError::EntityNotFound(id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                println!("Experience {} - {} at {}", entry.id, entry.title, entry.company);
                println!("\n{}", entry.description);
            }
        }
        "education" => {
            let entry = store
                .education()
                .find(&id)
                .ok_or_else(|| FolioError::EntityNotFound(id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                println!(
                    "Education {} - {}, {}",
                    entry.id, entry.degree, entry.institution
                );
                println!("\n{}", entry.description);
            }
        }
        "service" | "services" => {
            let service = store
                .services()
                .find(&id)
                .ok_or_else(|| FolioError::EntityNotFound(id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&service)?);
            } else {
                println!("Service {} - {}", service.id, service.title);
                println!("{}", service.description);
                for feature in &service.features {
                    println!("  - {}", feature);
                }
            }
        }
        other => {
            return Err(FolioError::InvalidEntityType(format!(
                "{} (valid: project, post, skill, experience, education, service)",
                other
            )));
        }
    }

    Ok(())
}

fn delete_record<T, F>(
    binding: Binding<'_, Vec<T>>,
    kind: &str,
    id: &str,
    force: bool,
    label: F,
) -> Result<()>
where
    T: Record + Clone + Serialize + DeserializeOwned,
    F: Fn(&T) -> String,
{
    let item = binding
        .find(id)
        .ok_or_else(|| FolioError::EntityNotFound(id.to_string()))?;

    let prompt = format!("Delete {} ({}) - {}?", kind, short_id(id), label(&item));
    if !confirm(&prompt, force)? {
        println!("Cancelled.");
        return Ok(());
    }

    binding.remove(id);
    println!("Deleted {} ({}) - {}", kind, short_id(id), label(&item));
    Ok(())
}

pub fn handle_delete(entity_type: String, id: String, force: bool) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    match entity_type.as_str() {
        "project" | "projects" => {
            delete_record(store.projects(), "project", &id, force, |p| p.title.clone())
        }
        "post" | "posts" => {
            delete_record(store.blog_posts(), "post", &id, force, |p| p.title.clone())
        }
        "skill" | "skills" => {
            delete_record(store.skills(), "skill", &id, force, |s| s.name.clone())
        }
        "experience" => delete_record(store.experience(), "experience", &id, force, |e| {
            e.title.clone()
        }),
        "education" => delete_record(store.education(), "education", &id, force, |e| {
            e.degree.clone()
        }),
        "service" | "services" => {
            delete_record(store.services(), "service", &id, force, |s| s.title.clone())
        }
        other => Err(FolioError::InvalidEntityType(format!(
            "{} (valid: project, post, skill, experience, education, service)",
            other
        ))),
    }
}

// ========== Update ==========

#[allow(clippy::too_many_arguments)]
pub fn handle_update_project(
    id: String,
    title: Option<String>,
    description: Option<String>,
    long_description: Option<String>,
    category: Option<String>,
    image: Option<String>,
    tech: Vec<String>,
    featured: Option<bool>,
    live_url: Option<String>,
    github_url: Option<String>,
    completed: Option<String>,
    json: bool,
) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    let updated = store.projects().update_with(&id, |p| {
        if let Some(v) = title {
            p.title = v;
        }
        if let Some(v) = description {
            p.description = v;
        }
        if let Some(v) = long_description {
            p.long_description = v;
        }
        if let Some(v) = category {
            p.category = v;
        }
        if let Some(v) = image {
            p.image = v;
        }
        if !tech.is_empty() {
            p.tech_stack = tech;
        }
        if let Some(v) = featured {
            p.featured = v;
        }
        if let Some(v) = live_url {
            p.live_url = Some(v);
        }
        if let Some(v) = github_url {
            p.github_url = Some(v);
        }
        if let Some(v) = completed {
            p.completed_date = v;
        }
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!(
            "Updated project ({}) - {}",
            short_id(&updated.id),
            updated.title
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_update_post(
    id: String,
    title: Option<String>,
    excerpt: Option<String>,
    category: Option<String>,
    image: Option<String>,
    author: Option<String>,
    published: Option<String>,
    tags: Vec<String>,
    read_time: Option<u32>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    let content = if stdin {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Some(buf)
    } else {
        None
    };

    let updated = store.blog_posts().update_with(&id, |p| {
        if let Some(v) = title {
            p.title = v;
        }
        if let Some(v) = excerpt {
            p.excerpt = v;
        }
        if let Some(v) = category {
            p.category = v;
        }
        if let Some(v) = image {
            p.image = v;
        }
        if let Some(v) = author {
            p.author = v;
        }
        if let Some(v) = published {
            p.published_date = v;
        }
        if !tags.is_empty() {
            p.tags = tags;
        }
        if let Some(v) = read_time {
            p.read_time = v;
        }
        if let Some(v) = content {
            p.content = v;
        }
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!("Updated post ({}) - {}", short_id(&updated.id), updated.title);
    }

    Ok(())
}

pub fn handle_update_skill(
    id: String,
    name: Option<String>,
    category: Option<String>,
    level: Option<u8>,
    json: bool,
) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    let updated = store.skills().update_with(&id, |s| {
        if let Some(v) = name {
            s.name = v;
        }
        if let Some(v) = category {
            s.category = v;
        }
        if let Some(v) = level {
            s.level = v.min(100);
        }
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!(
            "Updated skill ({}) - {} [{} {}]",
            short_id(&updated.id),
            updated.name,
            updated.category,
            updated.level
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_update_experience(
    id: String,
    title: Option<String>,
    company: Option<String>,
    location: Option<String>,
    start: Option<String>,
    end: Option<String>,
    current: Option<bool>,
    description: Option<String>,
    json: bool,
) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    let updated = store.experience().update_with(&id, |e| {
        if let Some(v) = title {
            e.title = v;
        }
        if let Some(v) = company {
            e.company = v;
        }
        if let Some(v) = location {
            e.location = v;
        }
        if let Some(v) = start {
            e.start_date = v;
        }
        if let Some(v) = end {
            e.end_date = Some(v);
            e.current = false;
        }
        if let Some(v) = current {
            e.current = v;
            if v {
                e.end_date = None;
            }
        }
        if let Some(v) = description {
            e.description = v;
        }
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!(
            "Updated experience ({}) - {} at {}",
            short_id(&updated.id),
            updated.title,
            updated.company
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_update_education(
    id: String,
    degree: Option<String>,
    institution: Option<String>,
    location: Option<String>,
    start: Option<String>,
    end: Option<String>,
    description: Option<String>,
    json: bool,
) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    let updated = store.education().update_with(&id, |e| {
        if let Some(v) = degree {
            e.degree = v;
        }
        if let Some(v) = institution {
            e.institution = v;
        }
        if let Some(v) = location {
            e.location = v;
        }
        if let Some(v) = start {
            e.start_date = v;
        }
        if let Some(v) = end {
            e.end_date = v;
        }
        if let Some(v) = description {
            e.description = v;
        }
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!(
            "Updated education ({}) - {}, {}",
            short_id(&updated.id),
            updated.degree,
            updated.institution
        );
    }

    Ok(())
}

pub fn handle_update_service(
    id: String,
    title: Option<String>,
    description: Option<String>,
    icon: Option<String>,
    features: Vec<String>,
    json: bool,
) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    let updated = store.services().update_with(&id, |s| {
        if let Some(v) = title {
            s.title = v;
        }
        if let Some(v) = description {
            s.description = v;
        }
        if let Some(v) = icon {
            s.icon = v;
        }
        if !features.is_empty() {
            s.features = features;
        }
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!(
            "Updated service ({}) - {}",
            short_id(&updated.id),
            updated.title
        );
    }

    Ok(())
}

// ========== Social links ==========

pub fn handle_social_list(json: bool) -> Result<()> {
    let store = open_store()?;
    let links = store.social_links().load();

    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
    } else if links.is_empty() {
        println!("No social links found.");
    } else {
        println!("Social links:\n");
        for (i, link) in links.iter().enumerate() {
            println!("  {} [{}] {} -> {}", i, link.icon, link.platform, link.url);
        }
    }

    Ok(())
}

pub fn handle_social_add(platform: String, url: String, icon: Option<String>) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    require_non_empty("platform", &platform)?;
    require_non_empty("url", &url)?;

    let icon = icon.unwrap_or_else(|| platform.to_lowercase());
    let link = SocialLink::new(platform, url, icon);

    let mut links = store.social_links().load();
    links.push(link.clone());
    store.social_links().replace(&links);

    println!("Added social link {} -> {}", link.platform, link.url);
    Ok(())
}

pub fn handle_social_remove(index: usize) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    let mut links = store.social_links().load();
    if index >= links.len() {
        return Err(FolioError::EntityNotFound(format!(
            "social link at index {}",
            index
        )));
    }

    let removed = links.remove(index);
    store.social_links().replace(&links);

    println!("Removed social link {} -> {}", removed.platform, removed.url);
    Ok(())
}

// ========== Contact form ==========

pub fn handle_contact(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<()> {
    let _store = open_store()?;

    require_non_empty("name", &name)?;
    require_non_empty("email", &email)?;
    require_non_empty("subject", &subject)?;
    require_non_empty("message", &message)?;

    // Submissions are acknowledged and dropped: there is no delivery
    // backend, and the submit path never writes into the stored messages
    // collection. The admin inbox only holds seeded/managed records.
    let submission = ContactMessage::new(name, email, subject, message);
    tracing::info!(
        from = %submission.email,
        subject = %submission.subject,
        "contact form submitted"
    );

    println!(
        "Thanks {}, your message has been sent. I'll get back to you soon!",
        submission.name
    );

    Ok(())
}

// ========== Messages ==========

pub fn handle_messages_list(unread: bool, json: bool) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    let mut messages = store.contact_messages().load();
    if unread {
        messages.retain(|m| !m.read);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
    } else if messages.is_empty() {
        println!("No messages.");
    } else {
        println!("Messages:\n");
        for m in messages {
            let marker = if m.read { " " } else { "*" };
            println!(
                "  {} ({}) {} <{}> - {}",
                marker,
                short_id(&m.id),
                m.name,
                m.email,
                m.subject
            );
        }
    }

    Ok(())
}

pub fn handle_messages_read(id: String) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    let updated = store.contact_messages().update_with(&id, |m| m.read = true)?;
    println!("Marked '{}' as read.", updated.subject);

    Ok(())
}

pub fn handle_messages_delete(id: String, force: bool) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    delete_record(store.contact_messages(), "message", &id, force, |m| {
        m.subject.clone()
    })
}

// ========== Media ==========

pub fn handle_media_upload(path: PathBuf, json: bool) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    check_upload_path(&path)?;
    let item = media::upload_image(&store, &path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!(
            "Uploaded {} ({}, {} bytes)",
            item.name,
            short_id(&item.id),
            item.size
        );
    }

    Ok(())
}

pub fn handle_media_list(json: bool) -> Result<()> {
    let store = open_store()?;
    let items = store.media_library().load();

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("Media library is empty.");
    } else {
        println!("Media library:\n");
        for item in items {
            println!(
                "  ({}) {} - {} bytes, uploaded {}",
                short_id(&item.id),
                item.name,
                item.size,
                item.uploaded_at.format("%Y-%m-%d %H:%M")
            );
        }
    }

    Ok(())
}

pub fn handle_media_delete(id: String) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    if !store.media_library().remove(&id) {
        return Err(FolioError::EntityNotFound(id));
    }

    println!("Deleted media item {}", short_id(&id));
    Ok(())
}

pub fn handle_media_clear(force: bool) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    if !confirm("Empty the media library?", force)? {
        println!("Cancelled.");
        return Ok(());
    }

    store.media_library().replace(&Vec::new());
    println!("Media library cleared.");
    Ok(())
}

// ========== Reset ==========

pub fn handle_reset(force: bool) -> Result<()> {
    let store = open_store()?;
    session::require(&store)?;

    if !confirm("Delete all stored content and revert to defaults?", force)? {
        println!("Cancelled.");
        return Ok(());
    }

    store.clear_all();
    println!("All content cleared; collections revert to the bundled defaults.");
    Ok(())
}

/// Validate the target path exists before handing it to the uploader, so a
/// mistyped path gives a clean message rather than a raw IO error.
pub fn check_upload_path(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(FolioError::Upload(format!(
            "No such file: {}",
            path.display()
        )));
    }
    Ok(())
}
