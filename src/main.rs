use clap::Parser;
use folio::cli::{
    handle_add_education, handle_add_experience, handle_add_post, handle_add_project,
    handle_add_service, handle_add_skill, handle_contact, handle_delete, handle_get, handle_init,
    handle_list, handle_login, handle_logout, handle_media_clear, handle_media_delete,
    handle_media_list, handle_media_upload, handle_messages_delete, handle_messages_list,
    handle_messages_read, handle_reset, handle_settings_set, handle_settings_show,
    handle_social_add, handle_social_list, handle_social_remove, handle_update_education,
    handle_update_experience, handle_update_post, handle_update_project, handle_update_service,
    handle_update_skill, AddEntity, Cli, Commands, MediaAction, MessagesAction, SettingsAction,
    SocialAction, UpdateEntity,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::Login { email, password } => handle_login(email, password),
        Commands::Logout => handle_logout(),
        Commands::Settings(settings) => match settings.action {
            SettingsAction::Show { json } => handle_settings_show(json),
            SettingsAction::Set {
                site_name,
                tagline,
                bio,
                full_bio,
                email,
                phone,
                location,
                cv_url,
                meta_title,
                meta_description,
                og_image,
            } => handle_settings_set(
                site_name,
                tagline,
                bio,
                full_bio,
                email,
                phone,
                location,
                cv_url,
                meta_title,
                meta_description,
                og_image,
            ),
        },
        Commands::Add(add) => match add.entity {
            AddEntity::Project {
                title,
                description,
                long_description,
                category,
                image,
                tech,
                featured,
                live_url,
                github_url,
                completed,
                json,
            } => handle_add_project(
                title,
                description,
                long_description,
                category,
                image,
                tech,
                featured,
                live_url,
                github_url,
                completed,
                json,
            ),
            AddEntity::Post {
                title,
                excerpt,
                category,
                image,
                author,
                published,
                tags,
                read_time,
                stdin,
                json,
            } => handle_add_post(
                title, excerpt, category, image, author, published, tags, read_time, stdin, json,
            ),
            AddEntity::Skill {
                name,
                category,
                level,
                json,
            } => handle_add_skill(name, category, level, json),
            AddEntity::Experience {
                title,
                company,
                location,
                start,
                end,
                current,
                description,
                json,
            } => handle_add_experience(
                title, company, location, start, end, current, description, json,
            ),
            AddEntity::Education {
                degree,
                institution,
                location,
                start,
                end,
                description,
                json,
            } => handle_add_education(degree, institution, location, start, end, description, json),
            AddEntity::Service {
                title,
                description,
                icon,
                features,
                json,
            } => handle_add_service(title, description, icon, features, json),
        },
        Commands::List { entity_type, json } => handle_list(entity_type, json),
        Commands::Get {
            entity_type,
            id,
            json,
        } => handle_get(entity_type, id, json),
        Commands::Update(update) => match update.entity {
            UpdateEntity::Project {
                id,
                title,
                description,
                long_description,
                category,
                image,
                tech,
                featured,
                live_url,
                github_url,
                completed,
                json,
            } => handle_update_project(
                id,
                title,
                description,
                long_description,
                category,
                image,
                tech,
                featured,
                live_url,
                github_url,
                completed,
                json,
            ),
            UpdateEntity::Post {
                id,
                title,
                excerpt,
                category,
                image,
                author,
                published,
                tags,
                read_time,
                stdin,
                json,
            } => handle_update_post(
                id, title, excerpt, category, image, author, published, tags, read_time, stdin,
                json,
            ),
            UpdateEntity::Skill {
                id,
                name,
                category,
                level,
                json,
            } => handle_update_skill(id, name, category, level, json),
            UpdateEntity::Experience {
                id,
                title,
                company,
                location,
                start,
                end,
                current,
                description,
                json,
            } => handle_update_experience(
                id, title, company, location, start, end, current, description, json,
            ),
            UpdateEntity::Education {
                id,
                degree,
                institution,
                location,
                start,
                end,
                description,
                json,
            } => handle_update_education(
                id,
                degree,
                institution,
                location,
                start,
                end,
                description,
                json,
            ),
            UpdateEntity::Service {
                id,
                title,
                description,
                icon,
                features,
                json,
            } => handle_update_service(id, title, description, icon, features, json),
        },
        Commands::Delete {
            entity_type,
            id,
            force,
        } => handle_delete(entity_type, id, force),
        Commands::Social(social) => match social.action {
            SocialAction::List { json } => handle_social_list(json),
            SocialAction::Add {
                platform,
                url,
                icon,
            } => handle_social_add(platform, url, icon),
            SocialAction::Remove { index } => handle_social_remove(index),
        },
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => handle_contact(name, email, subject, message),
        Commands::Messages(messages) => match messages.action {
            MessagesAction::List { unread, json } => handle_messages_list(unread, json),
            MessagesAction::Read { id } => handle_messages_read(id),
            MessagesAction::Delete { id, force } => handle_messages_delete(id, force),
        },
        Commands::Media(media) => match media.action {
            MediaAction::Upload { path, json } => handle_media_upload(path, json),
            MediaAction::List { json } => handle_media_list(json),
            MediaAction::Delete { id } => handle_media_delete(id),
            MediaAction::Clear { force } => handle_media_clear(force),
        },
        Commands::Reset { force } => handle_reset(force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
