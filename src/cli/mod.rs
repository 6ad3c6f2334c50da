mod commands;
mod handlers;

pub use commands::{
    AddCommand, AddEntity, Cli, Commands, MediaAction, MediaCommand, MessagesAction,
    MessagesCommand, SettingsAction, SettingsCommand, SocialAction, SocialCommand, UpdateCommand,
    UpdateEntity,
};
pub use handlers::{
    handle_add_education, handle_add_experience, handle_add_post, handle_add_project,
    handle_add_service, handle_add_skill, handle_contact, handle_delete, handle_get, handle_init,
    handle_list, handle_login, handle_logout, handle_media_clear, handle_media_delete,
    handle_media_list, handle_media_upload, handle_messages_delete, handle_messages_list,
    handle_messages_read, handle_reset, handle_settings_set, handle_settings_show,
    handle_social_add, handle_social_list, handle_social_remove, handle_update_education,
    handle_update_experience, handle_update_post, handle_update_project, handle_update_service,
    handle_update_skill,
};
