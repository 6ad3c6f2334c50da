use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::defaults;
use crate::entity::{
    BlogPost, ContactMessage, Education, Experience, MediaItem, Project, Record, Service,
    SiteSettings, Skill, SocialLink,
};
use crate::error::{FolioError, Result};
use crate::storage::{keys, RecordStore};

/// Binds one collection key to its bundled default. `load` reads the
/// current value (or the default), `replace` writes the whole value back.
/// There is no diffing or incremental write: every mutation is a full
/// re-serialize of the collection, last write wins.
pub struct Binding<'s, T> {
    store: &'s RecordStore,
    key: &'static str,
    default: fn() -> T,
}

impl<'s, T> Binding<'s, T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn load(&self) -> T {
        self.store.read(self.key, (self.default)())
    }

    pub fn replace(&self, value: &T) {
        self.store.write(self.key, value);
    }
}

impl<'s, T> Binding<'s, Vec<T>>
where
    T: Record + Clone + Serialize + DeserializeOwned,
{
    /// Append one record and write the collection back.
    pub fn insert(&self, item: T) {
        let mut items = self.load();
        items.push(item);
        self.replace(&items);
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.load().into_iter().find(|item| item.id() == id)
    }

    /// Mutate the record with the given id in place and write the collection
    /// back, returning the updated record.
    pub fn update_with(&self, id: &str, f: impl FnOnce(&mut T)) -> Result<T> {
        let mut items = self.load();
        let item = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| FolioError::EntityNotFound(id.to_string()))?;

        f(item);
        let updated = item.clone();
        self.replace(&items);
        Ok(updated)
    }

    /// Remove the record with the given id. Returns whether a record was
    /// removed; an unknown id leaves the collection untouched.
    pub fn remove(&self, id: &str) -> bool {
        let mut items = self.load();
        let Some(pos) = items.iter().position(|item| item.id() == id) else {
            return false;
        };
        items.remove(pos);
        self.replace(&items);
        true
    }
}

impl RecordStore {
    fn binding<T>(&self, key: &'static str, default: fn() -> T) -> Binding<'_, T> {
        Binding {
            store: self,
            key,
            default,
        }
    }

    pub fn site_settings(&self) -> Binding<'_, SiteSettings> {
        self.binding(keys::SITE_SETTINGS, defaults::site_settings)
    }

    pub fn social_links(&self) -> Binding<'_, Vec<SocialLink>> {
        self.binding(keys::SOCIAL_LINKS, defaults::social_links)
    }

    pub fn skills(&self) -> Binding<'_, Vec<Skill>> {
        self.binding(keys::SKILLS, defaults::skills)
    }

    pub fn experience(&self) -> Binding<'_, Vec<Experience>> {
        self.binding(keys::EXPERIENCE, defaults::experience)
    }

    pub fn education(&self) -> Binding<'_, Vec<Education>> {
        self.binding(keys::EDUCATION, defaults::education)
    }

    pub fn projects(&self) -> Binding<'_, Vec<Project>> {
        self.binding(keys::PROJECTS, defaults::projects)
    }

    pub fn blog_posts(&self) -> Binding<'_, Vec<BlogPost>> {
        self.binding(keys::BLOG_POSTS, defaults::blog_posts)
    }

    pub fn contact_messages(&self) -> Binding<'_, Vec<ContactMessage>> {
        self.binding(keys::CONTACT_MESSAGES, defaults::contact_messages)
    }

    pub fn services(&self) -> Binding<'_, Vec<Service>> {
        self.binding(keys::SERVICES, defaults::services)
    }

    pub fn media_library(&self) -> Binding<'_, Vec<MediaItem>> {
        self.binding(keys::MEDIA_LIBRARY, defaults::media_library)
    }
}
