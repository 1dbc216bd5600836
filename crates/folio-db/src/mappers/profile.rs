//! Profile entity <-> model mapper

use folio_core::entities::Profile;
use folio_core::value_objects::{AccountId, Handle};

use crate::models::ProfileModel;

/// Convert ProfileModel to Profile entity
impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            handle: Handle::new_unchecked(model.handle),
            account_id: AccountId::new(model.account_id),
            full_name: model.full_name,
            title: model.title,
            bio: model.bio,
            skills: model.skills,
            social_links: model.social_links.0,
            projects: model.projects.0,
            avatar_key: model.avatar_key,
            avatar_url: model.avatar_url,
            resume_key: model.resume_key,
            resume_url: model.resume_url,
            email: model.email,
            phone: model.phone,
            show_email: model.show_email,
            show_phone: model.show_phone,
            show_resume: model.show_resume,
            favorite_color: model.favorite_color,
            date_of_birth: model.date_of_birth,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
