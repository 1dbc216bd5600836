//! Entity to DTO mappers

use folio_core::{Account, Link, Profile};

use super::responses::{AccountResponse, LinkItem, LinkResponse, ProfileResponse};

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Build the owner or anonymous projection of a profile.
///
/// Contact fields: the owner always sees them when present; others only when
/// the matching `show_*` flag is set. The resume key is exposed only when
/// `show_resume` is set and a key exists. `resume_url` must already be
/// freshly derived by the caller.
pub fn project_profile(
    profile: &Profile,
    links: Vec<LinkItem>,
    is_owner: bool,
    resume_url: Option<String>,
) -> ProfileResponse {
    let email = if is_owner || profile.show_email {
        non_empty(&profile.email)
    } else {
        None
    };
    let phone = if is_owner || profile.show_phone {
        non_empty(&profile.phone)
    } else {
        None
    };
    let resume_key = if profile.show_resume {
        profile.resume_key.clone().filter(|k| !k.is_empty())
    } else {
        None
    };
    let date_of_birth = if is_owner {
        profile.date_of_birth.clone()
    } else {
        None
    };

    ProfileResponse {
        handle: profile.handle.as_str().to_string(),
        full_name: profile.full_name.clone(),
        title: profile.title.clone(),
        bio: profile.bio.clone(),
        skills: profile.skills.clone(),
        social_links: profile.social_links.clone(),
        projects: profile.projects.clone(),
        avatar_url: profile.avatar_url.clone(),
        resume_url,
        resume_key,
        email,
        phone,
        show_email: profile.show_email,
        show_phone: profile.show_phone,
        show_resume: profile.show_resume,
        favorite_color: profile.favorite_color.clone(),
        date_of_birth,
        is_owner,
        links,
        created_at: profile.created_at,
        updated_at: profile.updated_at,
    }
}

impl From<&Link> for LinkItem {
    fn from(link: &Link) -> Self {
        Self {
            title: link.title.clone(),
            url: link.url.clone(),
        }
    }
}

impl From<&Link> for LinkResponse {
    fn from(link: &Link) -> Self {
        Self {
            link_id: link.link_id.clone(),
            title: link.title.clone(),
            url: link.url.clone(),
            position: link.position,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            user_id: account.id.as_str().to_string(),
            username: account.handle.as_ref().map(|h| h.as_str().to_string()),
            email: account.email.clone(),
            full_name: account.full_name.clone(),
            profile_complete: account.profile_complete,
            date_of_birth: account.date_of_birth.clone(),
        }
    }
}
