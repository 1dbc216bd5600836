//! Account entity <-> model mapper

use folio_core::entities::Account;
use folio_core::value_objects::{AccountId, Handle};

use crate::models::AccountModel;

/// Convert AccountModel to Account entity
impl From<AccountModel> for Account {
    fn from(model: AccountModel) -> Self {
        Account {
            id: AccountId::new(model.id),
            email: model.email,
            full_name: model.full_name,
            handle: model.handle.map(Handle::new_unchecked),
            date_of_birth: model.date_of_birth,
            profile_complete: model.profile_complete,
            linked_identity_ids: model.linked_identity_ids,
            picture_url: model.picture_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
