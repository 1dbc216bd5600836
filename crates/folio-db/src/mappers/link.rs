//! Link entity <-> model mapper

use folio_core::entities::Link;
use folio_core::value_objects::AccountId;

use crate::models::LinkModel;

/// Convert LinkModel to Link entity
impl From<LinkModel> for Link {
    fn from(model: LinkModel) -> Self {
        Link {
            account_id: AccountId::new(model.account_id),
            link_id: model.link_id,
            title: model.title,
            url: model.url,
            position: model.position,
            is_deleted: model.is_deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
