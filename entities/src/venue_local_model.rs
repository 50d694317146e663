use crate::venue::ActiveModel;
use sea_orm::{ActiveValue, DeriveIntoActiveModel};

/// Every venue column except the generated id. Inserts go through
/// `DeriveIntoActiveModel`, edits through [`VenueModel::into_update`].
#[derive(DeriveIntoActiveModel, PartialEq, Eq, Clone, Debug)]
pub struct VenueModel {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: String,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueModel {
    /// Active model that overwrites every column of venue `id`. The derived
    /// conversion leaves `None` fields unset, which would keep stale values.
    pub fn into_update(self, id: i32) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            address: ActiveValue::Set(self.address),
            phone: ActiveValue::Set(self.phone),
            genres: ActiveValue::Set(self.genres),
            website: ActiveValue::Set(self.website),
            image_link: ActiveValue::Set(self.image_link),
            facebook_link: ActiveValue::Set(self.facebook_link),
            seeking_talent: ActiveValue::Set(self.seeking_talent),
            seeking_description: ActiveValue::Set(self.seeking_description),
        }
    }
}
