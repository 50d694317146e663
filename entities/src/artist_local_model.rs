use crate::artist::ActiveModel;
use sea_orm::{ActiveValue, DeriveIntoActiveModel};

#[derive(DeriveIntoActiveModel, PartialEq, Eq, Clone, Debug)]
pub struct ArtistModel {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: String,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistModel {
    pub fn into_update(self, id: i32) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            phone: ActiveValue::Set(self.phone),
            genres: ActiveValue::Set(self.genres),
            image_link: ActiveValue::Set(self.image_link),
            website: ActiveValue::Set(self.website),
            facebook_link: ActiveValue::Set(self.facebook_link),
            seeking_venue: ActiveValue::Set(self.seeking_venue),
            seeking_description: ActiveValue::Set(self.seeking_description),
        }
    }
}
