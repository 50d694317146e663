use crate::show::ActiveModel;
use sea_orm::prelude::DateTime;
use sea_orm::{DeriveIntoActiveModel, FromQueryResult};
use serde::Serialize;

/// Which side of a show a record sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShowOwner {
    Artist,
    Venue,
}

#[derive(DeriveIntoActiveModel, PartialEq, Eq, Clone, Debug)]
pub struct ShowModel {
    pub date: DateTime,
    pub artist_id: i32,
    pub venue_id: i32,
}

/// A show joined with the names of both of its sides, for the show listing.
#[derive(FromQueryResult, PartialEq, Eq, Clone, Debug, Serialize)]
pub struct ShowListing {
    pub id: i32,
    pub date: DateTime,
    pub artist_id: i32,
    pub venue_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub venue_name: String,
}
