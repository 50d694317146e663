use axum::routing::{get, post};
use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::catch_panic::CatchPanicLayer;

use crate::endpoint_handlers::artists::{
    create_artist_form, create_artist_submission, delete_artist, edit_artist,
    edit_artist_submission, get_artist, get_artists, search_artists,
};
use crate::endpoint_handlers::shows::{create_show_form, create_show_submission, get_shows};
use crate::endpoint_handlers::venues::{
    create_venue_form, create_venue_submission, delete_venue, edit_venue, edit_venue_submission,
    get_venue, get_venues, search_venues,
};
use crate::error::{handle_panic, not_found};

pub mod config;
pub mod date_format;
pub mod endpoint_handlers;
pub mod error;
pub mod forms;
pub mod responses;
pub mod search;
pub mod show_counter;

#[derive(Clone)]
pub struct DatabaseState {
    pub connection: DatabaseConnection,
}

impl DatabaseState {
    pub fn new(connection: DatabaseConnection) -> Self {
        DatabaseState { connection }
    }
}

pub fn build_router(state: DatabaseState) -> Router {
    Router::new()
        .route("/", get(endpoint_handlers::index))
        // Venues
        .route("/venues", get(get_venues))
        .route("/venues/search", post(search_venues))
        .route(
            "/venues/create",
            get(create_venue_form).post(create_venue_submission),
        )
        .route("/venues/:venue_id", get(get_venue))
        .route("/venues/:venue_id/delete", post(delete_venue))
        .route(
            "/venues/:venue_id/edit",
            get(edit_venue).post(edit_venue_submission),
        )
        // Artists
        .route("/artists", get(get_artists))
        .route("/artists/search", post(search_artists))
        .route(
            "/artists/create",
            get(create_artist_form).post(create_artist_submission),
        )
        .route("/artists/:artist_id", get(get_artist))
        .route("/artists/:artist_id/delete", post(delete_artist))
        .route(
            "/artists/:artist_id/edit",
            get(edit_artist).post(edit_artist_submission),
        )
        // Shows
        .route("/shows", get(get_shows))
        .route(
            "/shows/create",
            get(create_show_form).post(create_show_submission),
        )
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
