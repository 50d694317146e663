use axum::extract::{Path, State};
use axum::response::Html;
use axum::Form;
use entities::artist;
use entities::show_local_model::ShowOwner;
use log::{error, info, warn};
use sea_orm::DatabaseConnection;

use crate::endpoint_handlers::{render_home, SearchForm};
use crate::error::{parse_id, AppError};
use crate::forms::{artist_values, parse_artist, FormData};
use crate::responses::artist_pages;
use crate::responses::search_page::search_results;
use crate::responses::show_pages::{DetailShows, ShowEntry};
use crate::search::search;
use crate::show_counter::{self, ShowCounts};
use crate::DatabaseState;

pub async fn get_artists(State(state): State<DatabaseState>) -> Result<Html<String>, AppError> {
    render_artist_list(&state.connection, &[]).await
}

pub async fn search_artists(
    State(state): State<DatabaseState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    let results = search(&state.connection, ShowOwner::Artist, &form.search_term).await?;
    info!(
        "Artist search for {:?} returned {} result(s)",
        form.search_term, results.count
    );
    Ok(search_results(ShowOwner::Artist, &form.search_term, &results))
}

pub async fn get_artist(
    State(state): State<DatabaseState>,
    Path(artist_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let artist = find_artist(&state.connection, parse_id(&artist_id)?).await?;
    render_artist_detail(&state.connection, &artist, &[]).await
}

pub async fn create_artist_form() -> Html<String> {
    artist_pages::artist_form(&[], &FormData::default(), None)
}

#[axum::debug_handler]
pub async fn create_artist_submission(
    State(state): State<DatabaseState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let form = FormData::new(fields);
    let name = form.name();
    let artist = match parse_artist(&form) {
        Ok(artist) => artist,
        Err(err) => {
            warn!("Rejected artist submission {:?}: {}", name, err);
            let flashes = vec![
                err.to_string(),
                format!("An error occurred. Artist {} could not be listed.", name),
            ];
            return Ok(artist_pages::artist_form(&flashes, &form, None));
        }
    };
    let flash = match queries::add_artist(&state.connection, artist).await {
        Ok(artist_id) => {
            info!("Listed artist {} with id {}", name, artist_id);
            format!("Artist {} was successfully listed!", name)
        }
        Err(err) => {
            error!("Error inserting artist {}: {}", name, err);
            format!("An error occurred. Artist {} could not be listed.", name)
        }
    };
    render_home(&state.connection, &[flash]).await
}

/// Only the artist row goes away; its shows stay behind.
pub async fn delete_artist(
    State(state): State<DatabaseState>,
    Path(artist_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let artist_id = parse_id(&artist_id)?;
    let flash = match queries::delete_artist(&state.connection, artist_id).await {
        Ok(0) => {
            warn!("No artist with id {} to delete", artist_id);
            "Artist not deleted!".to_string()
        }
        Ok(_) => "Artist was successfully deleted!".to_string(),
        Err(err) => {
            error!("Error deleting artist {}: {}", artist_id, err);
            "Artist not deleted!".to_string()
        }
    };
    render_artist_list(&state.connection, &[flash]).await
}

pub async fn edit_artist(
    State(state): State<DatabaseState>,
    Path(artist_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let artist = find_artist(&state.connection, parse_id(&artist_id)?).await?;
    Ok(artist_pages::artist_form(
        &[],
        &artist_values(&artist),
        Some(artist.id),
    ))
}

pub async fn edit_artist_submission(
    State(state): State<DatabaseState>,
    Path(artist_id): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let existing = find_artist(&state.connection, parse_id(&artist_id)?).await?;
    let form = FormData::new(fields);
    let name = form.name();
    let artist = match parse_artist(&form) {
        Ok(artist) => artist,
        Err(err) => {
            warn!("Rejected edit of artist {}: {}", existing.id, err);
            let flashes = vec![
                err.to_string(),
                format!("An error occurred. Artist {} could not be updated.", name),
            ];
            return Ok(artist_pages::artist_form(&flashes, &form, Some(existing.id)));
        }
    };
    match queries::update_artist(&state.connection, existing.id, artist).await {
        Ok(updated) => {
            let flash = format!("Artist {} was successfully updated!", updated.name);
            render_artist_detail(&state.connection, &updated, &[flash]).await
        }
        Err(err) => {
            error!("Error updating artist {}: {}", existing.id, err);
            let flash = format!("An error occurred. Artist {} could not be updated.", name);
            render_artist_detail(&state.connection, &existing, &[flash]).await
        }
    }
}

async fn find_artist(
    connection: &DatabaseConnection,
    artist_id: i32,
) -> Result<artist::Model, AppError> {
    match queries::get_artist_by_id(connection, artist_id).await? {
        Some(artist) => Ok(artist),
        None => {
            warn!("Artist doesn't exist: {}", artist_id);
            Err(AppError::NotFound)
        }
    }
}

async fn render_artist_list(
    connection: &DatabaseConnection,
    flashes: &[String],
) -> Result<Html<String>, AppError> {
    let artists = queries::get_all_artists(connection).await?;
    Ok(artist_pages::artists(flashes, &artists))
}

async fn render_artist_detail(
    connection: &DatabaseConnection,
    artist: &artist::Model,
    flashes: &[String],
) -> Result<Html<String>, AppError> {
    let entries: Vec<ShowEntry> = queries::get_shows_for_artist(connection, artist.id)
        .await?
        .into_iter()
        .map(|(show, venue)| match venue {
            Some(venue) => ShowEntry {
                counterpart_id: venue.id,
                counterpart_name: venue.name,
                counterpart_image_link: venue.image_link,
                start_time: show.date,
            },
            None => ShowEntry {
                counterpart_id: show.venue_id,
                counterpart_name: "Unknown venue".to_string(),
                counterpart_image_link: None,
                start_time: show.date,
            },
        })
        .collect();
    let now = show_counter::now();
    let counts = ShowCounts::tally(entries.iter().map(|entry| entry.start_time), now);
    let shows = DetailShows::split(entries, now);
    Ok(artist_pages::artist_detail(flashes, artist, &shows, counts))
}
