use axum::extract::{Path, State};
use axum::response::Html;
use axum::Form;
use entities::show_local_model::ShowOwner;
use entities::venue;
use log::{error, info, warn};
use sea_orm::DatabaseConnection;

use crate::endpoint_handlers::{render_home, SearchForm};
use crate::error::{parse_id, AppError};
use crate::forms::{parse_venue, venue_values, FormData};
use crate::responses::search_page::search_results;
use crate::responses::show_pages::{DetailShows, ShowEntry};
use crate::responses::venue_pages::{self, group_by_area};
use crate::search::search;
use crate::show_counter::{self, ShowCounts};
use crate::DatabaseState;

pub async fn get_venues(State(state): State<DatabaseState>) -> Result<Html<String>, AppError> {
    render_venue_list(&state.connection, &[]).await
}

pub async fn search_venues(
    State(state): State<DatabaseState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    let results = search(&state.connection, ShowOwner::Venue, &form.search_term).await?;
    info!(
        "Venue search for {:?} returned {} result(s)",
        form.search_term, results.count
    );
    Ok(search_results(ShowOwner::Venue, &form.search_term, &results))
}

pub async fn get_venue(
    State(state): State<DatabaseState>,
    Path(venue_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let venue = find_venue(&state.connection, parse_id(&venue_id)?).await?;
    render_venue_detail(&state.connection, &venue, &[]).await
}

pub async fn create_venue_form() -> Html<String> {
    venue_pages::venue_form(&[], &FormData::default(), None)
}

pub async fn create_venue_submission(
    State(state): State<DatabaseState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let form = FormData::new(fields);
    let name = form.name();
    let venue = match parse_venue(&form) {
        Ok(venue) => venue,
        Err(err) => {
            warn!("Rejected venue submission {:?}: {}", name, err);
            let flashes = vec![
                err.to_string(),
                format!("An error occurred. Venue {} could not be listed.", name),
            ];
            return Ok(venue_pages::venue_form(&flashes, &form, None));
        }
    };
    let flash = match queries::add_venue(&state.connection, venue).await {
        Ok(venue_id) => {
            info!("Listed venue {} with id {}", name, venue_id);
            format!("Venue {} was successfully listed!", name)
        }
        Err(err) => {
            error!("Error inserting venue {}: {}", name, err);
            format!("An error occurred. Venue {} could not be listed.", name)
        }
    };
    render_home(&state.connection, &[flash]).await
}

/// Only the venue row goes away; its shows stay behind.
pub async fn delete_venue(
    State(state): State<DatabaseState>,
    Path(venue_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let venue_id = parse_id(&venue_id)?;
    let flash = match queries::delete_venue(&state.connection, venue_id).await {
        Ok(0) => {
            warn!("No venue with id {} to delete", venue_id);
            "Venue not deleted!".to_string()
        }
        Ok(_) => "Venue was successfully deleted!".to_string(),
        Err(err) => {
            error!("Error deleting venue {}: {}", venue_id, err);
            "Venue not deleted!".to_string()
        }
    };
    render_venue_list(&state.connection, &[flash]).await
}

pub async fn edit_venue(
    State(state): State<DatabaseState>,
    Path(venue_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let venue = find_venue(&state.connection, parse_id(&venue_id)?).await?;
    Ok(venue_pages::venue_form(
        &[],
        &venue_values(&venue),
        Some(venue.id),
    ))
}

pub async fn edit_venue_submission(
    State(state): State<DatabaseState>,
    Path(venue_id): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let existing = find_venue(&state.connection, parse_id(&venue_id)?).await?;
    let form = FormData::new(fields);
    let name = form.name();
    let venue = match parse_venue(&form) {
        Ok(venue) => venue,
        Err(err) => {
            warn!("Rejected edit of venue {}: {}", existing.id, err);
            let flashes = vec![
                err.to_string(),
                format!("An error occurred. Venue {} could not be updated.", name),
            ];
            return Ok(venue_pages::venue_form(&flashes, &form, Some(existing.id)));
        }
    };
    match queries::update_venue(&state.connection, existing.id, venue).await {
        Ok(updated) => {
            let flash = format!("Venue {} was successfully updated!", updated.name);
            render_venue_detail(&state.connection, &updated, &[flash]).await
        }
        Err(err) => {
            error!("Error updating venue {}: {}", existing.id, err);
            let flash = format!("An error occurred. Venue {} could not be updated.", name);
            render_venue_detail(&state.connection, &existing, &[flash]).await
        }
    }
}

async fn find_venue(
    connection: &DatabaseConnection,
    venue_id: i32,
) -> Result<venue::Model, AppError> {
    match queries::get_venue_by_id(connection, venue_id).await? {
        Some(venue) => Ok(venue),
        None => {
            warn!("Venue doesn't exist: {}", venue_id);
            Err(AppError::NotFound)
        }
    }
}

async fn render_venue_list(
    connection: &DatabaseConnection,
    flashes: &[String],
) -> Result<Html<String>, AppError> {
    let venues = queries::get_all_venues(connection).await?;
    Ok(venue_pages::venues(flashes, &group_by_area(venues)))
}

async fn render_venue_detail(
    connection: &DatabaseConnection,
    venue: &venue::Model,
    flashes: &[String],
) -> Result<Html<String>, AppError> {
    let entries: Vec<ShowEntry> = queries::get_shows_for_venue(connection, venue.id)
        .await?
        .into_iter()
        .map(|(show, artist)| match artist {
            Some(artist) => ShowEntry {
                counterpart_id: artist.id,
                counterpart_name: artist.name,
                counterpart_image_link: artist.image_link,
                start_time: show.date,
            },
            None => ShowEntry {
                counterpart_id: show.artist_id,
                counterpart_name: "Unknown artist".to_string(),
                counterpart_image_link: None,
                start_time: show.date,
            },
        })
        .collect();
    let now = show_counter::now();
    let counts = ShowCounts::tally(entries.iter().map(|entry| entry.start_time), now);
    let shows = DetailShows::split(entries, now);
    Ok(venue_pages::venue_detail(flashes, venue, &shows, counts))
}
