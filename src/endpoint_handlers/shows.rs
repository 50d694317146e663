use axum::extract::{Query, State};
use axum::response::Html;
use axum::Form;
use entities::show_local_model::ShowModel;
use log::{error, info, warn};
use serde::Deserialize;

use crate::date_format::DateFormat;
use crate::endpoint_handlers::render_home;
use crate::error::AppError;
use crate::forms::{parse_show, FormData};
use crate::responses::show_pages;
use crate::DatabaseState;

#[derive(Deserialize)]
pub struct ShowsQuery {
    format: Option<String>,
}

/// `?format=full` or `?format=medium` picks the date preset. Anything else
/// falls back to medium.
pub async fn get_shows(
    State(state): State<DatabaseState>,
    Query(query): Query<ShowsQuery>,
) -> Result<Html<String>, AppError> {
    let format = match query.format.as_deref().map(str::parse::<DateFormat>) {
        Some(Ok(format)) => format,
        Some(Err(err)) => {
            warn!("{}, using medium", err);
            DateFormat::default()
        }
        None => DateFormat::default(),
    };
    let listings = queries::get_show_listings(&state.connection).await?;
    let total = queries::count_all_shows(&state.connection).await?;
    Ok(show_pages::shows(&listings, total, format))
}

pub async fn create_show_form() -> Html<String> {
    show_pages::new_show_form(&[], &FormData::default())
}

/// Both sides of the booking must exist before anything is written.
pub async fn create_show_submission(
    State(state): State<DatabaseState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let form = FormData::new(fields);
    let submission = match parse_show(&form) {
        Ok(submission) => submission,
        Err(err) => {
            warn!("Rejected show submission: {}", err);
            return Ok(show_pages::new_show_form(&[err.to_string()], &form));
        }
    };

    let artist = match submission.artist_id {
        Some(artist_id) => queries::get_artist_by_id(&state.connection, artist_id).await?,
        None => None,
    };
    let venue = match submission.venue_id {
        Some(venue_id) => queries::get_venue_by_id(&state.connection, venue_id).await?,
        None => None,
    };
    let mut flashes = Vec::new();
    if artist.is_none() {
        flashes.push("Artist ID not found".to_string());
    }
    if venue.is_none() {
        flashes.push("Venue ID not found".to_string());
    }
    let (Some(artist), Some(venue)) = (artist, venue) else {
        warn!(
            "Show references missing artist {:?} or venue {:?}",
            form.get("artist_id"),
            form.get("venue_id")
        );
        return Ok(show_pages::new_show_form(&flashes, &form));
    };

    let show = ShowModel {
        date: submission.start_time,
        artist_id: artist.id,
        venue_id: venue.id,
    };
    let flash = match queries::add_show(&state.connection, show).await {
        Ok(show_id) => {
            info!(
                "Listed show {}: {} at {} on {}",
                show_id, artist.name, venue.name, submission.start_time
            );
            "Show was successfully listed!".to_string()
        }
        Err(err) => {
            error!("Error inserting show: {}", err);
            "An error occurred. Show could not be listed.".to_string()
        }
    };
    render_home(&state.connection, &[flash]).await
}

