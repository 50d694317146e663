use axum::extract::State;
use axum::response::Html;
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::error::AppError;
use crate::responses::home::home;
use crate::DatabaseState;

pub mod artists;
pub mod shows;
pub mod venues;

const LATEST_LIMIT: u64 = 10;

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    search_term: String,
}

pub async fn index(State(state): State<DatabaseState>) -> Result<Html<String>, AppError> {
    render_home(&state.connection, &[]).await
}

/// Submissions that do not re-render their own form land on the home page.
pub(crate) async fn render_home(
    connection: &DatabaseConnection,
    flashes: &[String],
) -> Result<Html<String>, AppError> {
    let latest_venues = queries::get_latest_venues(connection, LATEST_LIMIT).await?;
    let latest_artists = queries::get_latest_artists(connection, LATEST_LIMIT).await?;
    Ok(home(flashes, &latest_venues, &latest_artists))
}
