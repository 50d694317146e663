use axum::response::Html;
use entities::{artist, venue};

use crate::responses::layout::{escape, page};

pub fn home(
    flashes: &[String],
    latest_venues: &[venue::Model],
    latest_artists: &[artist::Model],
) -> Html<String> {
    let venues: String = latest_venues
        .iter()
        .map(|venue| {
            format!(
                r#"<li><a href="/venues/{}">{}</a></li>"#,
                venue.id,
                escape(&venue.name)
            )
        })
        .collect();
    let artists: String = latest_artists
        .iter()
        .map(|artist| {
            format!(
                r#"<li><a href="/artists/{}">{}</a></li>"#,
                artist.id,
                escape(&artist.name)
            )
        })
        .collect();
    page(
        "Home",
        flashes,
        &format!(
            r#"<h1>Stagehand</h1>
<section><h2>Recently listed artists</h2><ul>{}</ul></section>
<section><h2>Recently listed venues</h2><ul>{}</ul></section>
<p><a href="/shows/create">Post a show</a></p>"#,
            artists, venues
        ),
    )
}
