use axum::response::Html;
use chrono::NaiveDateTime;
use entities::show_local_model::ShowListing;

use crate::date_format::{format_datetime, DateFormat};
use crate::forms::FormData;
use crate::responses::form_fields::{datetime_input, text_input};
use crate::responses::layout::{escape, image, page};
use crate::show_counter::{is_past, is_upcoming};

/// One show as seen from a venue or artist page: the other side of the
/// booking and when it starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowEntry {
    pub counterpart_id: i32,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailShows {
    pub upcoming: Vec<ShowEntry>,
    pub past: Vec<ShowEntry>,
}

impl DetailShows {
    /// Uses the same inclusive boundary as the counters, so a show starting
    /// right now is listed under both headings.
    pub fn split(entries: Vec<ShowEntry>, now: NaiveDateTime) -> Self {
        let mut shows = DetailShows::default();
        for entry in entries {
            if is_upcoming(entry.start_time, now) {
                shows.upcoming.push(entry.clone());
            }
            if is_past(entry.start_time, now) {
                shows.past.push(entry);
            }
        }
        shows
    }
}

/// Renders a heading plus the show cards. `link_prefix` is `/artists` on a
/// venue page and `/venues` on an artist page.
pub fn show_section(heading: &str, entries: &[ShowEntry], link_prefix: &str) -> String {
    let cards: String = entries
        .iter()
        .map(|entry| {
            format!(
                r#"<li>{image}<a href="{prefix}/{id}">{name}</a> <span class="date">{date}</span></li>"#,
                image = image(&entry.counterpart_image_link, &entry.counterpart_name),
                prefix = link_prefix,
                id = entry.counterpart_id,
                name = escape(&entry.counterpart_name),
                date = format_datetime(entry.start_time, DateFormat::Full),
            )
        })
        .collect();
    format!(
        r#"<section><h2>{count} {heading}</h2><ul>{cards}</ul></section>"#,
        count = entries.len(),
        heading = escape(heading),
        cards = cards,
    )
}

/// `total` counts every booked show, including ones whose artist or venue
/// is gone and which therefore have no listing row.
pub fn shows(listings: &[ShowListing], total: u64, format: DateFormat) -> Html<String> {
    let rows: String = listings
        .iter()
        .map(|show| {
            format!(
                r#"<li>{image}<a href="/artists/{artist_id}">{artist}</a> playing at <a href="/venues/{venue_id}">{venue}</a> <span class="date">{date}</span></li>"#,
                image = image(&show.artist_image_link, &show.artist_name),
                artist_id = show.artist_id,
                artist = escape(&show.artist_name),
                venue_id = show.venue_id,
                venue = escape(&show.venue_name),
                date = format_datetime(show.date, format),
            )
        })
        .collect();
    page(
        "Shows",
        &[],
        &format!(
            r#"<h1>Shows</h1><p class="count">Showing {listed} of {total} shows</p><ul class="shows">{rows}</ul>"#,
            listed = listings.len(),
        ),
    )
}

pub fn new_show_form(flashes: &[String], values: &FormData) -> Html<String> {
    page(
        "New Show",
        flashes,
        &format!(
            r#"<h1>List a new show</h1>
<form method="post" action="/shows/create">
{artist}
{venue}
{start}
<button type="submit">Create Show</button>
</form>"#,
            artist = text_input(values, "artist_id", "Artist ID"),
            venue = text_input(values, "venue_id", "Venue ID"),
            start = datetime_input(values, "start_time", "Start Time"),
        ),
    )
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;

    fn entry(name: &str, start_time: NaiveDateTime) -> ShowEntry {
        ShowEntry {
            counterpart_id: 1,
            counterpart_name: name.to_string(),
            counterpart_image_link: None,
            start_time,
        }
    }

    #[test]
    fn splits_on_inclusive_boundary() {
        let now = NaiveDate::from_ymd_opt(2035, 1, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        let shows = DetailShows::split(
            vec![
                entry("earlier", now - Duration::days(1)),
                entry("tonight", now),
                entry("later", now + Duration::days(1)),
            ],
            now,
        );
        let names = |entries: &[ShowEntry]| {
            entries
                .iter()
                .map(|e| e.counterpart_name.to_owned())
                .collect::<Vec<String>>()
        };
        assert_eq!(names(&shows.upcoming), vec!["tonight", "later"]);
        assert_eq!(names(&shows.past), vec!["earlier", "tonight"]);
    }
}
