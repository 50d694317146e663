use axum::response::Html;
use entities::venue;

use crate::forms::{split_genres, FormData};
use crate::responses::form_fields::{checkbox, genre_select, state_select, text_input};
use crate::responses::layout::{escape, external_link, genre_badges, image, page};
use crate::responses::show_pages::{show_section, DetailShows};
use crate::show_counter::ShowCounts;

/// Venues sharing one "City, State" heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VenueArea {
    pub area: String,
    pub venues: Vec<venue::Model>,
}

/// Groups venues by "City, State", areas in the order they are first seen.
pub fn group_by_area(venues: Vec<venue::Model>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();
    for venue in venues {
        let area = format!("{}, {}", venue.city, venue.state);
        match areas.iter_mut().find(|existing| existing.area == area) {
            Some(existing) => existing.venues.push(venue),
            None => areas.push(VenueArea {
                area,
                venues: vec![venue],
            }),
        }
    }
    areas
}

pub fn venues(flashes: &[String], areas: &[VenueArea]) -> Html<String> {
    let sections: String = areas
        .iter()
        .map(|area| {
            let items: String = area
                .venues
                .iter()
                .map(|venue| {
                    format!(
                        r#"<li><a href="/venues/{}">{}</a></li>"#,
                        venue.id,
                        escape(&venue.name)
                    )
                })
                .collect();
            format!(
                r#"<section><h3>{}</h3><ul>{}</ul></section>"#,
                escape(&area.area),
                items
            )
        })
        .collect();
    page(
        "Venues",
        flashes,
        &format!(
            r#"<h1>Venues</h1><a href="/venues/create">List a new venue</a>{}"#,
            sections
        ),
    )
}

pub fn venue_detail(
    flashes: &[String],
    venue: &venue::Model,
    shows: &DetailShows,
    counts: ShowCounts,
) -> Html<String> {
    let seeking = if venue.seeking_talent {
        format!(
            r#"<div class="seeking"><p>Currently seeking talent</p><p>{}</p></div>"#,
            escape(venue.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking talent</p>"#.to_string()
    };
    let body = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
<div class="genres">{genres}</div>
<p>{address}</p>
<p>{city}, {state}</p>
<p>{phone}</p>
{website}
{facebook}
{seeking}
{image}
<p><a href="/venues/{id}/edit">Edit</a></p>
<form method="post" action="/venues/{id}/delete"><button type="submit">Delete</button></form>
<p>{upcoming_count} upcoming, {past_count} past</p>
{upcoming}
{past}"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_badges(&split_genres(&venue.genres)),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape(venue.phone.as_deref().unwrap_or("No phone")),
        website = external_link("Website", &venue.website),
        facebook = external_link("Facebook", &venue.facebook_link),
        seeking = seeking,
        image = image(&venue.image_link, &venue.name),
        upcoming_count = counts.upcoming,
        past_count = counts.past,
        upcoming = show_section("Upcoming Shows", &shows.upcoming, "/artists"),
        past = show_section("Past Shows", &shows.past, "/artists"),
    );
    page(&venue.name, flashes, &body)
}

/// The create and edit forms differ only in heading and target.
pub fn venue_form(
    flashes: &[String],
    values: &FormData,
    editing: Option<i32>,
) -> Html<String> {
    let (title, action) = match editing {
        Some(id) => ("Edit Venue".to_string(), format!("/venues/{}/edit", id)),
        None => ("List a new venue".to_string(), "/venues/create".to_string()),
    };
    let body = format!(
        r#"<h1>{title}</h1>
<form method="post" action="{action}">
{name}
{city}
{state}
{address}
{phone}
{genres}
{facebook}
{image}
{website}
{seeking}
{description}
<button type="submit">Save Venue</button>
</form>"#,
        title = escape(&title),
        action = action,
        name = text_input(values, "name", "Name"),
        city = text_input(values, "city", "City"),
        state = state_select(values),
        address = text_input(values, "address", "Address"),
        phone = text_input(values, "phone", "Phone"),
        genres = genre_select(values),
        facebook = text_input(values, "facebook_link", "Facebook Link"),
        image = text_input(values, "image_link", "Image Link"),
        website = text_input(values, "website", "Website"),
        seeking = checkbox(values, "seeking_talent", "Looking for talent"),
        description = text_input(values, "seeking_description", "Seeking Description"),
    );
    page(&title, flashes, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(id: i32, city: &str, state: &str) -> venue::Model {
        venue::Model {
            id,
            name: format!("Venue {}", id),
            city: city.to_string(),
            state: state.to_string(),
            address: "1 Main St".to_string(),
            phone: None,
            genres: String::new(),
            website: None,
            image_link: None,
            facebook_link: None,
            seeking_talent: false,
            seeking_description: None,
        }
    }

    #[test]
    fn groups_by_city_and_state_in_first_seen_order() {
        let areas = group_by_area(vec![
            venue(1, "San Francisco", "CA"),
            venue(2, "New York", "NY"),
            venue(3, "San Francisco", "CA"),
            venue(4, "New York", "CT"),
        ]);
        let summary: Vec<(String, Vec<i32>)> = areas
            .iter()
            .map(|area| {
                (
                    area.area.to_owned(),
                    area.venues.iter().map(|venue| venue.id).collect(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("San Francisco, CA".to_string(), vec![1, 3]),
                ("New York, NY".to_string(), vec![2]),
                ("New York, CT".to_string(), vec![4]),
            ]
        );
    }
}
