use axum::response::Html;
use entities::artist;

use crate::forms::{split_genres, FormData};
use crate::responses::form_fields::{checkbox, genre_select, state_select, text_input};
use crate::responses::layout::{escape, external_link, genre_badges, image, page};
use crate::responses::show_pages::{show_section, DetailShows};
use crate::show_counter::ShowCounts;

pub fn artists(flashes: &[String], artists: &[artist::Model]) -> Html<String> {
    let items: String = artists
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
        "Artists",
        flashes,
        &format!(
            r#"<h1>Artists</h1><a href="/artists/create">List a new artist</a><ul>{}</ul>"#,
            items
        ),
    )
}

pub fn artist_detail(
    flashes: &[String],
    artist: &artist::Model,
    shows: &DetailShows,
    counts: ShowCounts,
) -> Html<String> {
    let seeking = if artist.seeking_venue {
        format!(
            r#"<div class="seeking"><p>Currently seeking performance venues</p><p>{}</p></div>"#,
            escape(artist.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking performance venues</p>"#.to_string()
    };
    let body = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
<div class="genres">{genres}</div>
<p>{city}, {state}</p>
<p>{phone}</p>
{website}
{facebook}
{seeking}
{image}
<p><a href="/artists/{id}/edit">Edit</a></p>
<form method="post" action="/artists/{id}/delete"><button type="submit">Delete</button></form>
<p>{upcoming_count} upcoming, {past_count} past</p>
{upcoming}
{past}"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_badges(&split_genres(&artist.genres)),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(artist.phone.as_deref().unwrap_or("No phone")),
        website = external_link("Website", &artist.website),
        facebook = external_link("Facebook", &artist.facebook_link),
        seeking = seeking,
        image = image(&artist.image_link, &artist.name),
        upcoming_count = counts.upcoming,
        past_count = counts.past,
        upcoming = show_section("Upcoming Shows", &shows.upcoming, "/venues"),
        past = show_section("Past Shows", &shows.past, "/venues"),
    );
    page(&artist.name, flashes, &body)
}

pub fn artist_form(
    flashes: &[String],
    values: &FormData,
    editing: Option<i32>,
) -> Html<String> {
    let (title, action) = match editing {
        Some(id) => ("Edit Artist".to_string(), format!("/artists/{}/edit", id)),
        None => ("List a new artist".to_string(), "/artists/create".to_string()),
    };
    let body = format!(
        r#"<h1>{title}</h1>
<form method="post" action="{action}">
{name}
{city}
{state}
{phone}
{genres}
{facebook}
{image}
{website}
{seeking}
{description}
<button type="submit">Save Artist</button>
</form>"#,
        title = escape(&title),
        action = action,
        name = text_input(values, "name", "Name"),
        city = text_input(values, "city", "City"),
        state = state_select(values),
        phone = text_input(values, "phone", "Phone"),
        genres = genre_select(values),
        facebook = text_input(values, "facebook_link", "Facebook Link"),
        image = text_input(values, "image_link", "Image Link"),
        website = text_input(values, "website", "Website"),
        seeking = checkbox(values, "seeking_venue", "Looking for venues"),
        description = text_input(values, "seeking_description", "Seeking Description"),
    );
    page(&title, flashes, &body)
}
