use axum::response::Html;
use entities::show_local_model::ShowOwner;

use crate::responses::layout::{escape, page};
use crate::search::SearchResults;

pub fn search_results(
    owner: ShowOwner,
    search_term: &str,
    results: &SearchResults,
) -> Html<String> {
    let prefix = match owner {
        ShowOwner::Venue => "/venues",
        ShowOwner::Artist => "/artists",
    };
    let items: String = results
        .data
        .iter()
        .map(|hit| {
            format!(
                r#"<li><a href="{prefix}/{id}">{name}</a> <span class="upcoming">{upcoming} upcoming shows</span></li>"#,
                prefix = prefix,
                id = hit.id,
                name = escape(&hit.name),
                upcoming = hit.num_upcoming_shows,
            )
        })
        .collect();
    page(
        "Search",
        &[],
        &format!(
            r#"<h3>Number of search results for "{term}": {count}</h3><ul class="results">{items}</ul>"#,
            term = escape(search_term),
            count = results.count,
            items = items,
        ),
    )
}
