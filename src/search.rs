use entities::search_local_model::SearchRow;
use entities::show_local_model::ShowOwner;
use sea_orm::{DatabaseConnection, DbErr};
use serde::Serialize;

use crate::show_counter::count_upcoming_shows;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

/// City with an optional state, parsed from a free-text term.
///
/// `"new york, ny"` splits on the comma; `"austin tx"` splits on whitespace.
/// Anything after the state token is ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationQuery {
    pub city: String,
    pub state: Option<String>,
}

impl LocationQuery {
    pub fn parse(term: &str) -> Option<Self> {
        let lowered = term.trim().to_lowercase();
        if let Some((city, rest)) = lowered.split_once(',') {
            let city = city.split_whitespace().collect::<Vec<&str>>().join(" ");
            if city.is_empty() {
                return None;
            }
            return Some(LocationQuery {
                city,
                state: rest.split_whitespace().next().map(str::to_string),
            });
        }
        let mut tokens = lowered.split_whitespace();
        let city = tokens.next()?.trim_matches(',').to_string();
        if city.is_empty() {
            return None;
        }
        Some(LocationQuery {
            city,
            state: tokens.next().map(str::to_string),
        })
    }

    pub fn matches(&self, row: &SearchRow) -> bool {
        if row.city.to_lowercase() != self.city {
            return false;
        }
        match &self.state {
            Some(state) => row.state.to_lowercase() == *state,
            None => true,
        }
    }
}

/// Rows whose name contains the term, ignoring case.
pub fn name_matches<'a>(rows: &'a [SearchRow], term: &str) -> Vec<&'a SearchRow> {
    let needle = term.trim().to_lowercase();
    rows.iter()
        .filter(|row| row.name.to_lowercase().contains(&needle))
        .collect()
}

pub fn location_matches<'a>(rows: &'a [SearchRow], term: &str) -> Vec<&'a SearchRow> {
    match LocationQuery::parse(term) {
        Some(location) => rows.iter().filter(|row| location.matches(row)).collect(),
        None => Vec::new(),
    }
}

/// Name search first; the location search only runs when no name matched.
pub fn find_matches<'a>(rows: &'a [SearchRow], term: &str) -> Vec<&'a SearchRow> {
    let hits = name_matches(rows, term);
    if !hits.is_empty() {
        return hits;
    }
    location_matches(rows, term)
}

pub async fn search(
    connection: &DatabaseConnection,
    owner: ShowOwner,
    term: &str,
) -> Result<SearchResults, DbErr> {
    let rows = queries::get_search_rows(connection, owner).await?;
    let mut data = Vec::new();
    for row in find_matches(&rows, term) {
        data.push(SearchHit {
            id: row.id,
            name: row.name.to_owned(),
            num_upcoming_shows: count_upcoming_shows(connection, owner, row.id).await?,
        });
    }
    Ok(SearchResults {
        count: data.len(),
        data,
    })
}
