use sea_orm::FromQueryResult;
use serde::Serialize;

/// The slice of a venue or artist row the search engine looks at.
#[derive(FromQueryResult, PartialEq, Eq, Clone, Debug, Serialize)]
pub struct SearchRow {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
}
