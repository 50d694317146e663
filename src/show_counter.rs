use chrono::{Local, NaiveDateTime};
use entities::show_local_model::ShowOwner;
use sea_orm::{DatabaseConnection, DbErr};

/// Upcoming and past show totals for one artist or venue.
///
/// Both buckets are inclusive of "now", a show starting at exactly that
/// instant is counted twice.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowCounts {
    pub upcoming: usize,
    pub past: usize,
}

impl ShowCounts {
    pub fn tally<I>(dates: I, now: NaiveDateTime) -> Self
    where
        I: IntoIterator<Item = NaiveDateTime>,
    {
        let mut counts = ShowCounts::default();
        for date in dates {
            if is_upcoming(date, now) {
                counts.upcoming += 1;
            }
            if is_past(date, now) {
                counts.past += 1;
            }
        }
        counts
    }
}

pub fn is_upcoming(date: NaiveDateTime, now: NaiveDateTime) -> bool {
    date >= now
}

pub fn is_past(date: NaiveDateTime, now: NaiveDateTime) -> bool {
    date <= now
}

/// Show dates are stored as local wall-clock time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub async fn count_shows(
    connection: &DatabaseConnection,
    owner: ShowOwner,
    id: i32,
) -> Result<ShowCounts, DbErr> {
    let dates = queries::get_show_dates(connection, owner, id).await?;
    Ok(ShowCounts::tally(dates, now()))
}

pub async fn count_upcoming_shows(
    connection: &DatabaseConnection,
    owner: ShowOwner,
    id: i32,
) -> Result<usize, DbErr> {
    Ok(count_shows(connection, owner, id).await?.upcoming)
}
