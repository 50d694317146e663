use std::future::Future;
use std::pin::Pin;

use entities::artist_local_model::ArtistModel;
use entities::search_local_model::SearchRow;
use entities::show_local_model::{ShowListing, ShowModel, ShowOwner};
use entities::venue_local_model::VenueModel;
use entities::prelude::{Artist, Show, Venue};
use entities::{artist, show, venue};
use log::{error, info};
use sea_orm::prelude::DateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, IntoActiveModel, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, TransactionError, TransactionTrait,
};

type TxnFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, DbErr>> + Send + 'c>>;

/// Runs `work` in a single transaction. Any error rolls everything back and
/// is handed to the caller as a plain `DbErr`.
pub async fn in_transaction<T, F>(connection: &DatabaseConnection, work: F) -> Result<T, DbErr>
where
    T: Send,
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, T> + Send,
{
    connection
        .transaction::<F, T, DbErr>(work)
        .await
        .map_err(|err| match err {
            TransactionError::Connection(err) => err,
            TransactionError::Transaction(err) => {
                error!("Transaction rolled back: {}", err);
                err
            }
        })
}

pub async fn get_latest_venues(
    connection: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<venue::Model>, DbErr> {
    Venue::find()
        .order_by_desc(venue::Column::Id)
        .limit(limit)
        .all(connection)
        .await
}

pub async fn get_latest_artists(
    connection: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<artist::Model>, DbErr> {
    Artist::find()
        .order_by_desc(artist::Column::Id)
        .limit(limit)
        .all(connection)
        .await
}

pub async fn get_all_venues(connection: &DatabaseConnection) -> Result<Vec<venue::Model>, DbErr> {
    Venue::find()
        .order_by_asc(venue::Column::Id)
        .all(connection)
        .await
}

pub async fn get_all_artists(connection: &DatabaseConnection) -> Result<Vec<artist::Model>, DbErr> {
    Artist::find()
        .order_by_asc(artist::Column::Id)
        .all(connection)
        .await
}

pub async fn get_venue_by_id(
    connection: &DatabaseConnection,
    venue_id: i32,
) -> Result<Option<venue::Model>, DbErr> {
    Venue::find_by_id(venue_id).one(connection).await
}

pub async fn get_artist_by_id(
    connection: &DatabaseConnection,
    artist_id: i32,
) -> Result<Option<artist::Model>, DbErr> {
    Artist::find_by_id(artist_id).one(connection).await
}

/// Loads id, name, city and state of every venue or artist, nothing more.
pub async fn get_search_rows(
    connection: &DatabaseConnection,
    owner: ShowOwner,
) -> Result<Vec<SearchRow>, DbErr> {
    match owner {
        ShowOwner::Venue => {
            Venue::find()
                .select_only()
                .column(venue::Column::Id)
                .column(venue::Column::Name)
                .column(venue::Column::City)
                .column(venue::Column::State)
                .order_by_asc(venue::Column::Id)
                .into_model::<SearchRow>()
                .all(connection)
                .await
        }
        ShowOwner::Artist => {
            Artist::find()
                .select_only()
                .column(artist::Column::Id)
                .column(artist::Column::Name)
                .column(artist::Column::City)
                .column(artist::Column::State)
                .order_by_asc(artist::Column::Id)
                .into_model::<SearchRow>()
                .all(connection)
                .await
        }
    }
}

pub async fn get_show_dates(
    connection: &DatabaseConnection,
    owner: ShowOwner,
    id: i32,
) -> Result<Vec<DateTime>, DbErr> {
    let filter = match owner {
        ShowOwner::Artist => show::Column::ArtistId.eq(id),
        ShowOwner::Venue => show::Column::VenueId.eq(id),
    };
    Show::find()
        .select_only()
        .column(show::Column::Date)
        .filter(filter)
        .into_tuple::<DateTime>()
        .all(connection)
        .await
}

pub async fn get_shows_for_venue(
    connection: &DatabaseConnection,
    venue_id: i32,
) -> Result<Vec<(show::Model, Option<artist::Model>)>, DbErr> {
    Show::find()
        .filter(show::Column::VenueId.eq(venue_id))
        .find_also_related(Artist)
        .order_by_asc(show::Column::Date)
        .all(connection)
        .await
}

pub async fn get_shows_for_artist(
    connection: &DatabaseConnection,
    artist_id: i32,
) -> Result<Vec<(show::Model, Option<venue::Model>)>, DbErr> {
    Show::find()
        .filter(show::Column::ArtistId.eq(artist_id))
        .find_also_related(Venue)
        .order_by_asc(show::Column::Date)
        .all(connection)
        .await
}

/// Every show whose artist and venue both still exist.
pub async fn get_show_listings(connection: &DatabaseConnection) -> Result<Vec<ShowListing>, DbErr> {
    Show::find()
        .select_only()
        .column(show::Column::Id)
        .column(show::Column::Date)
        .column(show::Column::ArtistId)
        .column(show::Column::VenueId)
        .column_as(artist::Column::Name, "artist_name")
        .column_as(artist::Column::ImageLink, "artist_image_link")
        .column_as(venue::Column::Name, "venue_name")
        .join(JoinType::InnerJoin, show::Relation::Artist.def())
        .join(JoinType::InnerJoin, show::Relation::Venue.def())
        .order_by_asc(show::Column::Date)
        .into_model::<ShowListing>()
        .all(connection)
        .await
}

pub async fn count_all_shows(connection: &DatabaseConnection) -> Result<u64, DbErr> {
    Show::find().count(connection).await
}

pub async fn add_venue(connection: &DatabaseConnection, venue: VenueModel) -> Result<i32, DbErr> {
    let active_model = venue.into_active_model();
    let venue_id = in_transaction(connection, |txn| {
        Box::pin(async move {
            let ret = Venue::insert(active_model).exec(txn).await?;
            Ok(ret.last_insert_id)
        })
    })
    .await?;
    info!("Inserted venue {}", venue_id);
    Ok(venue_id)
}

pub async fn update_venue(
    connection: &DatabaseConnection,
    venue_id: i32,
    venue: VenueModel,
) -> Result<venue::Model, DbErr> {
    let active_model = venue.into_update(venue_id);
    let updated = in_transaction(connection, |txn| {
        Box::pin(async move { active_model.update(txn).await })
    })
    .await?;
    info!("Updated venue {}", venue_id);
    Ok(updated)
}

/// Deletes the venue row only. Shows pointing at it are left in place.
pub async fn delete_venue(connection: &DatabaseConnection, venue_id: i32) -> Result<u64, DbErr> {
    let deleted = in_transaction(connection, |txn| {
        Box::pin(async move {
            let ret = Venue::delete_by_id(venue_id).exec(txn).await?;
            Ok(ret.rows_affected)
        })
    })
    .await?;
    info!("Deleted {} venue row(s) with id {}", deleted, venue_id);
    Ok(deleted)
}

pub async fn add_artist(connection: &DatabaseConnection, artist: ArtistModel) -> Result<i32, DbErr> {
    let active_model = artist.into_active_model();
    let artist_id = in_transaction(connection, |txn| {
        Box::pin(async move {
            let ret = Artist::insert(active_model).exec(txn).await?;
            Ok(ret.last_insert_id)
        })
    })
    .await?;
    info!("Inserted artist {}", artist_id);
    Ok(artist_id)
}

pub async fn update_artist(
    connection: &DatabaseConnection,
    artist_id: i32,
    artist: ArtistModel,
) -> Result<artist::Model, DbErr> {
    let active_model = artist.into_update(artist_id);
    let updated = in_transaction(connection, |txn| {
        Box::pin(async move { active_model.update(txn).await })
    })
    .await?;
    info!("Updated artist {}", artist_id);
    Ok(updated)
}

/// Deletes the artist row only. Shows pointing at it are left in place.
pub async fn delete_artist(connection: &DatabaseConnection, artist_id: i32) -> Result<u64, DbErr> {
    let deleted = in_transaction(connection, |txn| {
        Box::pin(async move {
            let ret = Artist::delete_by_id(artist_id).exec(txn).await?;
            Ok(ret.rows_affected)
        })
    })
    .await?;
    info!("Deleted {} artist row(s) with id {}", deleted, artist_id);
    Ok(deleted)
}

pub async fn add_show(connection: &DatabaseConnection, show: ShowModel) -> Result<i32, DbErr> {
    let active_model = show.into_active_model();
    let show_id = in_transaction(connection, |txn| {
        Box::pin(async move {
            let ret = Show::insert(active_model).exec(txn).await?;
            Ok(ret.last_insert_id)
        })
    })
    .await?;
    info!("Inserted show {}", show_id);
    Ok(show_id)
}
