//! Integration tests for the stagehand pages.
//!
//! Every test runs the real router against a fresh in-memory SQLite database
//! migrated with the production migrations.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Local, NaiveDateTime};
use entities::artist_local_model::ArtistModel;
use entities::show_local_model::ShowModel;
use entities::venue_local_model::VenueModel;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use stagehand::{build_router, DatabaseState};
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: fresh migrated in-memory database
async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let connection = Database::connect(options)
        .await
        .expect("Should connect to in-memory database");
    Migrator::up(&connection, None)
        .await
        .expect("Should run migrations");
    connection
}

fn setup_app(connection: &DatabaseConnection) -> Router {
    build_router(DatabaseState::new(connection.clone()))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// `body` must already be url-encoded.
fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    (status, String::from_utf8(bytes.to_vec()).expect("Should be utf-8"))
}

fn venue_model(name: &str, city: &str, state: &str) -> VenueModel {
    VenueModel {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: None,
        genres: "Jazz".to_string(),
        website: None,
        image_link: None,
        facebook_link: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

fn artist_model(name: &str, seeking_venue: bool) -> ArtistModel {
    ArtistModel {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("326-123-5000".to_string()),
        genres: "Rock n Roll".to_string(),
        image_link: None,
        website: None,
        facebook_link: None,
        seeking_venue,
        seeking_description: Some("Looking for shows".to_string()),
    }
}

fn days_from_now(days: i64) -> NaiveDateTime {
    Local::now().naive_local() + Duration::days(days)
}

// =============================================================================
// Pages and error pages
// =============================================================================

#[tokio::test]
async fn test_home_lists_latest_records() {
    let db = setup_test_db().await;
    queries::add_venue(&db, venue_model("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    queries::add_artist(&db, artist_model("Guns N Petals", false))
        .await
        .unwrap();

    let (status, body) = send(setup_app(&db), get_request("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_unknown_route_renders_not_found_page() {
    let db = setup_test_db().await;

    let (status, body) = send(setup_app(&db), get_request("/nowhere")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Not Found"));
}

#[tokio::test]
async fn test_missing_and_malformed_ids_are_not_found() {
    let db = setup_test_db().await;

    let (status, _) = send(setup_app(&db), get_request("/venues/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(setup_app(&db), get_request("/artists/abc")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(setup_app(&db), get_request("/artists/7/edit")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Create / edit / delete
// =============================================================================

#[tokio::test]
async fn test_create_venue_and_view_it() {
    let db = setup_test_db().await;

    let (status, body) = send(
        setup_app(&db),
        form_request(
            "/venues/create",
            "name=The+Musical+Hop&city=San+Francisco&state=CA&address=1015+Folsom+Street\
             &phone=123-123-1234&genres=Jazz&genres=Folk&seeking_talent=y\
             &seeking_description=We+are+on+the+lookout",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Venue The Musical Hop was successfully listed!"));

    let venues = queries::get_all_venues(&db).await.unwrap();
    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].genres, "Jazz,Folk");
    assert!(venues[0].seeking_talent);

    let (status, body) = send(
        setup_app(&db),
        get_request(&format!("/venues/{}", venues[0].id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Currently seeking talent"));
    assert!(body.contains("0 upcoming, 0 past"));
}

#[tokio::test]
async fn test_create_venue_without_required_field_writes_nothing() {
    let db = setup_test_db().await;

    let (status, body) = send(
        setup_app(&db),
        form_request("/venues/create", "name=Nowhere+Bar&city=Austin&state=TX"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The address field is required."));
    assert!(body.contains("An error occurred. Venue Nowhere Bar could not be listed."));
    assert!(queries::get_all_venues(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_edit_artist_without_seeking_field_stores_false() {
    let db = setup_test_db().await;
    let artist_id = queries::add_artist(&db, artist_model("Guns N Petals", true))
        .await
        .unwrap();

    let (status, body) = send(
        setup_app(&db),
        form_request(
            &format!("/artists/{}/edit", artist_id),
            "name=Guns+N+Roses&city=Los+Angeles&state=CA&genres=Punk",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Artist Guns N Roses was successfully updated!"));

    let artist = queries::get_artist_by_id(&db, artist_id)
        .await
        .unwrap()
        .expect("Artist should still exist");
    assert_eq!(artist.name, "Guns N Roses");
    assert_eq!(artist.city, "Los Angeles");
    assert_eq!(artist.genres, "Punk");
    assert!(!artist.seeking_venue);
    assert_eq!(artist.seeking_description, None);
    assert_eq!(artist.phone, None);
}

#[tokio::test]
async fn test_edit_venue_clears_blank_optional_fields() {
    let db = setup_test_db().await;
    let venue_id = queries::add_venue(
        &db,
        VenueModel {
            phone: Some("555-1234".to_string()),
            website: Some("http://hop".to_string()),
            seeking_talent: true,
            seeking_description: Some("bands".to_string()),
            ..venue_model("The Musical Hop", "San Francisco", "CA")
        },
    )
    .await
    .unwrap();

    let (status, body) = send(
        setup_app(&db),
        form_request(
            &format!("/venues/{}/edit", venue_id),
            "name=The+Musical+Hop&city=San+Francisco&state=CA&address=1015+Folsom+Street&phone=&website=",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Venue The Musical Hop was successfully updated!"));

    let venue = queries::get_venue_by_id(&db, venue_id)
        .await
        .unwrap()
        .expect("Venue should still exist");
    assert_eq!(venue.phone, None);
    assert_eq!(venue.website, None);
    assert_eq!(venue.seeking_description, None);
    assert!(!venue.seeking_talent);
    assert_eq!(venue.genres, "");
}

#[tokio::test]
async fn test_edit_form_is_prefilled() {
    let db = setup_test_db().await;
    let venue_id = queries::add_venue(&db, venue_model("Park Square", "San Francisco", "CA"))
        .await
        .unwrap();

    let (status, body) = send(
        setup_app(&db),
        get_request(&format!("/venues/{}/edit", venue_id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"value="Park Square""#));
    assert!(body.contains(r#"<option value="Jazz" selected>Jazz</option>"#));
}

#[tokio::test]
async fn test_delete_venue_leaves_its_shows_behind() {
    let db = setup_test_db().await;
    let venue_id = queries::add_venue(&db, venue_model("Blue Moon Bar", "New York", "NY"))
        .await
        .unwrap();
    let artist_id = queries::add_artist(&db, artist_model("Matt Quevedo", false))
        .await
        .unwrap();
    queries::add_show(
        &db,
        ShowModel {
            date: days_from_now(-10),
            artist_id,
            venue_id,
        },
    )
    .await
    .unwrap();

    let (status, body) = send(
        setup_app(&db),
        form_request(&format!("/venues/{}/delete", venue_id), ""),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Venue was successfully deleted!"));
    assert!(queries::get_venue_by_id(&db, venue_id).await.unwrap().is_none());
    assert_eq!(queries::count_all_shows(&db).await.unwrap(), 1);

    // The orphaned show still counts for the artist.
    let (status, body) = send(
        setup_app(&db),
        get_request(&format!("/artists/{}", artist_id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Unknown venue"));
    assert!(body.contains("0 upcoming, 1 past"));

    // The listing only shows bookings with both sides present.
    let (status, body) = send(setup_app(&db), get_request("/shows")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("Matt Quevedo"));
    assert!(body.contains("Showing 0 of 1 shows"));
}

#[tokio::test]
async fn test_delete_missing_artist_reports_failure() {
    let db = setup_test_db().await;

    let (status, body) = send(setup_app(&db), form_request("/artists/9/delete", "")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Artist not deleted!"));
}

// =============================================================================
// Shows
// =============================================================================

#[tokio::test]
async fn test_create_show_with_unknown_artist_inserts_nothing() {
    let db = setup_test_db().await;
    let venue_id = queries::add_venue(&db, venue_model("Blue Moon Bar", "New York", "NY"))
        .await
        .unwrap();

    let (status, body) = send(
        setup_app(&db),
        form_request(
            "/shows/create",
            &format!(
                "artist_id=99&venue_id={}&start_time=2035-04-01+20%3A00%3A00",
                venue_id
            ),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Artist ID not found"));
    assert!(!body.contains("Venue ID not found"));
    assert_eq!(queries::count_all_shows(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_show_with_unknown_artist_and_venue_flashes_both() {
    let db = setup_test_db().await;

    let (_, body) = send(
        setup_app(&db),
        form_request(
            "/shows/create",
            "artist_id=1&venue_id=x&start_time=2035-04-01T20%3A00",
        ),
    )
    .await;

    assert!(body.contains("Artist ID not found"));
    assert!(body.contains("Venue ID not found"));
    assert_eq!(queries::count_all_shows(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_show_and_list_it() {
    let db = setup_test_db().await;
    let venue_id = queries::add_venue(&db, venue_model("Blue Moon Bar", "New York", "NY"))
        .await
        .unwrap();
    let artist_id = queries::add_artist(&db, artist_model("The Wild Sax Band", false))
        .await
        .unwrap();

    let (status, body) = send(
        setup_app(&db),
        form_request(
            "/shows/create",
            &format!(
                "artist_id={}&venue_id={}&start_time=2035-04-01+20%3A00%3A00",
                artist_id, venue_id
            ),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Show was successfully listed!"));

    let (status, body) = send(setup_app(&db), get_request("/shows")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The Wild Sax Band"));
    assert!(body.contains("Blue Moon Bar"));
    assert!(body.contains("Sun 04, 01, 2035 8:00PM"));
    assert!(body.contains("Showing 1 of 1 shows"));

    let (_, body) = send(setup_app(&db), get_request("/shows?format=full")).await;
    assert!(body.contains("Sunday April, 1, 2035 at 8:00PM"));

    let (status, body) = send(setup_app(&db), get_request("/shows?format=short")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Sun 04, 01, 2035 8:00PM"));

    let (_, body) = send(setup_app(&db), get_request(&format!("/venues/{}", venue_id))).await;
    assert!(body.contains("1 upcoming, 0 past"));
    assert!(body.contains("Sunday April, 1, 2035 at 8:00PM"));
}

#[tokio::test]
async fn test_create_show_with_bad_start_time_is_rejected() {
    let db = setup_test_db().await;

    let (status, body) = send(
        setup_app(&db),
        form_request("/shows/create", "artist_id=1&venue_id=1&start_time=soon"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("not a valid choice for start_time"));
    assert_eq!(queries::count_all_shows(&db).await.unwrap(), 0);
}

// =============================================================================
// Search
// =============================================================================

async fn seed_search_venues(db: &DatabaseConnection) {
    for (name, city, state) in [
        ("Blue Moon Bar", "New York", "NY"),
        ("The Dueling Pianos Bar", "New York", "NY"),
        ("Park Square Live Music & Coffee", "San Francisco", "CA"),
        ("Brooklyn Bowl", "Brooklyn", "NY"),
    ] {
        queries::add_venue(db, venue_model(name, city, state))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_search_venues_by_name() {
    let db = setup_test_db().await;
    seed_search_venues(&db).await;

    let (status, body) = send(
        setup_app(&db),
        form_request("/venues/search", "search_term=moon"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"Number of search results for "moon": 1"#));
    assert!(body.contains("Blue Moon Bar"));
}

#[tokio::test]
async fn test_search_venues_falls_back_to_location() {
    let db = setup_test_db().await;
    seed_search_venues(&db).await;

    let (_, body) = send(
        setup_app(&db),
        form_request("/venues/search", "search_term=new+york%2C+ny"),
    )
    .await;

    assert!(body.contains(r#"Number of search results for "new york, ny": 2"#));
    assert!(body.contains("Blue Moon Bar"));
    assert!(body.contains("The Dueling Pianos Bar"));
    assert!(!body.contains("Brooklyn Bowl"));
}

#[tokio::test]
async fn test_search_artists_reports_upcoming_shows() {
    let db = setup_test_db().await;
    let venue_id = queries::add_venue(&db, venue_model("Blue Moon Bar", "New York", "NY"))
        .await
        .unwrap();
    let artist_id = queries::add_artist(&db, artist_model("The Wild Sax Band", false))
        .await
        .unwrap();
    for days in [-3, 5, 12] {
        queries::add_show(
            &db,
            ShowModel {
                date: days_from_now(days),
                artist_id,
                venue_id,
            },
        )
        .await
        .unwrap();
    }

    let (status, body) = send(
        setup_app(&db),
        form_request("/artists/search", "search_term=SAX"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"Number of search results for "SAX": 1"#));
    assert!(body.contains("2 upcoming shows"));
}
