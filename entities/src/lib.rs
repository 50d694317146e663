pub mod prelude;

pub mod artist;
pub mod artist_local_model;
pub mod search_local_model;
pub mod show;
pub mod show_local_model;
pub mod venue;
pub mod venue_local_model;
