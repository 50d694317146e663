pub mod artist_pages;
pub mod error_pages;
pub mod form_fields;
pub mod home;
pub mod layout;
pub mod search_page;
pub mod show_pages;
pub mod venue_pages;
