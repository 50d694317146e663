use axum::response::Html;

use crate::responses::layout::page;

pub fn not_found() -> Html<String> {
    page(
        "404",
        &[],
        r#"<h1>Not Found</h1><p>Sorry, that page does not exist.</p><a href="/">Back home</a>"#,
    )
}

pub fn server_error() -> Html<String> {
    page(
        "500",
        &[],
        r#"<h1>Internal Server Error</h1><p>Something went wrong on our end.</p><a href="/">Back home</a>"#,
    )
}
