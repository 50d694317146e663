use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use sea_orm::DbErr;
use thiserror::Error;

use crate::responses::error_pages;

/// Failures that end a request on an error page rather than a flash message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("resource not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, error_pages::not_found()).into_response(),
            AppError::Database(err) => {
                error!("Error retrieving data from db: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, error_pages::server_error()).into_response()
            }
        }
    }
}

/// Path ids are integers; anything else names a page that does not exist.
pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>().map_err(|_| {
        warn!("Not an id: {}", raw);
        AppError::NotFound
    })
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, error_pages::not_found())
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Handler panicked: {}", details);
    (StatusCode::INTERNAL_SERVER_ERROR, error_pages::server_error()).into_response()
}
