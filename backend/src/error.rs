//! Error type shared by every HTTP handler.
//!
//! Handlers return `Result<HttpResponse, ApiError>` and propagate with `?`;
//! actix turns the error into a response through [`ResponseError`]. Storage
//! failures are logged and answered with a fixed message so no file paths or
//! parser output reach the client.

use crate::repository::RepositoryError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde_json::json;

/// Body of every `500 Internal Server Error` response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// Body of every `404 Not Found` response.
pub const NOT_FOUND_MESSAGE: &str = "Resource not found";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body does not match the schema. Holds the comma-joined
    /// field messages.
    #[error("{0}")]
    Validation(String),

    /// The request body could not be read as JSON.
    #[error("{0}")]
    MalformedBody(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(message) | ApiError::MalformedBody(message) => {
                HttpResponse::build(self.status_code()).json(json!({ "error": message }))
            }
            ApiError::Repository(e) => {
                error!("Storage failure: {}", e);
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body(INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}
