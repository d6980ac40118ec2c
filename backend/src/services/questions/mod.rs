//! # Question Service Module
//!
//! Routes the `/questions` endpoints to the `QuestionRepository`.
//!
//! ## Sub-modules:
//! - `list`: every stored question.
//! - `get`: one question by id.
//! - `add`: creates a question from a validated body.
//! - `update`: replaces a question, keeping its id.
//! - `delete`: removes a question.

mod add;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all question endpoints.
const API_PATH: &str = "/questions";

/// Configures and returns the Actix `Scope` for the question routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: all questions, in insertion order.
/// *   **`POST /`**: validates a `NewQuestion` body (422 on failure) and returns
///     the created question with its generated id.
/// *   **`GET /{question_id}`**: the question, or an empty value when unknown.
/// *   **`PUT /{question_id}`**: validates a `NewQuestion` body and replaces the
///     question. Returns the replacement even when the id is unknown.
/// *   **`DELETE /{question_id}`**: the deleted question, or an empty value.
///
/// The collection routes accept an optional trailing slash.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/", get().to(list::process))
        .route("", post().to(add::process))
        .route("/", post().to(add::process))
        .route("/{question_id}", get().to(get::process))
        .route("/{question_id}", put().to(update::process))
        .route("/{question_id}", delete().to(delete::process))
}
