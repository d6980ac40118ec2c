//! Routes for the answers nested under one question.
//!
//! - `GET /questions/{question_id}/answers`: the question's answers.
//! - `POST /questions/{question_id}/answers`: appends an answer, returns the updated question.
//! - `GET /questions/{question_id}/answers/{answer_id}`: one answer.
//! - `PUT /questions/{question_id}/answers/{answer_id}`: replaces an answer, returns it.
//! - `DELETE /questions/{question_id}/answers/{answer_id}`: removes an answer, returns the updated question.
//!
//! Every route answers with an empty value when the question does not exist.

mod add;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/questions/{question_id}/answers";

/// Configures and returns the Actix `Scope` for the answer routes.
///
/// Must be registered before the `/questions` scope, which would otherwise
/// claim these paths.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/", get().to(list::process))
        .route("", post().to(add::process))
        .route("/", post().to(add::process))
        .route("/{answer_id}", get().to(get::process))
        .route("/{answer_id}", put().to(update::process))
        .route("/{answer_id}", delete().to(delete::process))
}
