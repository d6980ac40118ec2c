use crate::error::ApiError;
use crate::repository::QuestionRepository;
use crate::services::{body_value, Body};
use crate::validation;
use actix_web::{web, HttpResponse};

/// Actix web handler for `PUT /questions/{question_id}`.
///
/// The body is validated before the storage file is touched. The id in the
/// path always wins over anything the client may have meant to change.
pub async fn process(
    question_id: web::Path<String>,
    payload: Body,
    repository: web::Data<QuestionRepository>,
) -> Result<HttpResponse, ApiError> {
    let data = validation::new_question(body_value(payload))?;
    let question = repository.update_question(&question_id, data).await?;
    Ok(HttpResponse::Ok().json(question))
}
