use crate::error::ApiError;
use crate::repository::QuestionRepository;
use crate::services::{body_value, json_or_empty, Body};
use crate::validation;
use actix_web::{web, HttpResponse};

/// Actix web handler for `POST /questions/{question_id}/answers`.
///
/// # Returns
/// - `200 OK` with the updated `Question`, new answer last.
/// - `200 OK` with an empty value if the question does not exist.
/// - `422 Unprocessable Entity` if the body is not a valid answer.
pub async fn process(
    question_id: web::Path<String>,
    payload: Body,
    repository: web::Data<QuestionRepository>,
) -> Result<HttpResponse, ApiError> {
    let data = validation::new_answer(body_value(payload))?;
    let question = repository.add_answer(&question_id, data).await?;
    Ok(json_or_empty(question))
}
