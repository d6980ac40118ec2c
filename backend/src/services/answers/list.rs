use crate::error::ApiError;
use crate::repository::QuestionRepository;
use crate::services::json_or_empty;
use actix_web::{web, HttpResponse};

/// Actix web handler for `GET /questions/{question_id}/answers`.
///
/// # Returns
/// - `200 OK` with the question's answers as a JSON array.
/// - `200 OK` with an empty value if the question does not exist.
/// - `500 Internal Server Error` if the storage file cannot be read.
pub async fn process(
    question_id: web::Path<String>,
    repository: web::Data<QuestionRepository>,
) -> Result<HttpResponse, ApiError> {
    let answers = repository.get_answers(&question_id).await?;
    Ok(json_or_empty(answers))
}
