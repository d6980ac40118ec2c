use crate::error::ApiError;
use crate::repository::QuestionRepository;
use crate::services::json_or_empty;
use actix_web::{web, HttpResponse};

/// Actix web handler for `GET /questions/{question_id}/answers/{answer_id}`.
///
/// # Returns
/// - `200 OK` with the `Answer` as JSON.
/// - `200 OK` with an empty value if the question or the answer does not exist.
pub async fn process(
    path: web::Path<(String, String)>,
    repository: web::Data<QuestionRepository>,
) -> Result<HttpResponse, ApiError> {
    let (question_id, answer_id) = path.into_inner();
    let answer = repository.get_answer(&question_id, &answer_id).await?;
    Ok(json_or_empty(answer))
}
