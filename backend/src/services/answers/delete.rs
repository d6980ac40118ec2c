use crate::error::ApiError;
use crate::repository::QuestionRepository;
use crate::services::json_or_empty;
use actix_web::{web, HttpResponse};

/// Actix web handler for `DELETE /questions/{question_id}/answers/{answer_id}`.
///
/// # Returns
/// - `200 OK` with the updated `Question`.
/// - `200 OK` with an empty value if the question does not exist.
pub async fn process(
    path: web::Path<(String, String)>,
    repository: web::Data<QuestionRepository>,
) -> Result<HttpResponse, ApiError> {
    let (question_id, answer_id) = path.into_inner();
    let question = repository.delete_answer(&question_id, &answer_id).await?;
    Ok(json_or_empty(question))
}
