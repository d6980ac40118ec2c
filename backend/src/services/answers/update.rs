use crate::error::ApiError;
use crate::repository::QuestionRepository;
use crate::services::{body_value, json_or_empty, Body};
use crate::validation;
use actix_web::{web, HttpResponse};

/// Actix web handler for `PUT /questions/{question_id}/answers/{answer_id}`.
///
/// # Returns
/// - `200 OK` with the replacement `Answer`, also when no answer had that id.
/// - `200 OK` with an empty value if the question does not exist.
/// - `422 Unprocessable Entity` if the body is not a valid answer.
pub async fn process(
    path: web::Path<(String, String)>,
    payload: Body,
    repository: web::Data<QuestionRepository>,
) -> Result<HttpResponse, ApiError> {
    let (question_id, answer_id) = path.into_inner();
    let data = validation::new_answer(body_value(payload))?;
    let answer = repository
        .update_answer(&question_id, &answer_id, data)
        .await?;
    Ok(json_or_empty(answer))
}
