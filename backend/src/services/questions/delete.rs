use crate::error::ApiError;
use crate::repository::QuestionRepository;
use crate::services::json_or_empty;
use actix_web::{web, HttpResponse};
use log::info;

/// Actix web handler for `DELETE /questions/{question_id}`.
pub async fn process(
    question_id: web::Path<String>,
    repository: web::Data<QuestionRepository>,
) -> Result<HttpResponse, ApiError> {
    let deleted = repository.delete_question(&question_id).await?;
    if deleted.is_some() {
        info!("Question {} deleted", question_id);
    }
    Ok(json_or_empty(deleted))
}
