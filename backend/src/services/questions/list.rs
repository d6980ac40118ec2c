use crate::error::ApiError;
use crate::repository::QuestionRepository;
use actix_web::{web, HttpResponse};

/// Actix web handler for `GET /questions`.
pub async fn process(repository: web::Data<QuestionRepository>) -> Result<HttpResponse, ApiError> {
    let questions = repository.list_questions().await?;
    Ok(HttpResponse::Ok().json(questions))
}
