use crate::error::ApiError;
use crate::repository::QuestionRepository;
use crate::services::{body_value, Body};
use crate::validation;
use actix_web::{web, HttpResponse};
use log::info;

/// Actix web handler for `POST /questions`.
pub async fn process(
    payload: Body,
    repository: web::Data<QuestionRepository>,
) -> Result<HttpResponse, ApiError> {
    let data = validation::new_question(body_value(payload))?;
    let question = repository.add_question(data).await?;
    info!("Question {} created", question.id);
    Ok(HttpResponse::Ok().json(question))
}
