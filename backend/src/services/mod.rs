//! HTTP surface of the application.
//!
//! `configure` wires the shared state, the JSON extractor settings, every route
//! scope and the fallback for unknown paths into an Actix `App`.

pub mod answers;
pub mod questions;

use crate::error::{ApiError, NOT_FOUND_MESSAGE};
use crate::repository::QuestionRepository;
use actix_web::web::{self, get, ServiceConfig};
use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// Request body of the write endpoints: JSON, or a flat urlencoded form whose
/// fields all arrive as strings.
pub(crate) type Body = web::Either<web::Json<Value>, web::Form<HashMap<String, String>>>;

/// The body as a JSON value, ready for validation.
pub(crate) fn body_value(body: Body) -> Value {
    match body {
        web::Either::Left(json) => json.into_inner(),
        web::Either::Right(form) => Value::Object(
            form.into_inner()
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect::<Map<String, Value>>(),
        ),
    }
}

/// Registers application data and all routes.
///
/// The answers scope goes first: the `/questions` scope would otherwise match
/// `/questions/{id}/answers` and answer it with a 404.
pub fn configure(repository: QuestionRepository) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(repository))
            .app_data(json_config())
            .route("/", get().to(welcome))
            .service(answers::configure_routes())
            .service(questions::configure_routes())
            .default_service(web::route().to(not_found));
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(1024 * 1024) // 1 MB
        .error_handler(|err, _req| ApiError::MalformedBody(err.to_string()).into())
}

async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Welcome to responder!" }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body(NOT_FOUND_MESSAGE)
}

/// `200 OK` with the value as JSON, or with an empty JSON array when there is
/// nothing to return. Absent entities are not reported as 404.
pub(crate) fn json_or_empty<T: Serialize>(value: Option<T>) -> HttpResponse {
    match value {
        Some(value) => HttpResponse::Ok().json(value),
        None => HttpResponse::Ok().json(json!([])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INTERNAL_ERROR_MESSAGE;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use tempfile::TempDir;

    const QUESTION_ID: &str = "2b5f3c1e-8c0e-4a4f-9d0a-6f1b2c3d4e5f";
    const ANSWER_ID: &str = "7a9e1d2c-3b4f-4e5a-8c6d-0f1e2d3c4b5a";

    fn first_question() -> Value {
        json!({
            "id": QUESTION_ID,
            "summary": "First Summary",
            "author": "First Author",
            "answers": [{ "id": ANSWER_ID, "author": "John", "summary": "Octopus" }]
        })
    }

    fn seeded_repository() -> (TempDir, QuestionRepository) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions-test.json");
        std::fs::write(&path, json!([first_question()]).to_string()).unwrap();
        (dir, QuestionRepository::new(path))
    }

    async fn call(repository: &QuestionRepository, request: test::TestRequest) -> ServiceResponse {
        let app = test::init_service(App::new().configure(configure(repository.clone()))).await;
        test::call_service(&app, request.to_request()).await
    }

    async fn call_json(repository: &QuestionRepository, request: test::TestRequest) -> (StatusCode, Value) {
        let response = call(repository, request).await;
        let status = response.status();
        (status, test::read_body_json(response).await)
    }

    #[actix_web::test]
    async fn root_greets() {
        let (_dir, repository) = seeded_repository();

        let (status, body) = call_json(&repository, test::TestRequest::get().uri("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Welcome to responder!" }));
    }

    #[actix_web::test]
    async fn invalid_question_is_rejected() {
        let (_dir, repository) = seeded_repository();

        let (status, body) = call_json(
            &repository,
            test::TestRequest::post()
                .uri("/questions")
                .set_json(json!({ "author": "", "summary": "Something", "answers": [] })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "\"author\" is not allowed to be empty");
    }

    #[actix_web::test]
    async fn valid_question_is_created() {
        let (_dir, repository) = seeded_repository();

        let (status, body) = call_json(
            &repository,
            test::TestRequest::post()
                .uri("/questions")
                .set_json(json!({ "author": "Sam", "summary": "with Frodo", "answers": [] })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["author"], "Sam");
        assert_eq!(body["summary"], "with Frodo");
        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));

        let (_, listed) = call_json(&repository, test::TestRequest::get().uri("/questions/")).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(2));
    }

    #[actix_web::test]
    async fn form_encoded_question_is_created() {
        let (_dir, repository) = seeded_repository();

        let (status, body) = call_json(
            &repository,
            test::TestRequest::post()
                .uri("/questions")
                .set_form([("author", "Sam"), ("summary", "with Frodo")]),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["author"], "Sam");
        assert_eq!(body["answers"], json!([]));

        let (status, body) = call_json(
            &repository,
            test::TestRequest::post()
                .uri("/questions")
                .set_form([("author", ""), ("summary", "with Frodo")]),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "\"author\" is not allowed to be empty");
    }

    #[actix_web::test]
    async fn duplicate_answer_ids_are_rejected() {
        let (_dir, repository) = seeded_repository();

        let (status, body) = call_json(
            &repository,
            test::TestRequest::put()
                .uri(&format!("/questions/{QUESTION_ID}"))
                .set_json(json!({
                    "author": "No",
                    "summary": "Nope",
                    "answers": [
                        { "id": "dup", "author": "John", "summary": "Octopus" },
                        { "id": "dup", "author": "Jane", "summary": "Squid" }
                    ]
                })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "\"answers[1]\" contains a duplicate value");

        let (_, question) = call_json(
            &repository,
            test::TestRequest::get().uri(&format!("/questions/{QUESTION_ID}")),
        )
        .await;
        assert_eq!(question, first_question());
    }

    #[actix_web::test]
    async fn malformed_body_is_a_bad_request() {
        let (_dir, repository) = seeded_repository();

        let response = call(
            &repository,
            test::TestRequest::post()
                .uri("/questions")
                .insert_header(("content-type", "application/json"))
                .set_payload("{not json"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn answers_are_validated_and_added() {
        let (_dir, repository) = seeded_repository();
        let uri = format!("/questions/{QUESTION_ID}/answers");

        let (status, body) = call_json(
            &repository,
            test::TestRequest::post()
                .uri(&uri)
                .set_json(json!({ "author": "James", "summary": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "\"summary\" is not allowed to be empty");

        let (status, body) = call_json(
            &repository,
            test::TestRequest::post()
                .uri(&uri)
                .set_json(json!({ "author": "John", "summary": "NotKennedy" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["answers"][1]["author"], "John");
        assert_eq!(body["answers"][1]["summary"], "NotKennedy");

        let (_, answers) = call_json(&repository, test::TestRequest::get().uri(&uri)).await;
        assert_eq!(answers.as_array().map(Vec::len), Some(2));
    }

    #[actix_web::test]
    async fn question_and_answer_are_updated() {
        let (_dir, repository) = seeded_repository();

        let (_, question) = call_json(
            &repository,
            test::TestRequest::put()
                .uri(&format!("/questions/{QUESTION_ID}"))
                .set_json(json!({
                    "author": "No",
                    "summary": "Nope",
                    "answers": [{ "id": ANSWER_ID, "author": "John", "summary": "Octopus" }]
                })),
        )
        .await;
        assert_eq!(question["id"], QUESTION_ID);
        assert_eq!(question["author"], "No");
        assert_eq!(question["summary"], "Nope");

        let (_, answer) = call_json(
            &repository,
            test::TestRequest::put()
                .uri(&format!("/questions/{QUESTION_ID}/answers/{ANSWER_ID}"))
                .set_json(json!({ "author": "No", "summary": "Nope" })),
        )
        .await;
        assert_eq!(answer, json!({ "id": ANSWER_ID, "author": "No", "summary": "Nope" }));
    }

    #[actix_web::test]
    async fn entities_are_fetched_by_id() {
        let (_dir, repository) = seeded_repository();

        let (_, question) = call_json(
            &repository,
            test::TestRequest::get().uri(&format!("/questions/{QUESTION_ID}")),
        )
        .await;
        assert_eq!(question, first_question());

        let (_, answer) = call_json(
            &repository,
            test::TestRequest::get().uri(&format!("/questions/{QUESTION_ID}/answers/{ANSWER_ID}")),
        )
        .await;
        assert_eq!(answer["id"], ANSWER_ID);
    }

    #[actix_web::test]
    async fn unknown_ids_give_empty_values() {
        let (_dir, repository) = seeded_repository();

        for uri in [
            "/questions/00000000-0000-4000-8000-000000000000".to_string(),
            "/questions/00000000-0000-4000-8000-000000000000/answers".to_string(),
            format!("/questions/{QUESTION_ID}/answers/00000000-0000-4000-8000-000000000000"),
        ] {
            let (status, body) = call_json(&repository, test::TestRequest::get().uri(&uri)).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, json!([]), "{uri}");
        }
    }

    #[actix_web::test]
    async fn answer_and_question_are_deleted() {
        let (_dir, repository) = seeded_repository();
        let answer_uri = format!("/questions/{QUESTION_ID}/answers/{ANSWER_ID}");

        let (_, question) =
            call_json(&repository, test::TestRequest::delete().uri(&answer_uri)).await;
        assert_eq!(question["answers"], json!([]));

        let (_, answers) = call_json(
            &repository,
            test::TestRequest::get().uri(&format!("/questions/{QUESTION_ID}/answers/")),
        )
        .await;
        assert_eq!(answers, json!([]));

        let (_, deleted) = call_json(
            &repository,
            test::TestRequest::delete().uri(&format!("/questions/{QUESTION_ID}")),
        )
        .await;
        assert_eq!(deleted["id"], QUESTION_ID);

        let (_, questions) = call_json(&repository, test::TestRequest::get().uri("/questions")).await;
        assert_eq!(questions, json!([]));

        let (status, again) = call_json(
            &repository,
            test::TestRequest::delete().uri(&format!("/questions/{QUESTION_ID}")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(again, json!([]));
    }

    #[actix_web::test]
    async fn storage_failure_is_a_generic_500() {
        let (dir, repository) = seeded_repository();
        std::fs::rename(repository.path(), dir.path().join("questions-error.json")).unwrap();

        let response = call(&repository, test::TestRequest::get().uri("/questions")).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = test::read_body(response).await;
        assert_eq!(&body[..], INTERNAL_ERROR_MESSAGE.as_bytes());
    }

    #[actix_web::test]
    async fn unknown_route_is_a_404() {
        let (_dir, repository) = seeded_repository();

        let response = call(&repository, test::TestRequest::get().uri("/notExistingRoute")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = test::read_body(response).await;
        assert_eq!(&body[..], NOT_FOUND_MESSAGE.as_bytes());
    }
}
