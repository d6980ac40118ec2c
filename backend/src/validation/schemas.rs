use super::{Field, ObjectSchema};
use crate::error::ApiError;
use common::requests::{NewAnswer, NewQuestion};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Body of `POST`/`PUT` on answers.
pub static ANSWER: ObjectSchema = ObjectSchema {
    fields: &[Field::text("author"), Field::text("summary")],
};

/// Answers embedded in a question body keep their ids.
static STORED_ANSWER: ObjectSchema = ObjectSchema {
    fields: &[
        Field::id("id"),
        Field::text("author"),
        Field::text("summary"),
    ],
};

/// Body of `POST`/`PUT` on questions.
pub static QUESTION: ObjectSchema = ObjectSchema {
    fields: &[
        Field::text("author"),
        Field::text("summary"),
        Field::optional_unique_list("answers", &STORED_ANSWER, "id"),
    ],
};

pub fn new_question(body: Value) -> Result<NewQuestion, ApiError> {
    parse(&QUESTION, body)
}

pub fn new_answer(body: Value) -> Result<NewAnswer, ApiError> {
    parse(&ANSWER, body)
}

fn parse<T: DeserializeOwned>(schema: &ObjectSchema, body: Value) -> Result<T, ApiError> {
    schema
        .validate(&body)
        .map_err(|errors| ApiError::Validation(errors.join(",")))?;

    serde_json::from_value(body).map_err(|e| ApiError::Validation(e.to_string()))
}
