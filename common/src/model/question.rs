use crate::model::answer::Answer;
use serde::{Deserialize, Serialize};

/// A top-level entry of the persisted collection.
///
/// The backend stores every question as one element of a JSON array. The
/// `id` is generated server-side when the question is created and never
/// changes afterwards; updates replace every other field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String, // UUID
    pub author: String,
    pub summary: String,
    /// Stored questions written without an `answers` field read back as empty.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Question {
    /// Position of the answer with the given id, if any.
    pub fn answer_index(&self, answer_id: &str) -> Option<usize> {
        self.answers.iter().position(|answer| answer.id == answer_id)
    }

    pub fn answer(&self, answer_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|answer| answer.id == answer_id)
    }
}
