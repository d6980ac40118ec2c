use crate::model::answer::Answer;
use crate::model::question::Question;
use serde::{Deserialize, Serialize};

/// Request payload for creating or replacing a question.
/// Carries every field of a [`Question`] except its id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewQuestion {
    pub author: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<Answer>>,
}

impl NewQuestion {
    /// Builds the stored question, attaching the given id.
    pub fn with_id(self, id: String) -> Question {
        Question {
            id,
            author: self.author,
            summary: self.summary,
            answers: self.answers.unwrap_or_default(),
        }
    }
}

/// Request payload for creating or replacing an answer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewAnswer {
    pub author: String,
    pub summary: String,
}

impl NewAnswer {
    pub fn with_id(self, id: String) -> Answer {
        Answer {
            id,
            author: self.author,
            summary: self.summary,
        }
    }
}
