use serde::{Deserialize, Serialize};

/// An answer nested under exactly one [`Question`](crate::model::question::Question).
///
/// The `id` is only unique among the answers of the same question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: String, // UUID
    pub author: String,
    pub summary: String,
}
