use super::{storage, RepositoryError};
use common::model::answer::Answer;
use common::model::question::Question;
use common::requests::{NewAnswer, NewQuestion};
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Read-modify-write access to the question collection stored in one JSON file.
///
/// The repository keeps no data between calls: every operation loads the file
/// again. Clones share the same lock, so within one process reads run
/// concurrently while each mutation holds the file exclusively for its whole
/// load/change/save cycle.
#[derive(Clone, Debug)]
pub struct QuestionRepository {
    path: PathBuf,
    lock: Arc<RwLock<()>>,
}

impl QuestionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(RwLock::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All questions in insertion order.
    pub async fn list_questions(&self) -> Result<Vec<Question>, RepositoryError> {
        let _guard = self.lock.read().await;
        storage::load(&self.path).await
    }

    pub async fn get_question(&self, question_id: &str) -> Result<Option<Question>, RepositoryError> {
        let questions = self.list_questions().await?;
        Ok(questions.into_iter().find(|q| q.id == question_id))
    }

    /// Appends a new question under a freshly generated id.
    pub async fn add_question(&self, data: NewQuestion) -> Result<Question, RepositoryError> {
        let _guard = self.lock.write().await;
        let mut questions = storage::load(&self.path).await?;

        let id = fresh_id(|candidate| questions.iter().any(|q| q.id == candidate));
        let question = data.with_id(id);
        questions.push(question.clone());

        storage::save(&self.path, &questions).await?;
        debug!("Added question {}", question.id);
        Ok(question)
    }

    /// Replaces every field of the question except its id.
    ///
    /// An unknown id leaves the collection as it is (it is still written back)
    /// and the would-be replacement is returned.
    pub async fn update_question(
        &self,
        question_id: &str,
        data: NewQuestion,
    ) -> Result<Question, RepositoryError> {
        let _guard = self.lock.write().await;
        let mut questions = storage::load(&self.path).await?;

        let question = data.with_id(question_id.to_string());
        match questions.iter_mut().find(|q| q.id == question_id) {
            Some(existing) => {
                *existing = question.clone();
                debug!("Updated question {question_id}");
            }
            None => debug!("Question {question_id} not found, nothing updated"),
        }

        storage::save(&self.path, &questions).await?;
        Ok(question)
    }

    /// Removes the question and returns it. Deleting an absent id is a no-op.
    pub async fn delete_question(&self, question_id: &str) -> Result<Option<Question>, RepositoryError> {
        let _guard = self.lock.write().await;
        let mut questions = storage::load(&self.path).await?;

        let deleted = questions
            .iter()
            .position(|q| q.id == question_id)
            .map(|index| questions.remove(index));

        storage::save(&self.path, &questions).await?;
        if deleted.is_some() {
            debug!("Deleted question {question_id}");
        }
        Ok(deleted)
    }

    /// Answers of the question, `None` when the question does not exist.
    pub async fn get_answers(&self, question_id: &str) -> Result<Option<Vec<Answer>>, RepositoryError> {
        Ok(self.get_question(question_id).await?.map(|q| q.answers))
    }

    pub async fn get_answer(
        &self,
        question_id: &str,
        answer_id: &str,
    ) -> Result<Option<Answer>, RepositoryError> {
        Ok(self
            .get_question(question_id)
            .await?
            .and_then(|q| q.answer(answer_id).cloned()))
    }

    /// Appends a new answer to the question and returns the updated question.
    pub async fn add_answer(
        &self,
        question_id: &str,
        data: NewAnswer,
    ) -> Result<Option<Question>, RepositoryError> {
        let updated = self
            .modify_question(question_id, |question| {
                let id = fresh_id(|candidate| question.answer_index(candidate).is_some());
                question.answers.push(data.with_id(id));
            })
            .await?;

        Ok(updated.map(|(question, ())| question))
    }

    /// Replaces the answer in place and returns it.
    ///
    /// Mirrors [`update_question`](Self::update_question): an unknown answer id
    /// changes nothing and the would-be replacement is returned.
    pub async fn update_answer(
        &self,
        question_id: &str,
        answer_id: &str,
        data: NewAnswer,
    ) -> Result<Option<Answer>, RepositoryError> {
        let updated = self
            .modify_question(question_id, |question| {
                let answer = data.with_id(answer_id.to_string());
                if let Some(index) = question.answer_index(answer_id) {
                    question.answers[index] = answer.clone();
                }
                answer
            })
            .await?;

        Ok(updated.map(|(_, answer)| answer))
    }

    /// Removes the answer and returns the updated question.
    pub async fn delete_answer(
        &self,
        question_id: &str,
        answer_id: &str,
    ) -> Result<Option<Question>, RepositoryError> {
        let updated = self
            .modify_question(question_id, |question| {
                if let Some(index) = question.answer_index(answer_id) {
                    question.answers.remove(index);
                }
            })
            .await?;

        Ok(updated.map(|(question, ())| question))
    }

    /// Applies `change` to the question with the given id and persists the collection.
    ///
    /// Holds the write lock for the whole cycle. Returns `None` without touching
    /// the file when the question does not exist.
    async fn modify_question<F, R>(
        &self,
        question_id: &str,
        change: F,
    ) -> Result<Option<(Question, R)>, RepositoryError>
    where
        F: FnOnce(&mut Question) -> R,
    {
        let _guard = self.lock.write().await;
        let mut questions = storage::load(&self.path).await?;

        let Some(question) = questions.iter_mut().find(|q| q.id == question_id) else {
            debug!("Question {question_id} not found, nothing changed");
            return Ok(None);
        };
        let outcome = change(&mut *question);
        let updated = question.clone();

        storage::save(&self.path, &questions).await?;
        debug!("Updated answers of question {question_id}");
        Ok(Some((updated, outcome)))
    }
}

/// A new UUID v4 that `taken` does not report as already in use.
fn fresh_id<F>(taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    loop {
        let id = Uuid::new_v4().to_string();
        if !taken(&id) {
            return id;
        }
    }
}
