//! Persistence seam for questions and their choices.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{
    choice::{Choice, NewChoice},
    question::{NewQuestion, Question},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryQuestionRepository;
pub use postgres::PgQuestionRepository;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("resource not found")]
    NotFound,
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Questions with `pub_date <= now`, most recent first, at most `limit`.
    async fn list_published(
        &self,
        now: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Question>, RepoError>;

    /// Looks a question up regardless of its publication date.
    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, RepoError>;

    async fn create_question(&self, params: NewQuestion) -> Result<Question, RepoError>;

    /// Removes the question together with its choices. Returns whether anything was deleted.
    async fn delete_question(&self, id: i64) -> Result<bool, RepoError>;

    async fn count_questions(&self) -> Result<i64, RepoError>;

    async fn list_choices(&self, question_id: i64) -> Result<Vec<Choice>, RepoError>;

    async fn count_choices(&self, question_id: i64) -> Result<i64, RepoError>;

    /// Fails with [`RepoError::NotFound`] when the question does not exist.
    async fn add_choice(&self, question_id: i64, params: NewChoice) -> Result<Choice, RepoError>;

    /// Increments the vote counter of `choice_id` if it belongs to `question_id`.
    async fn vote(&self, question_id: i64, choice_id: i64) -> Result<Option<Choice>, RepoError>;
}
