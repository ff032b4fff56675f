use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::{
    choice::{Choice, NewChoice},
    question::{NewQuestion, Question},
};

use super::{QuestionRepository, RepoError};

/// `QuestionRepository` backed by PostgreSQL.
#[derive(Clone)]
pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn list_published(
        &self,
        now: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Question>, RepoError> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question_text, pub_date
            FROM questions
            WHERE pub_date <= $1
            ORDER BY pub_date DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(now)
        .bind(limit)
        .fetch_all(self.pool())
        .await
        .map_err(|e| {
            tracing::error!("Failed to list published questions: {:?}", e);
            RepoError::from_persistence(e)
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, RepoError> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question_text, pub_date FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(RepoError::from_persistence)
    }

    async fn create_question(&self, params: NewQuestion) -> Result<Question, RepoError> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question_text, pub_date)
            VALUES ($1, $2)
            RETURNING id, question_text, pub_date
            "#,
        )
        .bind(params.question_text)
        .bind(params.pub_date)
        .fetch_one(self.pool())
        .await
        .map_err(|e| {
            tracing::error!("Failed to create question: {:?}", e);
            RepoError::from_persistence(e)
        })
    }

    async fn delete_question(&self, id: i64) -> Result<bool, RepoError> {
        // Choices go with it through ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(RepoError::from_persistence)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_questions(&self) -> Result<i64, RepoError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(self.pool())
            .await
            .map_err(RepoError::from_persistence)
    }

    async fn list_choices(&self, question_id: i64) -> Result<Vec<Choice>, RepoError> {
        sqlx::query_as::<_, Choice>(
            r#"
            SELECT id, question_id, choice_text, votes
            FROM choices
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(question_id)
        .fetch_all(self.pool())
        .await
        .map_err(RepoError::from_persistence)
    }

    async fn count_choices(&self, question_id: i64) -> Result<i64, RepoError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM choices WHERE question_id = $1")
            .bind(question_id)
            .fetch_one(self.pool())
            .await
            .map_err(RepoError::from_persistence)
    }

    async fn add_choice(&self, question_id: i64, params: NewChoice) -> Result<Choice, RepoError> {
        // Insert only when the parent exists so a missing question maps to NotFound
        // instead of a foreign key violation.
        sqlx::query_as::<_, Choice>(
            r#"
            INSERT INTO choices (question_id, choice_text)
            SELECT id, $2 FROM questions WHERE id = $1
            RETURNING id, question_id, choice_text, votes
            "#,
        )
        .bind(question_id)
        .bind(params.choice_text)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| {
            tracing::error!("Failed to add choice: {:?}", e);
            RepoError::from_persistence(e)
        })?
        .ok_or(RepoError::NotFound)
    }

    async fn vote(&self, question_id: i64, choice_id: i64) -> Result<Option<Choice>, RepoError> {
        sqlx::query_as::<_, Choice>(
            r#"
            UPDATE choices
            SET votes = votes + 1
            WHERE id = $1 AND question_id = $2
            RETURNING id, question_id, choice_text, votes
            "#,
        )
        .bind(choice_id)
        .bind(question_id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| {
            tracing::error!("Failed to record vote: {:?}", e);
            RepoError::from_persistence(e)
        })
    }
}
