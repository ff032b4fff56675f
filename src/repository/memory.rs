use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    models::{
        choice::{Choice, NewChoice},
        question::{NewQuestion, Question},
    },
    policy,
};

use super::{QuestionRepository, RepoError};

#[derive(Default)]
struct Store {
    questions: BTreeMap<i64, Question>,
    choices: BTreeMap<i64, Choice>,
    last_question_id: i64,
    last_choice_id: i64,
}

/// In-process `QuestionRepository`, used by tests and for running without a database.
#[derive(Default)]
pub struct MemoryQuestionRepository {
    store: RwLock<Store>,
}

impl MemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionRepository for MemoryQuestionRepository {
    async fn list_published(
        &self,
        now: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Question>, RepoError> {
        let store = self.store.read().await;
        let mut questions: Vec<Question> = store
            .questions
            .values()
            .filter(|q| policy::is_publicly_visible(q.pub_date, now))
            .cloned()
            .collect();

        questions.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(b.id.cmp(&a.id)));
        questions.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(questions)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, RepoError> {
        Ok(self.store.read().await.questions.get(&id).cloned())
    }

    async fn create_question(&self, params: NewQuestion) -> Result<Question, RepoError> {
        let mut store = self.store.write().await;
        store.last_question_id += 1;

        let question = Question {
            id: store.last_question_id,
            question_text: params.question_text,
            pub_date: params.pub_date,
        };
        store.questions.insert(question.id, question.clone());

        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        if store.questions.remove(&id).is_none() {
            return Ok(false);
        }
        store.choices.retain(|_, c| c.question_id != id);

        Ok(true)
    }

    async fn count_questions(&self) -> Result<i64, RepoError> {
        Ok(self.store.read().await.questions.len() as i64)
    }

    async fn list_choices(&self, question_id: i64) -> Result<Vec<Choice>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .choices
            .values()
            .filter(|c| c.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn count_choices(&self, question_id: i64) -> Result<i64, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .choices
            .values()
            .filter(|c| c.question_id == question_id)
            .count() as i64)
    }

    async fn add_choice(&self, question_id: i64, params: NewChoice) -> Result<Choice, RepoError> {
        let mut store = self.store.write().await;
        if !store.questions.contains_key(&question_id) {
            return Err(RepoError::NotFound);
        }
        store.last_choice_id += 1;

        let choice = Choice {
            id: store.last_choice_id,
            question_id,
            choice_text: params.choice_text,
            votes: 0,
        };
        store.choices.insert(choice.id, choice.clone());

        Ok(choice)
    }

    async fn vote(&self, question_id: i64, choice_id: i64) -> Result<Option<Choice>, RepoError> {
        let mut store = self.store.write().await;
        Ok(store
            .choices
            .get_mut(&choice_id)
            .filter(|c| c.question_id == question_id)
            .map(|c| {
                c.votes += 1;
                c.clone()
            }))
    }
}
