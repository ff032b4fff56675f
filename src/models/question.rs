// src/models/question.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::{models::choice::Choice, policy};

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text shown to voters.
    pub question_text: String,

    /// Moment the question becomes publicly visible.
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// Whether the question was published within the last day, relative to `now`.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        policy::is_recently_published(self.pub_date, now)
    }

    /// Whether the question may be listed or looked up by the public at `now`.
    pub fn is_publicly_visible(&self, now: DateTime<Utc>) -> bool {
        policy::is_publicly_visible(self.pub_date, now)
    }

    /// Builds the client-facing view, evaluating the publication rules at `now`.
    pub fn to_view(&self, now: DateTime<Utc>) -> QuestionView {
        QuestionView {
            id: self.id,
            question_text: self.question_text.clone(),
            pub_date: self.pub_date,
            was_published_recently: self.was_published_recently(now),
        }
    }
}

/// DTO for sending a question to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

/// Index page payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    pub latest_question_list: Vec<QuestionView>,
    /// Set only when there is nothing to list.
    pub message: Option<String>,
}

/// Choice as shown on the detail page (vote counts stay hidden until results).
#[derive(Debug, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub id: i64,
    pub choice_text: String,
}

impl From<Choice> for ChoiceOption {
    fn from(choice: Choice) -> Self {
        Self {
            id: choice.id,
            choice_text: choice.choice_text,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DetailResponse {
    pub question: QuestionView,
    pub choices: Vec<ChoiceOption>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub question: QuestionView,
    pub choices: Vec<Choice>,
    pub total_votes: i64,
}

/// Parameters for inserting a question.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Question text length must be between 1 and 200 chars"
    ))]
    pub question_text: String,

    /// Defaults to the time of the request.
    pub pub_date: Option<DateTime<Utc>>,
}
