// src/handlers/polls.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};

use crate::{
    config::Config,
    error::AppError,
    models::{
        choice::VoteRequest,
        question::{DetailResponse, IndexResponse, Question, ResultsResponse},
    },
    repository::QuestionRepository,
};

const NO_POLLS_MESSAGE: &str = "No polls are available.";

/// Fetches a question that the public is allowed to see at `now`.
///
/// Missing and not-yet-published questions are indistinguishable to the caller:
/// both are reported as not found.
async fn find_visible_question(
    repo: &dyn QuestionRepository,
    id: i64,
    now: DateTime<Utc>,
) -> Result<Question, AppError> {
    repo.find_by_id(id)
        .await?
        .filter(|question| question.is_publicly_visible(now))
        .ok_or(AppError::NotFound("Question not found".to_string()))
}

async fn build_results(
    repo: &dyn QuestionRepository,
    question: &Question,
    now: DateTime<Utc>,
) -> Result<ResultsResponse, AppError> {
    let choices = repo.list_choices(question.id).await?;
    let total_votes = choices.iter().map(|c| c.votes).sum();

    Ok(ResultsResponse {
        question: question.to_view(now),
        choices,
        total_votes,
    })
}

/// Lists the latest published questions (most recent first).
pub async fn index(
    State(repo): State<Arc<dyn QuestionRepository>>,
    State(config): State<Config>,
) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let questions = repo
        .list_published(now, config.latest_questions_limit)
        .await?;

    let message = questions
        .is_empty()
        .then(|| NO_POLLS_MESSAGE.to_string());

    Ok(Json(IndexResponse {
        latest_question_list: questions.iter().map(|q| q.to_view(now)).collect(),
        message,
    }))
}

/// Shows a published question with its choices. Vote counts are left out.
pub async fn detail(
    State(repo): State<Arc<dyn QuestionRepository>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let question = find_visible_question(repo.as_ref(), id, now).await?;
    let choices = repo.list_choices(question.id).await?;

    Ok(Json(DetailResponse {
        question: question.to_view(now),
        choices: choices.into_iter().map(Into::into).collect(),
    }))
}

/// Shows the vote tally of a published question.
pub async fn results(
    State(repo): State<Arc<dyn QuestionRepository>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let question = find_visible_question(repo.as_ref(), id, now).await?;

    Ok(Json(build_results(repo.as_ref(), &question, now).await?))
}

/// Casts one vote for a choice of a published question and returns the new tally.
pub async fn vote(
    State(repo): State<Arc<dyn QuestionRepository>>,
    Path(id): Path<i64>,
    Json(payload): Json<VoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let question = find_visible_question(repo.as_ref(), id, now).await?;

    let no_choice = || AppError::BadRequest("You didn't select a choice.".to_string());

    let choice_id = payload.choice_id().ok_or_else(no_choice)?;
    let choice = repo
        .vote(question.id, choice_id)
        .await?
        .ok_or_else(no_choice)?;

    tracing::info!(
        question_id = question.id,
        choice_id = choice.id,
        votes = choice.votes,
        "Vote recorded"
    );

    Ok(Json(build_results(repo.as_ref(), &question, now).await?))
}
