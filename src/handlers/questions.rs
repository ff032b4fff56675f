// src/handlers/questions.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        choice::{CreateChoiceRequest, NewChoice},
        question::{CreateQuestionRequest, NewQuestion},
    },
    repository::{QuestionRepository, RepoError},
    utils::html::clean_text,
};

/// Strips markup from already length-validated input. Input that was nothing
/// but markup is rejected.
fn sanitize(field: &str, raw: &str) -> Result<String, AppError> {
    let text = clean_text(raw);
    if text.is_empty() {
        return Err(AppError::BadRequest(format!(
            "{}: must contain text, not only markup",
            field
        )));
    }
    Ok(text)
}

/// Creates a new question. `pub_date` defaults to now; a future date schedules it.
pub async fn create_question(
    State(repo): State<Arc<dyn QuestionRepository>>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }
    let question_text = sanitize("question_text", &payload.question_text)?;

    let now = Utc::now();
    let question = repo
        .create_question(NewQuestion {
            question_text,
            pub_date: payload.pub_date.unwrap_or(now),
        })
        .await?;

    tracing::info!(question_id = question.id, pub_date = %question.pub_date, "Question created");

    Ok((StatusCode::CREATED, Json(question.to_view(now))))
}

/// Adds a choice to a question. The question does not need to be published yet.
pub async fn add_choice(
    State(repo): State<Arc<dyn QuestionRepository>>,
    Path(id): Path<i64>,
    Json(payload): Json<CreateChoiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let choice_text = sanitize("choice_text", &payload.choice_text)?;

    let choice = repo
        .add_choice(id, NewChoice { choice_text })
        .await
        .map_err(|e| match e {
            RepoError::NotFound => AppError::NotFound("Question not found".to_string()),
            other => other.into(),
        })?;

    Ok((StatusCode::CREATED, Json(choice)))
}

/// Deletes a question and its choices.
pub async fn delete_question(
    State(repo): State<Arc<dyn QuestionRepository>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !repo.delete_question(id).await? {
        return Err(AppError::NotFound("Question not found".to_string()));
    }

    tracing::info!(question_id = id, "Question deleted");

    Ok(StatusCode::NO_CONTENT)
}
