// src/models/choice.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'choices' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
    pub votes: i64,
}

/// Parameters for inserting a choice.
#[derive(Debug, Clone)]
pub struct NewChoice {
    pub choice_text: String,
}

/// DTO for adding a choice to a question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateChoiceRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Choice text length must be between 1 and 200 chars"
    ))]
    pub choice_text: String,
}

/// DTO for casting a vote.
///
/// `choice` is kept as raw JSON so that a missing or malformed selection is
/// reported as "no choice selected" rather than as a deserialization failure.
/// Form-style numeric strings (`"3"`) are accepted.
#[derive(Debug, Default, Deserialize)]
pub struct VoteRequest {
    #[serde(default)]
    pub choice: Option<serde_json::Value>,
}

impl VoteRequest {
    pub fn choice_id(&self) -> Option<i64> {
        match self.choice.as_ref()? {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(body: serde_json::Value) -> VoteRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn choice_id_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse(json!({ "choice": 7 })).choice_id(), Some(7));
        assert_eq!(parse(json!({ "choice": " 7 " })).choice_id(), Some(7));
    }

    #[test]
    fn choice_id_is_none_for_missing_or_malformed_selection() {
        assert_eq!(parse(json!({})).choice_id(), None);
        assert_eq!(parse(json!({ "choice": null })).choice_id(), None);
        assert_eq!(parse(json!({ "choice": "abc" })).choice_id(), None);
        assert_eq!(parse(json!({ "choice": 1.5 })).choice_id(), None);
        assert_eq!(parse(json!({ "choice": [1] })).choice_id(), None);
    }
}
