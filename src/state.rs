use std::sync::Arc;

use crate::config::Config;
use crate::repository::QuestionRepository;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<dyn QuestionRepository>,
    pub config: Config,
}

impl FromRef<AppState> for Arc<dyn QuestionRepository> {
    fn from_ref(state: &AppState) -> Self {
        state.questions.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
