// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{polls, questions},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Public poll pages (index, detail, results, vote).
/// * Question management (create, add choice, delete).
/// * Global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let poll_routes = Router::new()
        .route("/", get(polls::index))
        .route("/{id}", get(polls::detail))
        .route("/{id}/results", get(polls::results))
        .route("/{id}/vote", post(polls::vote));

    let question_routes = Router::new()
        .route("/", post(questions::create_question))
        .route("/{id}", delete(questions::delete_question))
        .route("/{id}/choices", post(questions::add_choice));

    Router::new()
        .nest("/api/polls", poll_routes)
        .nest("/api/questions", question_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
