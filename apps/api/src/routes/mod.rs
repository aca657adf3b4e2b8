pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats;
use crate::drafting::handlers as drafting;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Paths kept compatible with the existing frontend
        .route("/ats-score", post(ats::handle_ats_score))
        .route("/generate-content", post(drafting::handle_generate_content))
        .route("/api/v1/keywords", post(ats::handle_extract_keywords))
        .fallback(not_found)
        .with_state(state)
}
