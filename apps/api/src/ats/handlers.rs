//! Axum route handlers for the ATS API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::ats::keywords::KeywordExtractor;
use crate::ats::scorer::{lenient_text, score_resume, ScoreRequest, ScoreResult};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

/// POST /ats-score
///
/// Scores a resume against an optional job description and returns
/// matched / missing keywords plus improvement suggestions.
pub async fn handle_ats_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResult>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let result = score_resume(&request, &state.policy, state.llm.as_ref()).await?;

    Ok(Json(result))
}

/// POST /api/v1/keywords
///
/// Returns the ranked keyword list for a text (used for highlighting).
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    payload: Result<Json<KeywordsRequest>, JsonRejection>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let keywords = KeywordExtractor::from_policy(&state.policy).extract(&request.text);

    Ok(Json(KeywordsResponse { keywords }))
}
