use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::drafting::{draft_section, DraftRequest, DraftResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /generate-content
pub async fn handle_generate_content(
    State(state): State<AppState>,
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<Json<DraftResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let response = draft_section(&request, state.llm.as_ref()).await?;

    Ok(Json(response))
}
