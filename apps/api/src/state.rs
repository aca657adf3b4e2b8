use std::sync::Arc;

use crate::ats::AtsPolicy;
use crate::llm_client::TextCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text-completion backend. Production: `GeminiClient`.
    pub llm: Arc<dyn TextCompletion>,
    pub policy: AtsPolicy,
}
