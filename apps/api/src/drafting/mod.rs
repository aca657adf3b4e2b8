//! Resume section drafting: builds a section prompt and forwards it to the
//! completion service. No post-processing: the service text is returned as-is.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ats::scorer::lenient_text;
use crate::drafting::prompts::build_draft_prompt;
use crate::errors::AppError;
use crate::llm_client::TextCompletion;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Summary,
    Skills,
    Experience,
    Project,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    #[serde(rename = "type", default)]
    pub section: SectionKind,
    #[serde(default, deserialize_with = "lenient_text")]
    pub job_description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub experience_level: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub job_title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub project_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub technologies: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftResponse {
    pub content: String,
}

pub async fn draft_section(
    request: &DraftRequest,
    llm: &dyn TextCompletion,
) -> Result<DraftResponse, AppError> {
    let prompt = build_draft_prompt(request);

    let content = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Section drafting failed: {e}")))?;

    info!("Drafted {:?} section ({} chars)", request.section, content.len());

    Ok(DraftResponse { content })
}
