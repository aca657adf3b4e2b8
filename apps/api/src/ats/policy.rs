use serde::{Deserialize, Serialize};

/// Policy constants for keyword extraction and ATS scoring.
///
/// Every limit the engine applies lives here so a deployment can override it
/// (see `Config::from_env`) and tests can pin it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsPolicy {
    /// Tokens must be strictly longer than this to count as keywords.
    pub min_keyword_len: usize,
    /// Size of the ranked keyword list per document.
    pub max_keywords: usize,
    /// Cap on matched / missing keywords returned to the caller.
    pub max_reported_keywords: usize,
    /// Cap on parsed suggestions; also the count requested in prompts.
    pub max_suggestions: usize,
    /// Resume text is cut to this many characters before it enters a prompt.
    pub prompt_resume_chars: usize,
    /// Score reported when no job description is supplied.
    pub default_score: u32,
}

impl Default for AtsPolicy {
    fn default() -> Self {
        Self {
            min_keyword_len: 3,
            max_keywords: 30,
            max_reported_keywords: 15,
            max_suggestions: 5,
            prompt_resume_chars: 2000,
            default_score: 75,
        }
    }
}
