//! ATS scoring: keyword coverage of a job description by a resume.
//!
//! Flow: extract keywords from both texts → partition the JD keywords into
//! matched / missing → score → one completion call for suggestions → parse.
//!
//! score = round(100 × matched / jd_keywords), 0 when the JD has no keywords,
//! `default_score` when no JD was supplied. Matched / missing lists are capped
//! only after the score is computed.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::ats::keywords::KeywordExtractor;
use crate::ats::policy::AtsPolicy;
use crate::ats::prompts::{build_general_prompt, build_targeted_prompt};
use crate::ats::suggestions::parse_suggestions;
use crate::errors::AppError;
use crate::llm_client::TextCompletion;

/// Input to a scoring call. Missing or non-string fields become empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub resume_text: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub job_description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub experience_level: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company_name: String,
}

/// Final result returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: u32, // 0 – 100
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Outcome of the pure matching step, before any truncation.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordCoverage {
    pub job_keywords: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub score: u32,
}

/// Partitions the JD keywords by presence in the resume's keyword list.
pub fn match_keywords(
    job_description: &str,
    resume_text: &str,
    extractor: &KeywordExtractor,
) -> KeywordCoverage {
    let job_keywords = extractor.extract(job_description);
    let resume_keywords = extractor.extract(resume_text);
    let resume_set: HashSet<&str> = resume_keywords.iter().map(String::as_str).collect();

    let (matched, missing): (Vec<String>, Vec<String>) = job_keywords
        .iter()
        .cloned()
        .partition(|k| resume_set.contains(k.as_str()));

    let score = coverage_score(matched.len(), job_keywords.len());

    KeywordCoverage {
        job_keywords,
        matched,
        missing,
        score,
    }
}

fn coverage_score(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((matched as f64 / total as f64) * 100.0).round() as u32
}

/// Scores a resume and asks the completion service for improvement suggestions.
///
/// Makes exactly one completion call. A failed call is returned as
/// `AppError::Llm`; no partial result is produced.
pub async fn score_resume(
    request: &ScoreRequest,
    policy: &AtsPolicy,
    llm: &dyn TextCompletion,
) -> Result<ScoreResult, AppError> {
    let resume_excerpt = truncate_chars(&request.resume_text, policy.prompt_resume_chars);

    let (score, mut matched, mut missing, prompt) = if request.job_description.trim().is_empty()
    {
        let prompt = build_general_prompt(
            &request.experience_level,
            resume_excerpt,
            policy.max_suggestions,
        );
        (policy.default_score, Vec::new(), Vec::new(), prompt)
    } else {
        let extractor = KeywordExtractor::from_policy(policy);
        let coverage = match_keywords(&request.job_description, &request.resume_text, &extractor);
        debug!(
            "Keyword coverage: {}/{} JD keywords matched",
            coverage.matched.len(),
            coverage.job_keywords.len()
        );
        let prompt = build_targeted_prompt(
            &request.experience_level,
            &request.company_name,
            &request.job_description,
            resume_excerpt,
            &coverage.missing,
            policy.max_suggestions,
        );
        (coverage.score, coverage.matched, coverage.missing, prompt)
    };

    let raw = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("ATS suggestions failed: {e}")))?;

    let suggestions = parse_suggestions(&raw, policy.max_suggestions);

    matched.truncate(policy.max_reported_keywords);
    missing.truncate(policy.max_reported_keywords);

    info!(
        "ATS score computed: score={}, matched={}, missing={}",
        score,
        matched.len(),
        missing.len()
    );

    Ok(ScoreResult {
        score,
        matched_keywords: matched,
        missing_keywords: missing,
        suggestions,
    })
}

/// Returns at most the first `max_chars` characters, never splitting one.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Accepts any JSON value; only strings are kept, everything else is empty.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}
