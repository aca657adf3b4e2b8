use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::ats::AtsPolicy;
use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
///
/// `GEMINI_API_KEY` is optional: the server starts without it and the
/// LLM-backed routes fail with 503 until it is set.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub port: u16,
    pub rust_log: String,
    pub ats: AtsPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            port: parse_or(&get, "PORT", 3000)?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            ats: policy_from(&get)?,
        })
    }
}

fn policy_from(get: &impl Fn(&str) -> Option<String>) -> Result<AtsPolicy> {
    let defaults = AtsPolicy::default();
    let policy = AtsPolicy {
        min_keyword_len: parse_or(get, "ATS_MIN_KEYWORD_LEN", defaults.min_keyword_len)?,
        max_keywords: parse_or(get, "ATS_MAX_KEYWORDS", defaults.max_keywords)?,
        max_reported_keywords: parse_or(
            get,
            "ATS_MAX_REPORTED_KEYWORDS",
            defaults.max_reported_keywords,
        )?,
        max_suggestions: parse_or(get, "ATS_MAX_SUGGESTIONS", defaults.max_suggestions)?,
        prompt_resume_chars: parse_or(
            get,
            "ATS_PROMPT_RESUME_CHARS",
            defaults.prompt_resume_chars,
        )?,
        default_score: parse_or(get, "ATS_DEFAULT_SCORE", defaults.default_score)?,
    };

    if policy.default_score > 100 {
        bail!("ATS_DEFAULT_SCORE must be between 0 and 100");
    }

    Ok(policy)
}

fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
