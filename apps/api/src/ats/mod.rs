// ATS scoring engine: keyword extraction, coverage scoring, suggestion parsing.
// The only LLM call goes through llm_client::TextCompletion.

pub mod handlers;
pub mod keywords;
pub mod policy;
pub mod prompts;
pub mod scorer;
pub mod suggestions;

pub use keywords::{extract_keywords, KeywordExtractor};
pub use policy::AtsPolicy;
pub use scorer::{score_resume, ScoreRequest, ScoreResult};
