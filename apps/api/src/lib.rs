//! ATS API: keyword extraction, resume coverage scoring and LLM-backed
//! suggestions / section drafting behind an Axum router.

pub mod ats;
pub mod config;
pub mod drafting;
pub mod errors;
pub mod llm_client;
pub mod routes;
pub mod state;
