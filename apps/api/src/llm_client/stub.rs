//! Deterministic `TextCompletion` stand-in for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, TextCompletion};

pub struct StubCompletion {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl StubCompletion {
    /// Always answers with `reply`.
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always fails as an unavailable upstream would.
    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextCompletion for StubCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "upstream unavailable".to_string(),
        })
    }
}
