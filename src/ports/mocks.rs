//! Mock implementations for testing

use crate::error::{AppError, Result};
use crate::ports::llm::{LlmConfig, LlmServicePort};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock LLM service that replays a canned response or failure
///
/// Records every prompt it receives so tests can assert on call counts and
/// on exactly what would have been sent upstream.
#[derive(Clone, Default)]
pub struct MockLlm {
    response: Arc<Mutex<Option<String>>>,
    failure: Arc<Mutex<Option<String>>>,
    calls: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockLlm {
    /// Mock that succeeds with the given raw text.
    pub fn returning(text: &str) -> Self {
        let mock = Self::default();
        *mock.response.lock().unwrap() = Some(text.to_string());
        mock
    }

    /// Mock that fails with the given upstream detail.
    pub fn failing(detail: &str) -> Self {
        let mock = Self::default();
        *mock.failure.lock().unwrap() = Some(detail.to_string());
        mock
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmServicePort for MockLlm {
    async fn generate_text(&self, prompt: &str, _config: &LlmConfig) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(detail) = self.failure.lock().unwrap().clone() {
            return Err(AppError::Llm(detail));
        }
        Ok(self.response.lock().unwrap().clone().unwrap_or_default())
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        true
    }
}
