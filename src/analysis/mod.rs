//! Analysis dispatch
//!
//! Orchestrates one analysis request end-to-end: validate the request,
//! render the prompt for the requested feature, issue exactly one call to
//! the LLM service, and normalize the response. Validation failures are
//! reported before any network I/O.

pub mod normalize;

use crate::domain::models::{AnalysisResult, FeatureKind};
use crate::domain::PromptTemplates;
use crate::error::{AppError, Result};
use crate::ports::llm::{LlmConfig, LlmServicePort};
use std::sync::Arc;

pub use normalize::{normalize_response, strip_code_fences};

/// Stateless analysis dispatcher
///
/// Holds the LLM port and the generation settings; safe to share across
/// concurrent requests.
pub struct Analyzer {
    llm: Arc<dyn LlmServicePort>,
    config: LlmConfig,
}

impl Analyzer {
    pub fn new(llm: Arc<dyn LlmServicePort>, config: LlmConfig) -> Self {
        Self { llm, config }
    }

    /// Run one analysis request.
    ///
    /// `feature` and `input` are required; an absent or empty `feature`,
    /// an absent or whitespace-only `input`, or an unknown feature all
    /// fail fast with a client error and zero upstream calls.
    pub async fn analyze(
        &self,
        feature: Option<&str>,
        input: Option<&str>,
        secondary_input: Option<&str>,
    ) -> Result<AnalysisResult> {
        let feature = feature.filter(|f| !f.is_empty()).ok_or(AppError::MissingFields)?;
        let input = input
            .filter(|i| !i.trim().is_empty())
            .ok_or(AppError::MissingFields)?;

        let kind = FeatureKind::parse(feature)
            .ok_or_else(|| AppError::UnknownFeature(feature.to_string()))?;

        let prompt = PromptTemplates::render(kind, input, secondary_input);

        log::info!(
            "Running {} analysis via {} ({} input chars, expecting {})",
            kind,
            self.llm.provider_name(),
            input.len(),
            if kind.expects_json() { "JSON" } else { "prose" }
        );

        let raw = self.llm.generate_text(&prompt, &self.config).await?;

        Ok(normalize_response(&raw))
    }
}
