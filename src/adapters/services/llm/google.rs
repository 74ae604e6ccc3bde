//! Google Gemini LLM service adapter
//!
//! Implements the LlmServicePort for Google's Gemini generateContent API.

use crate::error::{AppError, Result};
use crate::ports::llm::{LlmConfig, LlmServicePort};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const GOOGLE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini service implementation
pub struct GoogleService {
    client: Client,
    api_key: String,
}

#[derive(Debug, serde::Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, serde::Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, serde::Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, serde::Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, serde::Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, serde::Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, serde::Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Debug, serde::Deserialize)]
struct ResponsePart {
    text: String,
}

impl GoogleService {
    /// Create a new Google Gemini service with the given API key
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, api_key }
    }
}

#[async_trait]
impl LlmServicePort for GoogleService {
    async fn generate_text(&self, prompt: &str, config: &LlmConfig) -> Result<String> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: match (config.temperature, config.max_tokens) {
                (None, None) => None,
                (temperature, max_tokens) => Some(GenerationConfig {
                    temperature,
                    max_output_tokens: max_tokens,
                }),
            },
        };

        // Accept either "gemini-pro" or the full "models/gemini-pro" path
        let model_name = if config.model.starts_with("models/") {
            config.model.clone()
        } else {
            format!("models/{}", config.model)
        };

        log::info!("Calling Google generateContent with model: {}", model_name);

        let response = self
            .client
            .post(format!(
                "{}/{}:generateContent",
                GOOGLE_API_BASE, model_name
            ))
            .query(&[("key", &self.api_key)])
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("GenerateContent request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Llm(format!(
                "GenerateContent failed with {}: {}",
                status, error_text
            )));
        }

        let content_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse content response: {}", e)))?;

        let content = content_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| AppError::Llm("No candidates returned".to_string()))?;

        log::info!(
            "Google completion successful, generated {} characters",
            content.len()
        );

        Ok(content)
    }

    fn provider_name(&self) -> &str {
        "google"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_service_creation() {
        let service = GoogleService::new("test_api_key".to_string());
        assert_eq!(service.provider_name(), "google");
        assert!(service.is_configured());
    }

    #[test]
    fn test_google_service_not_configured() {
        let service = GoogleService::new("".to_string());
        assert!(!service.is_configured());
    }
}
