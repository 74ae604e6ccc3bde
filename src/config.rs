//! Environment-driven configuration
//!
//! All settings come from the environment (optionally via a `.env` file
//! loaded in `main`):
//!
//! - `ANALYZE_BIND`        listen address, default `127.0.0.1:8787`
//! - `GEMINI_API_KEY`      Google API key; requests fail upstream without it
//! - `GEMINI_MODEL`        model name, default `gemini-3-flash-preview`
//! - `GEMINI_TEMPERATURE`  optional generation temperature
//! - `GEMINI_MAX_TOKENS`   optional output token cap

use crate::error::{AppError, Result};
use crate::ports::llm::{LlmConfig, DEFAULT_MODEL};
use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub gemini_api_key: String,
    pub llm: LlmConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind = env::var("ANALYZE_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("invalid ANALYZE_BIND: {}", e)))?;

        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let temperature = match env::var("GEMINI_TEMPERATURE") {
            Ok(raw) => Some(
                raw.parse::<f32>()
                    .map_err(|e| AppError::Config(format!("invalid GEMINI_TEMPERATURE: {}", e)))?,
            ),
            Err(_) => None,
        };

        let max_tokens = match env::var("GEMINI_MAX_TOKENS") {
            Ok(raw) => Some(
                raw.parse::<u32>()
                    .map_err(|e| AppError::Config(format!("invalid GEMINI_MAX_TOKENS: {}", e)))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            bind,
            gemini_api_key,
            llm: LlmConfig {
                model,
                temperature,
                max_tokens,
            },
        })
    }
}
