/// Error types for the advisor insights service
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required fields: feature and input")]
    MissingFields,

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("LLM service error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for request-validation failures the caller can fix.
    ///
    /// These surface as HTTP 400 with a specific message; everything else
    /// surfaces as HTTP 500 with a fixed generic one.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::MissingFields | AppError::UnknownFeature(_))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
