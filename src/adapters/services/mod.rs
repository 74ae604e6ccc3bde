//! External service adapters
//!
//! This module contains adapters for external APIs, currently the
//! LLM (Large Language Model) generation service.

pub mod llm;
