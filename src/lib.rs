//! advisor-insights
//!
//! A small web service backing the advisor dashboard's analysis features.
//! It maps a `(feature, input)` pair to one of six fixed prompt templates,
//! submits the rendered prompt to Google's Gemini API, and returns the
//! response coerced into JSON when possible, raw text otherwise.

pub mod adapters;
pub mod analysis;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod ports;
