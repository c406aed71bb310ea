//! # Brain Module
//!
//! Fast, non-LLM analysis system for AgroVoice.
//! Classifies user input BEFORE any LLM or database call.
//!
//! ## Components
//! - `language`: Script-based language detection with Devanagari disambiguation
//! - `category`: Keyword-based routing to the four information domains
//! - `catalog`: Localized greeting, prompt, and error message catalogs
//! - `records`: Localized records and response formatting
//! - `classification`: Output data structure
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod catalog;
pub mod category;
pub mod classification;
pub mod language;
pub mod records;

// Re-export main types for convenience
pub use analyzer::{sanitize_input, QueryAnalyzer};
pub use catalog::{category_prompt, error_message, greeting_response, ErrorKind};
pub use category::{detect_category, Category};
pub use classification::Classification;
pub use language::{detect_language, Language};
pub use records::{format_response, LocalizedRecord};
