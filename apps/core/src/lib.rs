//! AgroVoice core - the query brain for a multilingual agricultural
//! assistant.
//!
//! Classifies free-form user text in English, Hindi, Marathi, or Kannada
//! before any LLM or database call: language detection by script coverage,
//! category routing by keyword scoring, greeting detection, and localized
//! response formatting over externally fetched records.
//!
//! The brain is stateless and side-effect-free; its lexicon and message
//! catalogs are static and immutable, so every operation is safe to call
//! concurrently without coordination. The HTTP, voice, and database layers
//! live outside this crate and consume it through [`brain::QueryAnalyzer`]
//! and the [`source::RecordSource`] seam.

pub mod brain;
pub mod error;
pub mod source;

pub use brain::{
    detect_category, detect_language, format_response, Category, Classification, ErrorKind,
    Language, LocalizedRecord, QueryAnalyzer,
};
pub use error::AppError;
pub use source::{RecordSource, StaticRecordSource};

#[cfg(test)]
mod tests;
