//! Classification packet - output structure for one analyzed query.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::language::Language;

/// Everything the brain extracted from a single query. Transient - created
/// per request, handed to the caller, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Sanitized query text
    pub query: String,

    /// Detected language
    pub language: Language,

    /// Routed category, if any keyword matched
    pub category: Option<Category>,

    /// Whether the query is a greeting
    pub is_greeting: bool,

    /// Keywords that drove the category routing
    pub matched_keywords: Vec<String>,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

impl Classification {
    /// Create a packet with nothing detected yet.
    pub fn new(query: String) -> Self {
        Self {
            query,
            language: Language::English,
            category: None,
            is_greeting: false,
            matched_keywords: vec![],
            processing_time_ms: 0,
            timestamp: Utc::now(),
        }
    }

    /// One-line summary for logging.
    pub fn summary(&self) -> String {
        format!(
            "Language: {}, Category: {}, Greeting: {}, Keywords: {}",
            self.language,
            self.category
                .map(|category| category.code())
                .unwrap_or("none"),
            if self.is_greeting { "yes" } else { "no" },
            self.matched_keywords.len()
        )
    }
}
