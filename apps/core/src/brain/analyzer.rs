//! Query analyzer - main orchestrator for the brain module.
//!
//! Runs the full pre-LLM pipeline on raw text: sanitization, language
//! detection, category routing, greeting detection. `respond` additionally
//! drives a record source and turns its output (or failure) into a
//! localized reply string.

use chrono::Utc;
use std::time::Instant;
use tracing::{debug, warn};

use super::catalog::{error_message, greeting_response, ErrorKind};
use super::category::{detect_category, matched_keywords};
use super::classification::Classification;
use super::language::{detect_language, Language};
use super::records::format_response;
use crate::source::RecordSource;

/// Stateless analysis front-end over the static lexicon. Every operation is
/// synchronous and safe to call concurrently; construction is free.
#[derive(Debug, Default)]
pub struct QueryAnalyzer;

impl QueryAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a query and produce a classification packet.
    pub fn analyze(&self, query: &str) -> Classification {
        let start = Instant::now();

        let mut packet = Classification::new(sanitize_input(query));

        packet.language = detect_language(&packet.query);
        packet.category = detect_category(&packet.query, Some(packet.language));
        packet.is_greeting = self.is_greeting(&packet.query, Some(packet.language));
        packet.matched_keywords = packet
            .category
            .map(|category| matched_keywords(&packet.query, category, packet.language))
            .unwrap_or_default();

        packet.processing_time_ms = start.elapsed().as_millis() as u64;
        packet.timestamp = Utc::now();

        debug!("analyzed query: {}", packet.summary());
        packet
    }

    /// True iff the text contains one of the language's greeting phrases.
    /// Matching is substring containment, consistent with keyword routing.
    pub fn is_greeting(&self, text: &str, language: Option<Language>) -> bool {
        let language = language.unwrap_or_else(|| detect_language(text));
        let text = text.trim().to_lowercase();
        language
            .greetings()
            .iter()
            .any(|greeting| text.contains(*greeting))
    }

    /// Full request loop: classify, fetch from the record source, format.
    ///
    /// Greetings get the canned greeting reply; unroutable queries get the
    /// invalid-input message; source failures map to the matching error
    /// catalog entry. The returned string is always non-empty unless a
    /// single fetched record lacks a translation block (deliberate
    /// pass-through in [`format_response`]).
    pub fn respond(
        &self,
        query: &str,
        source: &dyn RecordSource,
        language_override: Option<Language>,
    ) -> String {
        let classification = self.analyze(query);
        let language = language_override.unwrap_or(classification.language);

        if classification.is_greeting {
            return greeting_response(language).to_string();
        }

        let Some(category) = classification.category else {
            return error_message(ErrorKind::InvalidInput, language).to_string();
        };

        match source.fetch(category, language) {
            Ok(records) => format_response(&records, language),
            Err(err) => {
                warn!("record source failed for {}: {}", category, err);
                error_message(err.kind(), language).to_string()
            }
        }
    }
}

/// Strips injection-prone punctuation and trims whitespace. Non-Latin
/// scripts pass through untouched.
pub fn sanitize_input(text: &str) -> String {
    text.chars()
        .filter(|c| {
            !matches!(
                c,
                '<' | '>' | '"' | '\'' | '%' | ';' | '(' | ')' | '&' | '+'
            )
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::category::Category;

    #[test]
    fn test_analyze_weather_query() {
        let analyzer = QueryAnalyzer::new();
        let packet = analyzer.analyze("What is the weather forecast today?");

        assert_eq!(packet.language, Language::English);
        assert_eq!(packet.category, Some(Category::Weather));
        assert!(!packet.is_greeting);
        assert_eq!(
            packet.matched_keywords,
            vec!["weather".to_string(), "forecast".to_string()]
        );
    }

    #[test]
    fn test_analyze_hindi_crops_query() {
        let analyzer = QueryAnalyzer::new();
        let packet = analyzer.analyze("मुझे बीज की जानकारी चाहिए");

        assert_eq!(packet.language, Language::Hindi);
        assert_eq!(packet.category, Some(Category::Crops));
    }

    #[test]
    fn test_greeting_detection() {
        let analyzer = QueryAnalyzer::new();

        assert!(analyzer.is_greeting("Hello there", Some(Language::English)));
        assert!(analyzer.is_greeting("नमस्कार", Some(Language::Marathi)));
        assert!(analyzer.is_greeting("ನಮಸ್ಕಾರ", None));
        assert!(!analyzer.is_greeting("weather forecast", Some(Language::English)));
    }

    #[test]
    fn test_greeting_matches_by_substring() {
        let analyzer = QueryAnalyzer::new();
        // "hi" inside "chips" counts; literal containment is the
        // documented matching rule
        assert!(analyzer.is_greeting("chips", Some(Language::English)));
    }

    #[test]
    fn test_sanitize_strips_dangerous_characters() {
        assert_eq!(sanitize_input("  <b>weather</b>; DROP  "), "bweather/b DROP");
        assert_eq!(sanitize_input("rain & shine (today)"), "rain  shine today");
    }

    #[test]
    fn test_sanitize_preserves_non_latin_scripts() {
        assert_eq!(sanitize_input("मौसम कैसा है?"), "मौसम कैसा है?");
        assert_eq!(sanitize_input("ಹವಾಮಾನ"), "ಹವಾಮಾನ");
    }

    #[test]
    fn test_analyze_empty_query() {
        let analyzer = QueryAnalyzer::new();
        let packet = analyzer.analyze("   ");

        assert_eq!(packet.language, Language::English);
        assert_eq!(packet.category, None);
        assert!(!packet.is_greeting);
    }
}
