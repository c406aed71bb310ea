//! Language detection for the four supported input languages.
//!
//! Pure script-range matching plus short indicator-word lists to split
//! Hindi from Marathi, which share the Devanagari script.
//! No ML model required - deterministic scoring over fixed patterns.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

// Compile script-range patterns once at startup
static DEVANAGARI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\u{0900}-\u{097F}]+").expect("Invalid regex: Devanagari range")
});

static KANNADA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{0C80}-\u{0CFF}]+").expect("Invalid regex: Kannada range"));

static LATIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+").expect("Invalid regex: Latin range"));

/// Short lexical cues that appear in Marathi but not Hindi
const MARATHI_INDICATORS: &[&str] = &["आहे", "होते", "आणि", "माझे", "तुझे"];

/// Short lexical cues that appear in Hindi but not Marathi
const HINDI_INDICATORS: &[&str] = &["है", "था", "और", "मेरा", "तुम्हारा"];

/// Supported input language.
///
/// Declaration order doubles as the tie-break priority when two scripts
/// cover the same number of characters, so detection stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Marathi,
    Kannada,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Language {
    /// All supported languages, in tie-break priority order.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Marathi,
        Language::Kannada,
    ];

    /// Returns the two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
            Language::Kannada => "kn",
        }
    }

    /// Returns the language name in its own script
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Marathi => "मराठी",
            Language::Kannada => "ಕನ್ನಡ",
        }
    }

    /// Resolves a language code; unknown codes return `None` and callers
    /// fall back to English.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::English),
            "hi" => Some(Language::Hindi),
            "mr" => Some(Language::Marathi),
            "kn" => Some(Language::Kannada),
            _ => None,
        }
    }

    /// Unicode script matcher for this language.
    ///
    /// Hindi and Marathi both match Devanagari; disambiguation happens
    /// after scoring.
    pub fn script_pattern(&self) -> &'static Regex {
        match self {
            Language::English => &LATIN_PATTERN,
            Language::Hindi | Language::Marathi => &DEVANAGARI_PATTERN,
            Language::Kannada => &KANNADA_PATTERN,
        }
    }

    /// Common greeting phrases, matched by substring containment.
    pub fn greetings(&self) -> &'static [&'static str] {
        match self {
            Language::English => &[
                "hello",
                "hi",
                "hey",
                "good morning",
                "good afternoon",
                "good evening",
            ],
            Language::Hindi => &["नमस्ते", "नमस्कार", "हैलो", "हाय", "सुप्रभात", "शुभ संध्या"],
            Language::Marathi => &["नमस्कार", "नमस्ते", "हॅलो", "हाय", "सुप्रभात", "शुभ संध्याकाळ"],
            Language::Kannada => &["ನಮಸ್ಕಾರ", "ಹಲೋ", "ಹಾಯ್", "ಶುಭೋದಯ", "ಶುಭ ಸಂಜೆ"],
        }
    }
}

/// Detects the language of free-form text.
///
/// Scores each language by script coverage (total characters matched by its
/// script pattern), picks the maximum, and resolves Devanagari winners with
/// indicator words. Empty or unmatched input returns English. Total over any
/// string; never panics.
pub fn detect_language(text: &str) -> Language {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Language::English;
    }

    // Lowercasing is a no-op for the non-Latin scripts
    let text = trimmed.to_lowercase();

    let mut best: Option<(Language, usize)> = None;
    for language in Language::ALL {
        let coverage: usize = language
            .script_pattern()
            .find_iter(&text)
            .map(|m| m.as_str().chars().count())
            .sum();
        if coverage == 0 {
            continue;
        }
        // Strict > keeps the earlier language on ties
        match best {
            Some((_, top)) if coverage <= top => {}
            _ => best = Some((language, coverage)),
        }
    }

    let Some((winner, _)) = best else {
        return Language::English;
    };

    if matches!(winner, Language::Hindi | Language::Marathi) {
        disambiguate_devanagari(&text, winner)
    } else {
        winner
    }
}

/// Splits Hindi from Marathi by counting indicator words present in the
/// text. A strict majority overrides the script winner; a tie (including
/// zero hits on both sides) keeps it.
fn disambiguate_devanagari(text: &str, script_winner: Language) -> Language {
    let marathi_hits = MARATHI_INDICATORS
        .iter()
        .filter(|word| text.contains(*word))
        .count();
    let hindi_hits = HINDI_INDICATORS
        .iter()
        .filter(|word| text.contains(*word))
        .count();

    if marathi_hits > hindi_hits {
        Language::Marathi
    } else if hindi_hits > marathi_hits {
        Language::Hindi
    } else {
        script_winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_defaults_to_english() {
        assert_eq!(detect_language(""), Language::English);
        assert_eq!(detect_language("   "), Language::English);
        assert_eq!(detect_language("\t\n"), Language::English);
    }

    #[test]
    fn test_english_detection() {
        assert_eq!(
            detect_language("What is the weather today?"),
            Language::English
        );
        assert_eq!(detect_language("hello"), Language::English);
    }

    #[test]
    fn test_kannada_detection() {
        assert_eq!(detect_language("ಹವಾಮಾನ ಹೇಗಿದೆ"), Language::Kannada);
    }

    #[test]
    fn test_marathi_indicators_override() {
        assert_eq!(detect_language("माझे घर आहे"), Language::Marathi);
    }

    #[test]
    fn test_hindi_indicators_override() {
        assert_eq!(detect_language("मेरा घर है"), Language::Hindi);
    }

    #[test]
    fn test_devanagari_without_indicators_prefers_hindi() {
        // No indicator word from either list: script-coverage tie resolves
        // to Hindi by declaration order
        assert_eq!(detect_language("घर"), Language::Hindi);
    }

    #[test]
    fn test_non_linguistic_input_defaults_to_english() {
        assert_eq!(detect_language("12345 !@#$"), Language::English);
    }

    #[test]
    fn test_mixed_script_picks_dominant() {
        // Four Latin characters vs eleven Kannada characters
        assert_eq!(detect_language("test ಹವಾಮಾನ ಮುನ್ಸೂಚನೆ"), Language::Kannada);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let inputs = ["मेरा घर है", "hello world", "ಮಳೆ", ""];
        for input in inputs {
            assert_eq!(detect_language(input), detect_language(input));
        }
    }

    #[test]
    fn test_code_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_native_names_use_their_own_script() {
        assert_eq!(Language::English.native_name(), "English");
        assert_eq!(detect_language(Language::Hindi.native_name()), Language::Hindi);
        assert_eq!(
            detect_language(Language::Kannada.native_name()),
            Language::Kannada
        );
    }
}
