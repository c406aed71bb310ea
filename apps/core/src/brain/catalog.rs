//! Static message catalogs: greeting responses, category prompts, and
//! error messages in all four languages.
//!
//! Every lookup is total. The closed `Language` and `Category` enums make
//! the per-entry fallbacks unnecessary at the type level; the `*_by_code`
//! variants keep the chain (language -> English, unknown kind -> generic)
//! for callers still holding raw codes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::language::Language;

/// Fallback when even the error kind is unrecognized.
const GENERIC_ERROR: &str = "An error occurred.";

/// Fallback prompt for an unrecognized category code.
const GENERIC_PROMPT: &str = "How can I assist you?";

/// Externally surfaced error kinds, each with a full catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The query was understood but no records exist
    NoData,
    /// The query could not be classified
    InvalidInput,
    /// The record store failed
    DatabaseError,
    /// A remote collaborator was unreachable
    NetworkError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NoData => "no_data",
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::DatabaseError => "database_error",
            ErrorKind::NetworkError => "network_error",
        }
    }

    pub fn from_code(code: &str) -> Option<ErrorKind> {
        match code {
            "no_data" => Some(ErrorKind::NoData),
            "invalid_input" => Some(ErrorKind::InvalidInput),
            "database_error" => Some(ErrorKind::DatabaseError),
            "network_error" => Some(ErrorKind::NetworkError),
            _ => None,
        }
    }
}

/// Greeting reply in the given language.
pub fn greeting_response(language: Language) -> &'static str {
    match language {
        Language::English => {
            "Hello! I am your agricultural assistant. How can I help you today?"
        }
        Language::Hindi => "नमस्ते! मैं आपका कृषि सहायक हूं। आज मैं आपकी कैसे मदद कर सकता हूं?",
        Language::Marathi => "नमस्कार! मी तुमचा शेती सहाय्यक आहे. आज मी तुमची कशी मदत करू शकतो?",
        Language::Kannada => "ನಮಸ್ಕಾರ! ನಾನು ನಿಮ್ಮ ಕೃಷಿ ಸಹಾಯಕ. ಇಂದು ನಾನು ನಿಮಗೆ ಹೇಗೆ ಸಹಾಯ ಮಾಡಬಹುದು?",
    }
}

/// Follow-up prompt for a routed category.
pub fn category_prompt(category: Category, language: Language) -> &'static str {
    match (category, language) {
        (Category::Weather, Language::English) => {
            "I can help you with weather forecasts. Please tell me your location."
        }
        (Category::Weather, Language::Hindi) => {
            "मैं मौसम पूर्वानुमान में आपकी मदद कर सकता हूं। कृपया मुझे अपना स्थान बताएं।"
        }
        (Category::Weather, Language::Marathi) => {
            "मी तुम्हाला हवामान अंदाजामध्ये मदत करू शकतो. कृपया मला तुमचे स्थान सांगा."
        }
        (Category::Weather, Language::Kannada) => {
            "ನಾನು ನಿಮಗೆ ಹವಾಮಾನ ಮುನ್ಸೂಚನೆಯಲ್ಲಿ ಸಹಾಯ ಮಾಡಬಹುದು. ದಯವಿಟ್ಟು ನನಗೆ ನಿಮ್ಮ ಸ್ಥಳವನ್ನು ತಿಳಿಸಿ."
        }
        (Category::Crops, Language::English) => {
            "I can provide information about seeds and crops. What would you like to know?"
        }
        (Category::Crops, Language::Hindi) => {
            "मैं बीज और फसलों के बारे में जानकारी प्रदान कर सकता हूं। आप क्या जानना चाहेंगे?"
        }
        (Category::Crops, Language::Marathi) => {
            "मी बियाणे आणि पिकांबद्दल माहिती देऊ शकतो. तुम्हाला काय जाणून घ्यायचे आहे?"
        }
        (Category::Crops, Language::Kannada) => {
            "ನಾನು ಬೀಜಗಳು ಮತ್ತು ಬೆಳೆಗಳ ಬಗ್ಗೆ ಮಾಹಿತಿಯನ್ನು ನೀಡಬಹುದು. ನೀವು ಏನು ತಿಳಿಯಲು ಬಯಸುತ್ತೀರಿ?"
        }
        (Category::Pesticides, Language::English) => {
            "I can help with pesticides and fertilizers information. What do you need?"
        }
        (Category::Pesticides, Language::Hindi) => {
            "मैं कीटनाशकों और उर्वरकों की जानकारी में मदद कर सकता हूं। आपको क्या चाहिए?"
        }
        (Category::Pesticides, Language::Marathi) => {
            "मी कीटकनाशके आणि खतांच्या माहितीत मदत करू शकतो. तुम्हाला काय हवे आहे?"
        }
        (Category::Pesticides, Language::Kannada) => {
            "ನಾನು ಕೀಟನಾಶಕಗಳು ಮತ್ತು ರಸಗೊಬ್ಬರಗಳ ಮಾಹಿತಿಯೊಂದಿಗೆ ಸಹಾಯ ಮಾಡಬಹುದು. ನಿಮಗೆ ಏನು ಬೇಕು?"
        }
        (Category::Schemes, Language::English) => {
            "I can inform you about government schemes and loans. What information do you need?"
        }
        (Category::Schemes, Language::Hindi) => {
            "मैं आपको सरकारी योजनाओं और ऋणों के बारे में सूचित कर सकता हूं। आपको क्या जानकारी चाहिए?"
        }
        (Category::Schemes, Language::Marathi) => {
            "मी तुम्हाला सरकारी योजना आणि कर्जांबद्दल माहिती देऊ शकतो. तुम्हाला कोणती माहिती हवी आहे?"
        }
        (Category::Schemes, Language::Kannada) => {
            "ನಾನು ನಿಮಗೆ ಸರ್ಕಾರಿ ಯೋಜನೆಗಳು ಮತ್ತು ಸಾಲಗಳ ಬಗ್ಗೆ ತಿಳಿಸಬಹುದು. ನಿಮಗೆ ಯಾವ ಮಾಹಿತಿ ಬೇಕು?"
        }
    }
}

/// Localized message for an externally surfaced error.
pub fn error_message(kind: ErrorKind, language: Language) -> &'static str {
    match (kind, language) {
        (ErrorKind::NoData, Language::English) => {
            "Sorry, no information available at the moment."
        }
        (ErrorKind::NoData, Language::Hindi) => "क्षमा करें, इस समय कोई जानकारी उपलब्ध नहीं है।",
        (ErrorKind::NoData, Language::Marathi) => "माफ करा, सध्या कोणतीही माहिती उपलब्ध नाही.",
        (ErrorKind::NoData, Language::Kannada) => "ಕ್ಷಮಿಸಿ, ಈ ಸಮಯದಲ್ಲಿ ಯಾವುದೇ ಮಾಹಿತಿ ಲಭ್ಯವಿಲ್ಲ.",
        (ErrorKind::InvalidInput, Language::English) => {
            "I didn't understand that. Could you please rephrase?"
        }
        (ErrorKind::InvalidInput, Language::Hindi) => {
            "मुझे वह समझ में नहीं आया। क्या आप कृपया दोबारा कह सकते हैं?"
        }
        (ErrorKind::InvalidInput, Language::Marathi) => {
            "मला ते समजले नाही. कृपया पुन्हा सांगाल का?"
        }
        (ErrorKind::InvalidInput, Language::Kannada) => {
            "ನನಗೆ ಅದು ಅರ್ಥವಾಗಲಿಲ್ಲ. ದಯವಿಟ್ಟು ಮತ್ತೊಮ್ಮೆ ಹೇಳಬಹುದೇ?"
        }
        (ErrorKind::DatabaseError, Language::English) => {
            "Sorry, there was an error accessing the database. Please try again later."
        }
        (ErrorKind::DatabaseError, Language::Hindi) => {
            "क्षमा करें, डेटाबेस तक पहुंचने में त्रुटि हुई। कृपया बाद में पुनः प्रयास करें।"
        }
        (ErrorKind::DatabaseError, Language::Marathi) => {
            "माफ करा, डेटाबेस ऍक्सेस करताना त्रुटी आली. कृपया नंतर पुन्हा प्रयत्न करा."
        }
        (ErrorKind::DatabaseError, Language::Kannada) => {
            "ಕ್ಷಮಿಸಿ, ಡೇಟಾಬೇಸ್ ಪ್ರವೇಶಿಸುವಲ್ಲಿ ದೋಷವಿದೆ. ದಯವಿಟ್ಟು ನಂತರ ಮತ್ತೆ ಪ್ರಯತ್ನಿಸಿ."
        }
        (ErrorKind::NetworkError, Language::English) => {
            "Network error. Please check your connection."
        }
        (ErrorKind::NetworkError, Language::Hindi) => "नेटवर्क त्रुटि। कृपया अपना कनेक्शन जांचें।",
        (ErrorKind::NetworkError, Language::Marathi) => "नेटवर्क त्रुटी. कृपया तुमचे कनेक्शन तपासा.",
        (ErrorKind::NetworkError, Language::Kannada) => {
            "ನೆಟ್\u{200c}ವರ್ಕ್ ದೋಷ. ದಯವಿಟ್ಟು ನಿಮ್ಮ ಸಂಪರ್ಕವನ್ನು ಪರಿಶೀಲಿಸಿ."
        }
    }
}

/// Code-level variant of [`error_message`] for callers holding raw codes:
/// unknown language falls back to English, unknown kind to a generic string.
pub fn error_message_by_code(kind_code: &str, language_code: &str) -> &'static str {
    let language = Language::from_code(language_code).unwrap_or(Language::English);
    match ErrorKind::from_code(kind_code) {
        Some(kind) => error_message(kind, language),
        None => GENERIC_ERROR,
    }
}

/// Code-level variant of [`category_prompt`] with the same fallback chain.
pub fn category_prompt_by_code(category_code: &str, language_code: &str) -> &'static str {
    let language = Language::from_code(language_code).unwrap_or(Language::English);
    match Category::from_code(category_code) {
        Some(category) => category_prompt(category, language),
        None => GENERIC_PROMPT,
    }
}

/// Code-level variant of [`greeting_response`]; unknown codes get English.
pub fn greeting_response_by_code(language_code: &str) -> &'static str {
    greeting_response(Language::from_code(language_code).unwrap_or(Language::English))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_catalog_entries_non_empty() {
        for language in Language::ALL {
            assert!(!greeting_response(language).is_empty());
            for category in Category::ALL {
                assert!(!category_prompt(category, language).is_empty());
            }
            for kind in [
                ErrorKind::NoData,
                ErrorKind::InvalidInput,
                ErrorKind::DatabaseError,
                ErrorKind::NetworkError,
            ] {
                assert!(!error_message(kind, language).is_empty());
            }
        }
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(
            error_message_by_code("no_data", "xx"),
            error_message(ErrorKind::NoData, Language::English)
        );
        assert_eq!(
            greeting_response_by_code("de"),
            greeting_response(Language::English)
        );
    }

    #[test]
    fn test_unknown_kind_falls_back_to_generic() {
        assert_eq!(error_message_by_code("disk_full", "en"), GENERIC_ERROR);
        assert_eq!(category_prompt_by_code("livestock", "hi"), GENERIC_PROMPT);
    }

    #[test]
    fn test_prompt_by_code_resolves() {
        assert_eq!(
            category_prompt_by_code("weather", "mr"),
            category_prompt(Category::Weather, Language::Marathi)
        );
    }

    #[test]
    fn test_error_kind_codes() {
        for kind in [
            ErrorKind::NoData,
            ErrorKind::InvalidInput,
            ErrorKind::DatabaseError,
            ErrorKind::NetworkError,
        ] {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ErrorKind::from_code("timeout"), None);
    }
}
