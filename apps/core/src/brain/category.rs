//! Category routing by keyword scoring.
//!
//! Each category carries a per-language keyword list; a query is routed to
//! the category with the most keywords appearing in it. Matching is literal
//! substring containment, not tokenization, so a keyword embedded in a
//! longer word still counts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::language::{detect_language, Language};

/// Supported information domain.
///
/// Declaration order doubles as the tie-break priority when two categories
/// score the same number of keyword hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Weather forecasts and climate advice
    Weather,
    /// Seeds, crops, and cultivation
    Crops,
    /// Pesticides and fertilizers
    Pesticides,
    /// Government schemes, loans, and subsidies
    Schemes,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Category {
    /// All supported categories, in tie-break priority order.
    pub const ALL: [Category; 4] = [
        Category::Weather,
        Category::Crops,
        Category::Pesticides,
        Category::Schemes,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Category::Weather => "weather",
            Category::Crops => "crops",
            Category::Pesticides => "pesticides",
            Category::Schemes => "schemes",
        }
    }

    /// Resolves a category code. Also accepts the collection keys used by
    /// the record data files.
    pub fn from_code(code: &str) -> Option<Category> {
        match code {
            "weather" | "weather_forecasts" => Some(Category::Weather),
            "crops" | "seeds_crops" => Some(Category::Crops),
            "pesticides" | "pesticides_fertilizers" => Some(Category::Pesticides),
            "schemes" | "government_schemes" => Some(Category::Schemes),
            _ => None,
        }
    }

    /// Keyword list for this category in the given language.
    pub fn keywords(&self, language: Language) -> &'static [&'static str] {
        match (self, language) {
            (Category::Weather, Language::English) => {
                &["weather", "rain", "temperature", "forecast", "climate"]
            }
            (Category::Weather, Language::Hindi) => {
                &["मौसम", "बारिश", "तापमान", "पूर्वानुमान", "जलवायु"]
            }
            (Category::Weather, Language::Marathi) => &["हवामान", "पाऊस", "तापमान", "अंदाज"],
            (Category::Weather, Language::Kannada) => {
                &["ಹವಾಮಾನ", "ಮಳೆ", "ತಾಪಮಾನ", "ಮುನ್ಸೂಚನೆ", "ವಾತಾವರಣ"]
            }
            (Category::Crops, Language::English) => {
                &["crop", "seed", "plant", "farming", "cultivation", "harvest"]
            }
            (Category::Crops, Language::Hindi) => &["फसल", "बीज", "पौधा", "खेती", "कृषि", "कटाई"],
            (Category::Crops, Language::Marathi) => {
                &["पीक", "बियाणे", "रोप", "शेती", "लागवड", "कापणी"]
            }
            (Category::Crops, Language::Kannada) => {
                &["ಬೆಳೆ", "ಬೀಜ", "ಸಸಿ", "ಕೃಷಿ", "ಬೆಳೆಯುವಿಕೆ", "ಕೊಯ್ಲು"]
            }
            (Category::Pesticides, Language::English) => {
                &["pesticide", "fertilizer", "insecticide", "fungicide", "herbicide"]
            }
            (Category::Pesticides, Language::Hindi) => {
                &["कीटनाशक", "उर्वरक", "फफूंदनाशक", "खरपतवारनाशी"]
            }
            (Category::Pesticides, Language::Marathi) => {
                &["कीटकनाशक", "खत", "किडनाशक", "बुरशीनाशक", "तणनाशक"]
            }
            (Category::Pesticides, Language::Kannada) => {
                &["ಕೀಟನಾಶಕ", "ರಸಗೊಬ್ಬರ", "ಶಿಲೀಂಧ್ರನಾಶಕ", "ಕಳೆನಾಶಕ"]
            }
            (Category::Schemes, Language::English) => {
                &["scheme", "loan", "subsidy", "grant", "insurance", "government"]
            }
            (Category::Schemes, Language::Hindi) => {
                &["योजना", "ऋण", "सब्सिडी", "अनुदान", "बीमा", "सरकार"]
            }
            (Category::Schemes, Language::Marathi) => {
                &["योजना", "कर्ज", "सवलत", "अनुदान", "विमा", "सरकार"]
            }
            (Category::Schemes, Language::Kannada) => {
                &["ಯೋಜನೆ", "ಸಾಲ", "ಸಬ್ಸಿಡಿ", "ಅನುದಾನ", "ವಿಮೆ", "ಸರ್ಕಾರ"]
            }
        }
    }
}

/// Routes a query to a category by keyword scoring.
///
/// Each keyword contributes at most one point regardless of repetition;
/// the highest-scoring category wins, ties resolved by declaration order.
/// Returns `None` when no keyword matches at all.
pub fn detect_category(text: &str, language: Option<Language>) -> Option<Category> {
    let language = language.unwrap_or_else(|| detect_language(text));
    let text = text.to_lowercase();

    let mut best: Option<(Category, usize)> = None;
    for category in Category::ALL {
        let score = category
            .keywords(language)
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .count();
        if score == 0 {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((category, score)),
        }
    }

    best.map(|(category, _)| category)
}

/// Keywords of `category` that actually occur in the (lowercased) text.
/// Used to report what drove a classification.
pub fn matched_keywords(text: &str, category: Category, language: Language) -> Vec<String> {
    let text = text.to_lowercase();
    category
        .keywords(language)
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}
