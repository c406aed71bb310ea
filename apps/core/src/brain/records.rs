//! Localized records and response formatting.
//!
//! A record carries a translation block per language (field name -> display
//! text). Field order is the data file's insertion order and drives the
//! single-record response layout, so `serde_json` runs with the
//! `preserve_order` feature.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::catalog::{error_message, ErrorKind};
use super::language::Language;

/// Fields tried, in order, when picking a display name for a list line.
const NAME_FIELDS: &[&str] = &["crop_name", "product_name", "scheme_name", "location_name"];

/// Maximum records shown in a multi-result summary.
const MAX_LIST_ITEMS: usize = 5;

/// Maximum characters of a display name in a list line.
const MAX_NAME_CHARS: usize = 80;

/// A single data item (forecast, crop, pesticide, or scheme entry) with
/// per-language display text. The brain only reads these; they are produced
/// by a [`RecordSource`](crate::source::RecordSource).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizedRecord {
    /// Language code -> (field name -> display text).
    #[serde(default)]
    pub translations: Map<String, Value>,
    /// Remaining top-level fields (id, season, temperature, ...).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl LocalizedRecord {
    /// Translation block for one language; malformed blocks (non-objects)
    /// are treated as absent.
    pub fn translation_block(&self, language: Language) -> Option<&Map<String, Value>> {
        self.translations
            .get(language.code())
            .and_then(Value::as_object)
    }

    /// Looks a display field up through the fallback chain: requested
    /// language -> English -> top-level field -> empty string.
    pub fn translate_field(&self, field: &str, language: Language) -> String {
        self.translation_block(language)
            .and_then(|block| scalar_text(block.get(field)?))
            .or_else(|| {
                self.translation_block(Language::English)
                    .and_then(|block| scalar_text(block.get(field)?))
            })
            .or_else(|| scalar_text(self.fields.get(field)?))
            .unwrap_or_default()
    }

    /// Best-available display name for a list line, or `Item {position}`.
    fn display_name(&self, language: Language, position: usize) -> String {
        let name = self.translation_block(language).and_then(|block| {
            NAME_FIELDS.iter().find_map(|field| {
                block
                    .get(*field)
                    .and_then(Value::as_str)
                    .filter(|value| !value.is_empty())
            })
        });
        match name {
            Some(name) => truncate_name(name),
            None => format!("Item {}", position),
        }
    }
}

/// Renders fetched records into a human-readable reply.
///
/// Empty input yields the localized no-data message. A single record is
/// expanded field by field (blank-line separated, insertion order); an
/// absent or empty translation block yields an empty string, which is a
/// deliberate pass-through rather than an error. Multiple records become a
/// numbered summary of at most five lines.
pub fn format_response(records: &[LocalizedRecord], language: Language) -> String {
    if records.is_empty() {
        return error_message(ErrorKind::NoData, language).to_string();
    }

    if let [record] = records {
        let Some(block) = record.translation_block(language) else {
            return String::new();
        };
        let parts: Vec<&str> = block
            .values()
            .filter_map(Value::as_str)
            .filter(|value| !value.is_empty())
            .collect();
        return parts.join("\n\n");
    }

    records
        .iter()
        .take(MAX_LIST_ITEMS)
        .enumerate()
        .map(|(idx, record)| format!("{}. {}", idx + 1, record.display_name(language, idx + 1)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a scalar JSON value as display text; structured values and
/// nulls are treated as absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() <= MAX_NAME_CHARS {
        return name.to_string();
    }
    let kept: String = name.chars().take(MAX_NAME_CHARS - 3).collect();
    format!("{}...", kept)
}
