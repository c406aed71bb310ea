//! Record source seam between the brain and the data layer.
//!
//! Abstracts the database-or-JSON-fallback read path so different backends
//! can be used interchangeably. The brain only ever sees the fetched
//! records or an [`AppError`] it maps to a localized message.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::warn;

use crate::brain::{Category, Language, LocalizedRecord};
use crate::error::AppError;

/// Defines the public interface for a localized record provider.
pub trait RecordSource: Send + Sync {
    /// Returns the ordered records for a category, restricted to entries
    /// that carry a translation block for the requested language.
    fn fetch(
        &self,
        category: Category,
        language: Language,
    ) -> Result<Vec<LocalizedRecord>, AppError>;
}

/// In-memory record source loaded once at startup, typically from the JSON
/// data files that back the database fallback path.
#[derive(Debug, Default)]
pub struct StaticRecordSource {
    records: HashMap<Category, Vec<LocalizedRecord>>,
}

impl StaticRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the records for one category.
    pub fn insert(&mut self, category: Category, records: Vec<LocalizedRecord>) {
        self.records.insert(category, records);
    }

    /// Loads a data file shaped as `{ "<category>": [records...] }`.
    ///
    /// Collection keys may be either category codes or the legacy data-file
    /// names (`weather_forecasts`, `seeds_crops`, ...). Unknown keys are
    /// skipped with a warning rather than rejected, so one malformed
    /// collection cannot take down the whole source.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let parsed: HashMap<String, Vec<LocalizedRecord>> = serde_json::from_str(&raw)?;

        let mut source = Self::new();
        for (key, records) in parsed {
            match Category::from_code(&key) {
                Some(category) => source.insert(category, records),
                None => warn!("skipping unknown record collection: {}", key),
            }
        }
        Ok(source)
    }
}

impl RecordSource for StaticRecordSource {
    fn fetch(
        &self,
        category: Category,
        language: Language,
    ) -> Result<Vec<LocalizedRecord>, AppError> {
        let records = self
            .records
            .get(&category)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| record.translation_block(language).is_some())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(records)
    }
}

/// Convenience for tests and callers assembling records by hand.
pub fn record_from_value(value: Value) -> Result<LocalizedRecord, AppError> {
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fetch_filters_by_language() {
        let mut source = StaticRecordSource::new();
        source.insert(
            Category::Crops,
            vec![
                record_from_value(json!({
                    "translations": { "en": { "crop_name": "Wheat" } }
                }))
                .unwrap(),
                record_from_value(json!({
                    "translations": { "hi": { "crop_name": "गेहूं" } }
                }))
                .unwrap(),
            ],
        );

        let english = source.fetch(Category::Crops, Language::English).unwrap();
        assert_eq!(english.len(), 1);

        let marathi = source.fetch(Category::Crops, Language::Marathi).unwrap();
        assert!(marathi.is_empty());
    }

    #[test]
    fn test_fetch_missing_category_is_empty_not_error() {
        let source = StaticRecordSource::new();
        let records = source.fetch(Category::Schemes, Language::English).unwrap();
        assert!(records.is_empty());
    }
}
