//! Parsing of generation responses.
//!
//! The backend is instructed to answer with a single JSON object keyed by
//! category name, each value holding the new content for that category's
//! specification file. [`ResultBundle::parse`] turns that raw text into a
//! per-category map, tolerating partial responses and unknown keys but
//! rejecting anything that is not a JSON object.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Result, WhittleError};
use crate::spec::Category;

/// Parsed generation response, one entry per category the backend returned.
#[derive(Debug, Clone, Default)]
pub struct ResultBundle {
    entries: BTreeMap<Category, String>,
}

impl ResultBundle {
    /// Parse the raw backend response text.
    ///
    /// Keys that do not name a known category are ignored. Values that are
    /// JSON strings are taken verbatim; any other value is re-serialized to
    /// compact JSON text so a backend that inlines the object instead of
    /// quoting it still produces usable content.
    pub fn parse(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).map_err(|err| {
            WhittleError::MalformedResponse {
                detail: err.to_string(),
                raw: raw.to_string(),
            }
        })?;

        let Value::Object(map) = value else {
            return Err(WhittleError::MalformedResponse {
                detail: "top-level JSON value is not an object".to_string(),
                raw: raw.to_string(),
            });
        };

        let mut entries = BTreeMap::new();
        for (key, value) in map {
            let Some(category) = Category::from_key(&key) else {
                continue;
            };
            let content = match value {
                Value::String(text) => text,
                other => serde_json::to_string(&other).map_err(|err| {
                    WhittleError::MalformedResponse {
                        detail: format!("cannot re-serialize value for '{}': {}", key, err),
                        raw: raw.to_string(),
                    }
                })?,
            };
            entries.insert(category, content);
        }

        Ok(Self { entries })
    }

    /// Iterate the returned categories in their fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        self.entries
            .iter()
            .map(|(category, content)| (*category, content.as_str()))
    }
}
