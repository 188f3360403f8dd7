//! Prioritized field lookup over untyped records.
//!
//! A record is any JSON object. Each lookup walks an ordered list of
//! candidate field names and stops at the first usable one. The lists are
//! plain data so new payload shapes can be supported through configuration
//! alone.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::util::coerce::{format_number, value_as_f64};

pub const DEFAULT_LABEL_FIELDS: [&str; 9] = [
    "name", "country", "title", "category", "month", "date", "label", "symbol", "id",
];

/// Label candidates tried for pie payloads by [`FieldPriority::pie_labels`].
pub const PIE_LABEL_FIELDS: [&str; 7] = [
    "name", "country", "title", "category", "label", "key", "symbol",
];

pub const PIE_VALUE_FIELDS: [&str; 8] = [
    "cases",
    "population",
    "value",
    "count",
    "total",
    "amount",
    "score",
    "current_price",
];

pub const DEFAULT_VALUE_FIELDS: [&str; 11] = [
    "cases",
    "population",
    "market_cap",
    "current_price",
    "value",
    "price",
    "sales",
    "count",
    "total",
    "amount",
    "score",
];

/// Ordered candidate field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldPriority(Vec<String>);

/// Result of looking up a label in a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelLookup<'a> {
    Found(String),
    Missing,
    /// The first present candidate holds an array or object.
    Nested { field: &'a str },
}

impl FieldPriority {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    pub fn labels() -> Self {
        Self::new(DEFAULT_LABEL_FIELDS)
    }

    pub fn values() -> Self {
        Self::new(DEFAULT_VALUE_FIELDS)
    }

    /// Label candidates suited to part-of-a-whole payloads.
    pub fn pie_labels() -> Self {
        Self::new(PIE_LABEL_FIELDS)
    }

    pub fn pie_values() -> Self {
        Self::new(PIE_VALUE_FIELDS)
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// First present candidate rendered as text.
    ///
    /// `null`, `false`, `0` and `""` count as absent.
    pub fn resolve_label<'a>(&'a self, record: &Map<String, Value>) -> LabelLookup<'a> {
        for field in &self.0 {
            let text = match record.get(field) {
                None | Some(Value::Null) | Some(Value::Bool(false)) => continue,
                Some(Value::Bool(true)) => "true".to_string(),
                Some(Value::String(s)) if s.is_empty() => continue,
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) if n.as_f64() == Some(0.0) => continue,
                Some(Value::Number(n)) => format_number(n),
                Some(Value::Array(_)) | Some(Value::Object(_)) => {
                    return LabelLookup::Nested {
                        field: field.as_str(),
                    };
                }
            };
            return LabelLookup::Found(text);
        }
        LabelLookup::Missing
    }

    /// First candidate that reads as a number.
    ///
    /// A JSON number `0` counts as absent; a string such as `"0"` does not.
    pub fn resolve_value(&self, record: &Map<String, Value>) -> Option<f64> {
        self.0
            .iter()
            .filter_map(|field| record.get(field))
            .find_map(|value| match value {
                Value::Number(_) => value_as_f64(value).filter(|v| *v != 0.0),
                _ => value_as_f64(value),
            })
    }
}
