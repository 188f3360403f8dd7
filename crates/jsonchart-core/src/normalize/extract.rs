use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::normalize::fields::{FieldPriority, LabelLookup};
use crate::util::coerce::{truncate_chars, value_as_f64};

/// Recognized top-level payload shapes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// A list of records, one entry per record.
    Array,
    /// One object whose own keys are the labels.
    Map,
}

impl Shape {
    /// Arrays are checked before objects. Anything else has no shape.
    pub fn detect(raw: &Value) -> Option<Self> {
        match raw {
            Value::Array(_) => Some(Shape::Array),
            Value::Object(_) => Some(Shape::Map),
            _ => None,
        }
    }
}

/// One label/value pair pulled out of the payload. `value` is never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub label: String,
    pub value: f64,
}

/// A record the extractor cannot read. Aborts the whole extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractError {
    #[error("record {index} is null")]
    NullRecord { index: usize },

    #[error("record {index} holds a nested structure in label field `{field}`")]
    NestedLabel { index: usize, field: String },
}

/// What to do when a label candidate holds an array or object.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NestedLabels {
    /// Abort the pass; the caller falls back to sample data.
    #[default]
    Abort,
    /// Use the compact JSON text of the nested value as the label.
    Stringify,
}

/// Knobs for a single extraction pass.
#[derive(Debug, Clone, Copy)]
pub struct ExtractRules<'a> {
    pub labels: &'a FieldPriority,
    pub values: &'a FieldPriority,
    pub max_entries: usize,
    pub label_width: usize,
    /// Prefix of synthetic labels, followed by the 1-based record position.
    pub item_prefix: &'a str,
    pub nested_labels: NestedLabels,
}

/// Extract entries from the first `max_entries` records of an array.
///
/// Records that are scalars carry no fields and get a synthetic
/// `<item_prefix><N>` label with value 0.
pub fn extract_array(items: &[Value], rules: &ExtractRules<'_>) -> Result<Vec<Entry>, ExtractError> {
    items
        .iter()
        .take(rules.max_entries)
        .enumerate()
        .map(|(index, item)| extract_record(index, item, rules))
        .collect()
}

fn extract_record(index: usize, item: &Value, rules: &ExtractRules<'_>) -> Result<Entry, ExtractError> {
    let synthetic = || format!("{}{}", rules.item_prefix, index + 1);

    let (label, value) = match item {
        Value::Null => return Err(ExtractError::NullRecord { index }),
        Value::Object(record) => {
            let label = match rules.labels.resolve_label(record) {
                LabelLookup::Found(text) => text,
                LabelLookup::Missing => synthetic(),
                LabelLookup::Nested { field } => match rules.nested_labels {
                    NestedLabels::Stringify => record
                        .get(field)
                        .map(Value::to_string)
                        .unwrap_or_else(synthetic),
                    NestedLabels::Abort => {
                        return Err(ExtractError::NestedLabel {
                            index,
                            field: field.to_string(),
                        });
                    }
                },
            };
            (label, rules.values.resolve_value(record).unwrap_or(0.0))
        }
        _ => (synthetic(), 0.0),
    };

    Ok(Entry {
        label: truncate_chars(&label, rules.label_width),
        value: value.abs(),
    })
}

/// Extract entries from the first `max_entries` keys of an object, in document order.
pub fn extract_map(map: &Map<String, Value>, rules: &ExtractRules<'_>) -> Vec<Entry> {
    map.iter()
        .take(rules.max_entries)
        .map(|(key, value)| Entry {
            label: truncate_chars(key, rules.label_width),
            value: value_as_f64(value).map(f64::abs).unwrap_or(0.0),
        })
        .collect()
}
