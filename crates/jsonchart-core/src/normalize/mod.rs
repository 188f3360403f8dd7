//! JSON-to-chart normalization.
//!
//! Turns a decoded JSON payload of unknown shape into a small, render-ready
//! series. The entry point never fails: anything that cannot be charted is
//! replaced by the built-in sample for the requested mode.
//!
//! Pipeline:
//!
//! 1. Detect the shape (array of records, or a single object).
//! 2. Extract at most `max_entries` label/value pairs (`extract`).
//! 3. Bar mode: scale by a common magnitude (`magnitude`).
//!    Pie mode: assign palette colors.

pub mod extract;
pub mod fields;
pub mod magnitude;
pub mod sample;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chart::model::{BarSeries, ChartMode, NormalizedSeries, PieSeries, PieSlice};
use crate::chart::palette::{self, LegendStyle};
use extract::{Entry, ExtractError, ExtractRules, NestedLabels, Shape};
use fields::FieldPriority;
use magnitude::MagnitudeLadder;

/// Tunables for normalization. Every field has a default, so a config file
/// only needs the keys it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeConfig {
    pub max_entries: usize,
    pub bar_label_width: usize,
    pub pie_label_width: usize,
    pub label_fields: FieldPriority,
    pub value_fields: FieldPriority,
    /// Apply the billion threshold to object payloads too.
    pub uniform_magnitude: bool,
    /// Synthetic label prefix for records without a label field.
    pub item_prefix: String,
    pub nested_labels: NestedLabels,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            max_entries: 6,
            bar_label_width: ChartMode::Categorical.label_width(),
            pie_label_width: ChartMode::Proportional.label_width(),
            label_fields: FieldPriority::labels(),
            value_fields: FieldPriority::values(),
            uniform_magnitude: false,
            item_prefix: "Item".to_string(),
            nested_labels: NestedLabels::Abort,
        }
    }
}

impl NormalizeConfig {
    /// Field lists tuned for part-of-a-whole payloads: `key` labels, no
    /// date-like labels, and `Item N` synthetic labels.
    pub fn pie_preset() -> Self {
        Self {
            label_fields: FieldPriority::pie_labels(),
            value_fields: FieldPriority::pie_values(),
            item_prefix: "Item ".to_string(),
            ..Self::default()
        }
    }

    pub fn label_width(&self, mode: ChartMode) -> usize {
        match mode {
            ChartMode::Categorical => self.bar_label_width,
            ChartMode::Proportional => self.pie_label_width,
        }
    }

    /// Thresholds used for a payload of the given shape.
    pub fn ladder_for(&self, shape: Shape) -> MagnitudeLadder {
        match shape {
            Shape::Array => MagnitudeLadder::Full,
            Shape::Map if self.uniform_magnitude => MagnitudeLadder::Full,
            Shape::Map => MagnitudeLadder::WithoutBillion,
        }
    }
}

/// Why a sample was emitted instead of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cause", rename_all = "snake_case")]
pub enum FallbackReason {
    NoInput,
    UnsupportedShape { kind: String },
    ExtractionFailed { error: ExtractError },
    FetchFailed { message: String },
}

/// How the emitted series was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Extracted { shape: Shape, entries: usize },
    Sample { reason: FallbackReason },
}

impl Outcome {
    pub fn is_sample(&self) -> bool {
        matches!(self, Outcome::Sample { .. })
    }
}

/// A series together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalization {
    pub series: NormalizedSeries,
    pub outcome: Outcome,
}

/// Normalize with the default configuration.
pub fn normalize(raw: Option<&Value>, mode: ChartMode) -> NormalizedSeries {
    normalize_with(raw, mode, &NormalizeConfig::default()).series
}

/// Normalize `raw` for `mode`, reporting whether the payload or a sample was used.
pub fn normalize_with(raw: Option<&Value>, mode: ChartMode, config: &NormalizeConfig) -> Normalization {
    let Some(raw) = raw else {
        return fallback(mode, FallbackReason::NoInput);
    };

    let rules = ExtractRules {
        labels: &config.label_fields,
        values: &config.value_fields,
        max_entries: config.max_entries,
        label_width: config.label_width(mode),
        item_prefix: &config.item_prefix,
        nested_labels: config.nested_labels,
    };

    let (shape, entries) = match raw {
        Value::Array(items) => match extract::extract_array(items, &rules) {
            Ok(entries) => (Shape::Array, entries),
            Err(error) => {
                tracing::warn!(%error, "record extraction failed");
                return fallback(mode, FallbackReason::ExtractionFailed { error });
            }
        },
        Value::Object(map) => (Shape::Map, extract::extract_map(map, &rules)),
        other => {
            let kind = json_kind(other).to_string();
            tracing::warn!(kind = %kind, "payload is neither an array nor an object");
            return fallback(mode, FallbackReason::UnsupportedShape { kind });
        }
    };

    tracing::debug!(?shape, entries = entries.len(), %mode, "extracted chart entries");

    let outcome = Outcome::Extracted {
        shape,
        entries: entries.len(),
    };
    let series = match mode {
        ChartMode::Categorical => NormalizedSeries::Bar(to_bar(entries, config.ladder_for(shape))),
        ChartMode::Proportional => NormalizedSeries::Pie(to_pie(entries)),
    };

    Normalization { series, outcome }
}

fn fallback(mode: ChartMode, reason: FallbackReason) -> Normalization {
    Normalization {
        series: sample::sample_for(mode),
        outcome: Outcome::Sample { reason },
    }
}

fn to_bar(entries: Vec<Entry>, ladder: MagnitudeLadder) -> BarSeries {
    let (labels, raw): (Vec<String>, Vec<f64>) =
        entries.into_iter().map(|e| (e.label, e.value)).unzip();

    let (mut values, suffix) = magnitude::scale(&raw, ladder);

    // Keep at least one bar so the chart always has something to draw.
    if values.is_empty() {
        values.push(1.0);
    }

    BarSeries {
        labels,
        values,
        suffix,
    }
}

fn to_pie(entries: Vec<Entry>) -> PieSeries {
    PieSeries {
        slices: entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| PieSlice {
                label: entry.label,
                value: entry.value,
                color_index: palette::color_index(index),
                color: palette::color_for(index).to_string(),
                legend: LegendStyle::default(),
            })
            .collect(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::model::MagnitudeSuffix;
    use serde_json::json;

    fn bar(raw: Value) -> BarSeries {
        match normalize(Some(&raw), ChartMode::Categorical) {
            NormalizedSeries::Bar(bar) => bar,
            other => panic!("expected bar series, got {other:?}"),
        }
    }

    fn pie(raw: Value) -> PieSeries {
        match normalize(Some(&raw), ChartMode::Proportional) {
            NormalizedSeries::Pie(pie) => pie,
            other => panic!("expected pie series, got {other:?}"),
        }
    }

    #[test]
    fn magnitude_thresholds_for_array_input() {
        let cases = [
            (5_000_000_000.0, 5.0, MagnitudeSuffix::Billion),
            (2_500_000.0, 3.0, MagnitudeSuffix::Million),
            (1_500.0, 2.0, MagnitudeSuffix::Thousand),
            (42.0, 42.0, MagnitudeSuffix::None),
        ];
        for (input, expected, suffix) in cases {
            let out = bar(json!([{ "value": input }]));
            assert_eq!(out.values, vec![expected], "input {input}");
            assert_eq!(out.suffix, suffix, "input {input}");
        }
    }

    #[test]
    fn empty_array_yields_single_placeholder_bar() {
        let out = bar(json!([]));
        assert_eq!(out.values, vec![1.0]);
        assert!(out.labels.is_empty());
        assert_eq!(out.suffix, MagnitudeSuffix::None);
    }

    #[test]
    fn empty_object_yields_single_placeholder_bar() {
        let out = bar(json!({}));
        assert_eq!(out.values, vec![1.0]);
        assert!(out.labels.is_empty());
    }

    #[test]
    fn field_priority_picks_first_match() {
        let out = bar(json!([{ "name": "A", "cases": 10, "population": 20 }]));
        assert_eq!(out.labels, vec!["A"]);
        assert_eq!(out.values, vec![10.0]);
    }

    #[test]
    fn map_shaped_input_uses_keys_as_labels() {
        let out = bar(json!({ "en": 120, "es": 45 }));
        assert_eq!(out.labels, vec!["en", "es"]);
        assert_eq!(out.values, vec![120.0, 45.0]);
        assert_eq!(out.suffix, MagnitudeSuffix::None);
    }

    #[test]
    fn string_zero_value_is_kept_and_number_zero_falls_through() {
        assert_eq!(
            bar(json!([{ "name": "A", "cases": "0", "population": 20 }])).values,
            vec![0.0]
        );
        assert_eq!(
            bar(json!([{ "name": "A", "cases": 0, "population": 20 }])).values,
            vec![20.0]
        );
    }

    #[test]
    fn nested_labels_keep_real_data_when_stringified() {
        let raw = json!([{ "name": { "common": "France" }, "population": 68_000_000 }]);

        let aborted = normalize_with(Some(&raw), ChartMode::Categorical, &NormalizeConfig::default());
        assert!(aborted.outcome.is_sample());

        let config = NormalizeConfig {
            nested_labels: NestedLabels::Stringify,
            ..Default::default()
        };
        let kept = normalize_with(Some(&raw), ChartMode::Categorical, &config);
        assert!(!kept.outcome.is_sample());
        assert_eq!(kept.series.labels(), vec!["{\"com"]);
        assert_eq!(kept.series.values(), vec![68.0]);
    }

    #[test]
    fn pie_preset_uses_pie_field_lists() {
        let raw = json!([
            { "key": "rust", "date": "2024-01-01", "price": 9, "total": 40 },
            { "id": 2, "count": 60 },
        ]);
        let out = normalize_with(Some(&raw), ChartMode::Proportional, &NormalizeConfig::pie_preset());
        let NormalizedSeries::Pie(pie) = out.series else {
            panic!("expected pie series");
        };
        assert_eq!(pie.slices[0].label, "rust");
        assert_eq!(pie.slices[0].value, 40.0);
        assert_eq!(pie.slices[1].label, "Item 2");
        assert_eq!(pie.slices[1].value, 60.0);
    }

    #[test]
    fn sign_is_discarded() {
        assert_eq!(bar(json!([{ "value": -30 }])).values, vec![30.0]);
    }

    #[test]
    fn map_input_skips_billion_threshold_by_default() {
        let out = bar(json!({ "world": 8_000_000_000u64 }));
        assert_eq!(out.suffix, MagnitudeSuffix::Million);
        assert_eq!(out.values, vec![8_000.0]);
    }

    #[test]
    fn uniform_magnitude_applies_billion_to_maps() {
        let config = NormalizeConfig {
            uniform_magnitude: true,
            ..Default::default()
        };
        let raw = json!({ "world": 8_000_000_000u64 });
        let out = normalize_with(Some(&raw), ChartMode::Categorical, &config);
        assert_eq!(out.series.magnitude_suffix(), MagnitudeSuffix::Billion);
        assert_eq!(out.series.values(), vec![8.0]);
    }

    #[test]
    fn non_container_input_falls_back_to_sample() {
        for raw in [json!(null), json!(42), json!("string"), json!(true)] {
            for mode in [ChartMode::Categorical, ChartMode::Proportional] {
                let out = normalize_with(Some(&raw), mode, &NormalizeConfig::default());
                assert_eq!(out.series, sample::sample_for(mode));
                assert!(out.outcome.is_sample());
            }
        }
    }

    #[test]
    fn absent_input_falls_back_with_no_input_reason() {
        let out = normalize_with(None, ChartMode::Proportional, &NormalizeConfig::default());
        assert_eq!(out.series, sample::sample_for(ChartMode::Proportional));
        assert_eq!(
            out.outcome,
            Outcome::Sample {
                reason: FallbackReason::NoInput
            }
        );
    }

    #[test]
    fn extraction_error_aborts_to_sample() {
        let raw = json!([{ "name": "ok", "value": 5 }, null]);
        let out = normalize_with(Some(&raw), ChartMode::Categorical, &NormalizeConfig::default());
        assert_eq!(out.series, sample::sample_for(ChartMode::Categorical));
        assert_eq!(
            out.outcome,
            Outcome::Sample {
                reason: FallbackReason::ExtractionFailed {
                    error: ExtractError::NullRecord { index: 1 }
                }
            }
        );
    }

    #[test]
    fn pie_slices_cycle_palette_and_keep_raw_weights() {
        let raw = json!([
            { "name": "Alpha Centauri", "value": 2_000_000 },
            { "name": "b", "value": -5 },
        ]);
        let out = pie(raw);
        assert_eq!(out.slices[0].label, "Alpha Cen");
        assert_eq!(out.slices[0].value, 2_000_000.0);
        assert_eq!(out.slices[1].value, 5.0);
        assert_eq!(out.slices[1].color_index, 1);
        assert_eq!(out.slices[1].legend, LegendStyle::default());
    }

    #[test]
    fn pie_map_input_uses_nine_character_labels() {
        let out = pie(json!({ "JavaScript": 4_000_000, "TypeScript": 120_000 }));
        let labels: Vec<&str> = out.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["JavaScrip", "TypeScrip"]);
        assert_eq!(out.slices[0].value, 4_000_000.0);
    }

    #[test]
    fn empty_array_in_pie_mode_has_no_slices() {
        assert!(pie(json!([])).slices.is_empty());
    }

    #[test]
    fn outcome_reports_shape_and_count() {
        let raw = json!([{ "value": 1 }, { "value": 2 }]);
        let out = normalize_with(Some(&raw), ChartMode::Categorical, &NormalizeConfig::default());
        assert_eq!(
            out.outcome,
            Outcome::Extracted {
                shape: Shape::Array,
                entries: 2
            }
        );
    }

    #[test]
    fn config_deserializes_partial_overrides() {
        let config: NormalizeConfig =
            serde_json::from_value(json!({ "value_fields": ["stars"], "max_entries": 3 })).unwrap();
        assert_eq!(config.max_entries, 3);
        assert_eq!(config.value_fields, FieldPriority::new(["stars"]));
        assert_eq!(config.label_fields, FieldPriority::labels());
        assert_eq!(config.bar_label_width, 5);
    }

    #[test]
    fn config_rejects_unknown_keys() {
        let parsed: Result<NormalizeConfig, _> =
            serde_json::from_value(json!({ "max_entrys": 3 }));
        assert!(parsed.is_err());
    }
}
