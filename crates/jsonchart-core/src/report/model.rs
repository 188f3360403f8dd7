use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;
use crate::chart::model::{ChartMode, NormalizedSeries};
use crate::normalize::{Normalization, Outcome};
use crate::source::Source;

/// Top-level jsonchart report.
///
/// Deterministic for identical payload bytes, mode and configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub source: SourceInfo,
    pub mode: ChartMode,
    pub outcome: Outcome,
    pub series: NormalizedSeries,
}

impl Report {
    pub fn new(tool: ToolInfo, source: SourceInfo, mode: ChartMode, normalization: Normalization) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            source,
            mode,
            outcome: normalization.outcome,
            series: normalization.series,
        }
    }

    /// True when the series is built-in sample data rather than the payload.
    pub fn is_sample(&self) -> bool {
        self.outcome.is_sample()
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
    pub commit: Option<String>,
}

/// Payload metadata bound to this report. All fields are empty when no
/// payload was read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SourceInfo {
    pub location: Option<String>,
    pub size_bytes: Option<u64>,
    pub hash: Option<PayloadHash>,
}

impl SourceInfo {
    pub fn none() -> Self {
        Self::default()
    }

    /// A source that was named but could not be loaded.
    pub fn unreachable(source: &Source) -> Self {
        Self {
            location: Some(source.to_string()),
            ..Self::default()
        }
    }
}

/// Payload fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayloadHash {
    pub algorithm: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{FallbackReason, sample};

    fn tool() -> ToolInfo {
        ToolInfo {
            name: "jsonchart".into(),
            version: "1.0.0".into(),
            commit: None,
        }
    }

    #[test]
    fn report_carries_schema_version_and_outcome() {
        let report = Report::new(
            tool(),
            SourceInfo::none(),
            ChartMode::Categorical,
            Normalization {
                series: sample::sample_for(ChartMode::Categorical),
                outcome: Outcome::Sample {
                    reason: FallbackReason::NoInput,
                },
            },
        );

        assert_eq!(report.schema_version, SCHEMA_VERSION);
        assert!(report.is_sample());
        assert_eq!(report.series.labels().len(), 5);
    }

    #[test]
    fn report_serializes_tagged_sections() {
        let report = Report::new(
            tool(),
            SourceInfo::unreachable(&Source::Url("https://x.test/data".into())),
            ChartMode::Proportional,
            Normalization {
                series: sample::sample_for(ChartMode::Proportional),
                outcome: Outcome::Sample {
                    reason: FallbackReason::FetchFailed {
                        message: "HTTP 500 from https://x.test/data".into(),
                    },
                },
            },
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "pie");
        assert_eq!(json["outcome"]["status"], "sample");
        assert_eq!(json["outcome"]["reason"]["cause"], "fetch_failed");
        assert_eq!(json["series"]["kind"], "pie");
        assert_eq!(json["source"]["location"], "https://x.test/data");
        assert!(json["source"]["hash"].is_null());
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = Report::new(
            tool(),
            SourceInfo::none(),
            ChartMode::Categorical,
            Normalization {
                series: sample::sample_for(ChartMode::Categorical),
                outcome: Outcome::Sample {
                    reason: FallbackReason::NoInput,
                },
            },
        );
        let text = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&text).unwrap();
        assert_eq!(back, report);
    }
}
