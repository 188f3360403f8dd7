pub mod chart;
pub mod normalize;
pub mod report;
pub mod source;
pub mod util;

use std::time::Duration;

use anyhow::Result;

use crate::chart::model::ChartMode;
use crate::normalize::{FallbackReason, Normalization, NormalizeConfig, Outcome, sample};
use crate::report::model::{Report, SourceInfo, ToolInfo};
use crate::source::{FetchOptions, Source, decode, read};

pub const TOOL_NAME: &str = "jsonchart";

/// JSON schema version of jsonchart reports.
/// Bump only when the report layout changes semantically.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Everything a single "generate" action needs.
#[derive(Debug, Clone)]
pub struct ChartRequest {
    /// Where the payload comes from. `None` means "no input".
    pub source: Option<Source>,
    pub mode: ChartMode,
    pub config: NormalizeConfig,
    pub timeout: Duration,
    /// Emit the mode's sample instead of failing when the fetch or decode fails.
    pub sample_on_fetch_error: bool,
}

impl ChartRequest {
    pub fn new(source: Option<Source>, mode: ChartMode) -> Self {
        Self {
            source,
            mode,
            config: NormalizeConfig::default(),
            timeout: FetchOptions::default().timeout,
            sample_on_fetch_error: false,
        }
    }
}

/// Run the full pipeline: read or fetch, decode, normalize, assemble a report.
///
/// Normalization itself never fails. Errors returned here come from the
/// source layer only, and only when `sample_on_fetch_error` is off.
pub fn generate(request: &ChartRequest, tool: ToolInfo) -> Result<Report> {
    let Some(source) = &request.source else {
        let normalization = normalize::normalize_with(None, request.mode, &request.config);
        return Ok(Report::new(tool, SourceInfo::none(), request.mode, normalization));
    };

    let options = FetchOptions {
        timeout: request.timeout,
    };

    let loaded = read::read_source(source, &options)
        .and_then(|ctx| decode::decode_json(&ctx.bytes).map(|value| (ctx, value)));

    match loaded {
        Ok((ctx, value)) => {
            let normalization =
                normalize::normalize_with(Some(&value), request.mode, &request.config);
            Ok(Report::new(
                tool,
                ctx.into_source_info(),
                request.mode,
                normalization,
            ))
        }
        Err(err) if request.sample_on_fetch_error => {
            tracing::warn!(source = %source, error = %err, "fetch failed, using sample data");
            let normalization = Normalization {
                series: sample::sample_for(request.mode),
                outcome: Outcome::Sample {
                    reason: FallbackReason::FetchFailed {
                        message: err.to_string(),
                    },
                },
            };
            Ok(Report::new(
                tool,
                SourceInfo::unreachable(source),
                request.mode,
                normalization,
            ))
        }
        Err(err) => {
            Err(anyhow::Error::new(err).context(format!("unable to load chart data from {source}")))
        }
    }
}
