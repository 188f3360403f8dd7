use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jsonchart_core::chart::model::ChartMode;
use jsonchart_core::normalize::NormalizeConfig;
use jsonchart_core::report::{model::ToolInfo, render};
use jsonchart_core::source::Source;
use jsonchart_core::{ChartRequest, generate};

mod args;

/// Exit code when `--strict` is set and the output is sample data.
const EXIT_SAMPLE: i32 = 2;

fn main() -> Result<()> {
    let args = args::Args::parse();
    init_logging(args.verbose);

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: args.commit.clone(),
    };

    let mode = ChartMode::from(args.mode);

    let source = if args.sample {
        None
    } else if args.sample_url {
        Some(Source::Url(mode.sample_url().to_string()))
    } else {
        match &args.source {
            Some(input) => Some(Source::parse(input)?),
            None => bail!("no source given; pass a URL, a file path, `-`, or --sample"),
        }
    };

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None if args.pie_fields => NormalizeConfig::pie_preset(),
        None => NormalizeConfig::default(),
    };

    let request = ChartRequest {
        source,
        mode,
        config,
        timeout: Duration::from_secs(args.timeout_secs),
        sample_on_fetch_error: args.fallback_sample,
    };

    tracing::debug!(%mode, source = ?request.source, "generating chart");
    let report = generate(&request, tool)?;

    let output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        args::OutputFormat::Text => render::render_text(&report),
    };

    match args.out {
        Some(path) => std::fs::write(&path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{output}"),
    }

    if args.strict && report.is_sample() {
        std::process::exit(EXIT_SAMPLE);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: &Path) -> Result<NormalizeConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config: {}", path.display()))
}
