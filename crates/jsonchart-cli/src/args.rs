use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use jsonchart_core::chart::model::ChartMode;

#[derive(Debug, Parser)]
#[command(
    name = "jsonchart",
    version,
    about = "Turn any JSON endpoint into chart-ready bar or pie series"
)]
pub struct Args {
    /// URL, file path, or `-` for stdin
    pub source: Option<String>,

    /// Chart type
    #[arg(long, value_enum, default_value = "bar")]
    pub mode: Mode,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// JSON file overriding field lists, entry cap and label widths
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Use the field lists tuned for pie payloads (`key` labels, `Item N` fallback)
    #[arg(long, conflicts_with = "config")]
    pub pie_fields: bool,

    /// Emit the built-in sample for the chosen mode without reading any input
    #[arg(long, conflicts_with_all = ["source", "sample_url"])]
    pub sample: bool,

    /// Fetch the public sample endpoint for the chosen mode
    #[arg(long, conflicts_with = "source")]
    pub sample_url: bool,

    /// Emit the sample instead of failing when the fetch or JSON decode fails
    #[arg(long)]
    pub fallback_sample: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Exit with code 2 when the output is sample data
    #[arg(long)]
    pub strict: bool,

    /// Optional git commit hash for tool metadata
    #[arg(long)]
    pub commit: Option<String>,

    /// Log extraction details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Mode {
    Bar,
    Pie,
}

impl From<Mode> for ChartMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Bar => ChartMode::Categorical,
            Mode::Pie => ChartMode::Proportional,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
