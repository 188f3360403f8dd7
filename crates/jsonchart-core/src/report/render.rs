use crate::TOOL_NAME;
use crate::chart::model::{BarSeries, NormalizedSeries, PieSeries};
use crate::normalize::{FallbackReason, Outcome};
use crate::report::model::Report;

const BAR_WIDTH: usize = 40;

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", TOOL_NAME, report.tool.version));
    out.push_str(&format!("{}\n", report.mode.title()));
    out.push_str(&format!("Outcome: {}\n", describe_outcome(&report.outcome)));

    match &report.series {
        NormalizedSeries::Bar(bar) => render_bars(&mut out, bar),
        NormalizedSeries::Pie(pie) => render_slices(&mut out, pie),
    }

    if let Some(note) = report.series.magnitude_suffix().note() {
        out.push_str(&format!("* {note}\n"));
    }

    if let Some(location) = &report.source.location {
        out.push_str(&format!("Data source: {location}\n"));
    }
    out
}

fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Extracted { shape, entries } => {
            format!("{entries} entries from {shape:?} payload").to_lowercase()
        }
        Outcome::Sample { reason } => match reason {
            FallbackReason::NoInput => "sample data (no input)".to_string(),
            FallbackReason::UnsupportedShape { kind } => {
                format!("sample data ({kind} payload cannot be charted)")
            }
            FallbackReason::ExtractionFailed { error } => format!("sample data ({error})"),
            FallbackReason::FetchFailed { message } => format!("sample data ({message})"),
        },
    }
}

fn render_bars(out: &mut String, bar: &BarSeries) {
    let max = bar.values.iter().copied().fold(0.0_f64, f64::max);
    let suffix = bar.suffix.short();

    for (index, value) in bar.values.iter().enumerate() {
        let label = bar.labels.get(index).map(String::as_str).unwrap_or("");
        let len = if max > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "  {label:<5} {:<width$} {value}{suffix}\n",
            "#".repeat(len),
            width = BAR_WIDTH
        ));
    }
}

fn render_slices(out: &mut String, pie: &PieSeries) {
    let total = pie.total();

    for slice in &pie.slices {
        let share = if total > 0.0 {
            slice.value / total * 100.0
        } else {
            0.0
        };
        out.push_str(&format!(
            "  {:<9} {:>6.1}%  {}  {}\n",
            slice.label, share, slice.value, slice.color
        ));
    }
}
