//! Built-in datasets used whenever the input cannot be charted.

use crate::chart::model::{BarSeries, ChartMode, MagnitudeSuffix, NormalizedSeries, PieSeries, PieSlice};
use crate::chart::palette::{self, LegendStyle};

const BAR_SAMPLE: [(&str, f64); 5] = [
    ("Jan", 65.0),
    ("Feb", 59.0),
    ("Mar", 80.0),
    ("Apr", 81.0),
    ("May", 56.0),
];

const PIE_SAMPLE: [(&str, f64); 4] = [("A", 35.0), ("B", 28.0), ("C", 22.0), ("D", 15.0)];

pub fn bar_sample() -> BarSeries {
    BarSeries {
        labels: BAR_SAMPLE.iter().map(|(l, _)| l.to_string()).collect(),
        values: BAR_SAMPLE.iter().map(|(_, v)| *v).collect(),
        suffix: MagnitudeSuffix::None,
    }
}

pub fn pie_sample() -> PieSeries {
    PieSeries {
        slices: PIE_SAMPLE
            .iter()
            .enumerate()
            .map(|(index, (label, value))| PieSlice {
                label: label.to_string(),
                value: *value,
                color_index: palette::color_index(index),
                color: palette::color_for(index).to_string(),
                legend: LegendStyle::default(),
            })
            .collect(),
    }
}

pub fn sample_for(mode: ChartMode) -> NormalizedSeries {
    match mode {
        ChartMode::Categorical => NormalizedSeries::Bar(bar_sample()),
        ChartMode::Proportional => NormalizedSeries::Pie(pie_sample()),
    }
}
