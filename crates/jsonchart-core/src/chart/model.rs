use serde::{Deserialize, Serialize};

use crate::chart::palette::LegendStyle;

/// Requested presentation of the normalized data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChartMode {
    /// Independent labeled magnitudes (bar chart).
    #[serde(rename = "bar")]
    Categorical,
    /// Parts of a whole (pie chart).
    #[serde(rename = "pie")]
    Proportional,
}

impl ChartMode {
    /// Maximum label length, in characters, for this mode.
    pub fn label_width(self) -> usize {
        match self {
            ChartMode::Categorical => 5,
            ChartMode::Proportional => 9,
        }
    }

    /// A public endpoint whose payload renders well in this mode.
    pub fn sample_url(self) -> &'static str {
        match self {
            ChartMode::Categorical => "https://disease.sh/v3/covid-19/countries?sort=cases",
            ChartMode::Proportional => "https://api.github.com/repos/facebook/react/languages",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartMode::Categorical => "Bar Chart",
            ChartMode::Proportional => "Pie Chart",
        }
    }
}

impl std::fmt::Display for ChartMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartMode::Categorical => f.write_str("bar"),
            ChartMode::Proportional => f.write_str("pie"),
        }
    }
}

/// Common divisor applied to displayed bar values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum MagnitudeSuffix {
    #[default]
    None,
    Thousand,
    Million,
    Billion,
}

impl MagnitudeSuffix {
    pub fn divisor(self) -> f64 {
        match self {
            MagnitudeSuffix::None => 1.0,
            MagnitudeSuffix::Thousand => 1_000.0,
            MagnitudeSuffix::Million => 1_000_000.0,
            MagnitudeSuffix::Billion => 1_000_000_000.0,
        }
    }

    /// Axis suffix as shown next to bar values.
    pub fn short(self) -> &'static str {
        match self {
            MagnitudeSuffix::None => "",
            MagnitudeSuffix::Thousand => "K",
            MagnitudeSuffix::Million => "M",
            MagnitudeSuffix::Billion => "B",
        }
    }

    /// Footnote shown under a scaled chart.
    pub fn note(self) -> Option<&'static str> {
        match self {
            MagnitudeSuffix::None => None,
            MagnitudeSuffix::Thousand => Some("Values shown in Thousands"),
            MagnitudeSuffix::Million => Some("Values shown in Millions"),
            MagnitudeSuffix::Billion => Some("Values shown in Billions"),
        }
    }
}

/// Render-ready bar series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub suffix: MagnitudeSuffix,
}

/// One weighted pie slice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Position in the palette (`index mod palette length`).
    pub color_index: usize,
    pub color: String,
    pub legend: LegendStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PieSeries {
    pub slices: Vec<PieSlice>,
}

impl PieSeries {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Final output of normalization, tagged by presentation mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NormalizedSeries {
    Bar(BarSeries),
    Pie(PieSeries),
}

impl NormalizedSeries {
    pub fn mode(&self) -> ChartMode {
        match self {
            NormalizedSeries::Bar(_) => ChartMode::Categorical,
            NormalizedSeries::Pie(_) => ChartMode::Proportional,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        match self {
            NormalizedSeries::Bar(bar) => bar.labels.iter().map(String::as_str).collect(),
            NormalizedSeries::Pie(pie) => pie.slices.iter().map(|s| s.label.as_str()).collect(),
        }
    }

    pub fn values(&self) -> Vec<f64> {
        match self {
            NormalizedSeries::Bar(bar) => bar.values.clone(),
            NormalizedSeries::Pie(pie) => pie.slices.iter().map(|s| s.value).collect(),
        }
    }

    /// Pie series are never scaled.
    pub fn magnitude_suffix(&self) -> MagnitudeSuffix {
        match self {
            NormalizedSeries::Bar(bar) => bar.suffix,
            NormalizedSeries::Pie(_) => MagnitudeSuffix::None,
        }
    }
}
