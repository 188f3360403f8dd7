//! Magnitude scaling for bar values.
//!
//! The largest value picks one common divisor for the whole series:
//!
//!   - max > 1e9 → billions (only on the full ladder)
//!   - max > 1e6 → millions
//!   - max > 1e3 → thousands
//!   - else      → unscaled
//!
//! Scaled values are rounded to whole numbers.

use serde::{Deserialize, Serialize};

use crate::chart::model::MagnitudeSuffix;

/// Which thresholds are in play.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudeLadder {
    /// Billion, million, thousand.
    Full,
    /// Million, thousand. Billion-scale values are expressed in millions.
    WithoutBillion,
}

impl MagnitudeLadder {
    fn steps(self) -> &'static [MagnitudeSuffix] {
        match self {
            MagnitudeLadder::Full => &[
                MagnitudeSuffix::Billion,
                MagnitudeSuffix::Million,
                MagnitudeSuffix::Thousand,
            ],
            MagnitudeLadder::WithoutBillion => {
                &[MagnitudeSuffix::Million, MagnitudeSuffix::Thousand]
            }
        }
    }
}

/// Suffix chosen for a series whose largest value is `max`.
pub fn pick_suffix(max: f64, ladder: MagnitudeLadder) -> MagnitudeSuffix {
    ladder
        .steps()
        .iter()
        .copied()
        .find(|suffix| max > suffix.divisor())
        .unwrap_or(MagnitudeSuffix::None)
}

/// Scale `values` by a common divisor. An empty slice yields `(vec![], None)`.
pub fn scale(values: &[f64], ladder: MagnitudeLadder) -> (Vec<f64>, MagnitudeSuffix) {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let suffix = pick_suffix(max, ladder);

    if suffix == MagnitudeSuffix::None {
        return (values.to_vec(), suffix);
    }

    let divisor = suffix.divisor();
    let scaled = values.iter().map(|v| (v / divisor).round()).collect();
    (scaled, suffix)
}
