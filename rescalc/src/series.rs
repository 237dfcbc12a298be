//! E-series preferred value tables.
//!
//! Generates one decade (10 to 100, both endpoints included) of a
//! standard E-series and applies the catalog corrections where the
//! rounded geometric values drift from the published part values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard E-series of preferred resistor values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ESeries {
    E3,
    E6,
    E12,
    E24,
    E48,
    #[default]
    E96,
    E192,
}

impl ESeries {
    /// Number of steps per decade in this series.
    pub fn steps(&self) -> usize {
        match self {
            ESeries::E3 => 3,
            ESeries::E6 => 6,
            ESeries::E12 => 12,
            ESeries::E24 => 24,
            ESeries::E48 => 48,
            ESeries::E96 => 96,
            ESeries::E192 => 192,
        }
    }

    /// Map a numeric series code to its series.
    ///
    /// Unrecognized codes fall back to E96 rather than failing.
    pub fn from_code(code: u32) -> Self {
        match code {
            3 => ESeries::E3,
            6 => ESeries::E6,
            12 => ESeries::E12,
            24 => ESeries::E24,
            48 => ESeries::E48,
            96 => ESeries::E96,
            192 => ESeries::E192,
            _ => ESeries::E96,
        }
    }

    /// Generate the ordered value table for one decade of this series.
    ///
    /// The table has `steps + 1` entries: `10^(1 + i/steps)` for each
    /// index, rounded per series group, with both decade endpoints
    /// included. Catalog corrections are applied afterwards.
    pub fn values(&self) -> Vec<f64> {
        let steps = self.steps();
        let places = self.decimal_places();
        let mut values: Vec<f64> = (0..=steps)
            .map(|i| round_to(10f64.powf(1.0 + i as f64 / steps as f64), places))
            .collect();
        apply_corrections(steps, &mut values);
        values
    }

    /// Decimal places used when rounding generated values.
    fn decimal_places(&self) -> i32 {
        match self {
            ESeries::E3 | ESeries::E6 | ESeries::E12 | ESeries::E24 => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for ESeries {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "E{}", self.steps())
    }
}

/// Corrections that map rounded geometric values onto real catalog
/// values, grouped by the series that share them. Each `(found,
/// replacement)` pair is located by exact equality on the rounded
/// table and replaced in place, in the order listed here.
const CORRECTIONS: &[(&[usize], &[(f64, f64)])] = &[
    (&[3, 6, 12, 24], &[(46.0, 47.0)]),
    (&[6, 12, 24], &[(32.0, 33.0)]),
    (&[12, 24], &[(26.0, 27.0), (38.0, 39.0), (83.0, 82.0)]),
    (&[24], &[(29.0, 30.0), (35.0, 36.0), (42.0, 43.0)]),
    (&[192], &[(91.9, 92.0)]),
];

fn apply_corrections(steps: usize, values: &mut [f64]) {
    for (members, swaps) in CORRECTIONS {
        if !members.contains(&steps) {
            continue;
        }
        for &(found, replacement) in *swaps {
            // A missing target means the correction table and the
            // rounding rules have diverged; that is a defect in this
            // module, not a runtime condition.
            let idx = values
                .iter()
                .position(|&v| v == found)
                .unwrap_or_else(|| panic!("correction target {found} missing from E{steps} table"));
            values[idx] = replacement;
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
