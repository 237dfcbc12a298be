//! Two-resistor combination tables.
//!
//! Every value is paired with itself and each later table value, so an
//! unordered pair appears exactly once and self-pairs are included.

use serde::{Deserialize, Serialize};

/// A pair of table values, stored in table order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub first: f64,
    pub second: f64,
}

impl Pair {
    /// Equivalent resistance of the two values in parallel.
    pub fn parallel(&self) -> f64 {
        self.first * self.second / (self.first + self.second)
    }

    /// Equivalent resistance of the two values in series.
    pub fn series(&self) -> f64 {
        self.first + self.second
    }
}

/// Precomputed parallel and series combinations of a value table.
///
/// Entries keep the enumeration order; the match search relies on it
/// for stable tie ordering, so these are ordered sequences rather
/// than keyed maps.
#[derive(Debug, Clone)]
pub struct CombinationIndex {
    parallel: Vec<(Pair, f64)>,
    series: Vec<(Pair, f64)>,
}

impl CombinationIndex {
    /// Enumerate all pairings of `table` and compute both combined
    /// values for each.
    pub fn build(table: &[f64]) -> Self {
        let count = table.len() * (table.len() + 1) / 2;
        let mut parallel = Vec::with_capacity(count);
        let mut series = Vec::with_capacity(count);
        for (i, &x) in table.iter().enumerate() {
            for &y in &table[i..] {
                let pair = Pair { first: x, second: y };
                parallel.push((pair, pair.parallel()));
                series.push((pair, pair.series()));
            }
        }
        Self { parallel, series }
    }

    /// Parallel combinations in enumeration order.
    pub fn parallel(&self) -> &[(Pair, f64)] {
        &self.parallel
    }

    /// Series combinations in enumeration order.
    pub fn series(&self) -> &[(Pair, f64)] {
        &self.series
    }
}
