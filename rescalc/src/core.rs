//! Calculator facade shared by library consumers and the CLI.

use serde::Serialize;

use crate::combine::{CombinationIndex, Pair};
use crate::matcher::{find_matches, COMBINATION_INCREMENT, SINGLE_INCREMENT};
use crate::ratio::{build_ratios, divider_to_ratio, Operand};
use crate::series::ESeries;

#[derive(Debug, thiserror::Error)]
pub enum RescalcError {
    /// A resistive divider attenuates; requested ratios above 1 are
    /// rejected before any search runs.
    #[error("divider ratio cannot be greater than 1")]
    InvalidDividerRatio(f64),
    /// A zero target makes percent error undefined.
    #[error("target value must be non-zero")]
    DegenerateTarget,
}

/// Physical arrangement of the resistors under consideration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Topology {
    #[default]
    Single,
    Parallel,
    Series,
}

/// How a requested ratio target is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RatioType {
    /// The target is the resistor ratio R1/R2 itself.
    #[default]
    Ratio,
    /// The target is a voltage divider ratio Vout/Vin; the equivalent
    /// R1/R2 ratio is searched instead.
    Divider,
}

/// What one match identifies, in a shape a formatter can render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MatchKey {
    /// One resistor straight from the value table.
    Single(f64),
    /// A two-resistor combination, parallel or series per the query
    /// topology.
    Pair(Pair),
    /// A ratio between two operands, either side possibly a combination.
    Ratio(Operand, Operand),
}

/// One accepted candidate with its signed percent error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match {
    pub key: MatchKey,
    pub percent_error: f64,
}

/// Ordered result of one query, nearest candidates first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// The numeric target the search ran against. For divider queries
    /// this is the transformed R1/R2 ratio, not the requested Vout/Vin.
    pub target: f64,
    pub topology: Topology,
    pub matches: Vec<Match>,
}

/// Finds standard resistor values and two-resistor combinations
/// nearest a requested value or ratio.
///
/// The value table and both combination tables are built once at
/// construction and never change; queries borrow the calculator
/// immutably and return fresh results, so one instance can serve any
/// number of queries (and concurrent readers).
#[derive(Debug, Clone)]
pub struct ResistorCalculator {
    series: ESeries,
    min_results: usize,
    values: Vec<f64>,
    combinations: CombinationIndex,
}

impl Default for ResistorCalculator {
    fn default() -> Self {
        Self::new(ESeries::default())
    }
}

impl ResistorCalculator {
    pub fn new(series: ESeries) -> Self {
        let values = series.values();
        let combinations = CombinationIndex::build(&values);
        Self {
            series,
            min_results: 5,
            values,
            combinations,
        }
    }

    /// Minimum number of matches a query collects before it stops
    /// widening the error band. Defaults to 5.
    pub fn with_min_results(mut self, min_results: usize) -> Self {
        self.min_results = min_results;
        self
    }

    pub fn series(&self) -> ESeries {
        self.series
    }

    /// The corrected preferred value table for the configured series.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Find single resistors or two-resistor combinations nearest
    /// `target`, ranked by absolute percent error.
    pub fn get_resistors(
        &self,
        target: f64,
        topology: Topology,
    ) -> Result<MatchResult, RescalcError> {
        if target == 0.0 {
            return Err(RescalcError::DegenerateTarget);
        }

        let matches: Vec<Match> = match topology {
            Topology::Single => {
                let candidates: Vec<(f64, f64)> = self.values.iter().map(|&v| (v, v)).collect();
                tracing::debug!(
                    "searching {} single resistors for {}",
                    candidates.len(),
                    target
                );
                find_matches(&candidates, target, self.min_results, SINGLE_INCREMENT)
                    .into_iter()
                    .map(|(value, error)| Match {
                        key: MatchKey::Single(value),
                        percent_error: error,
                    })
                    .collect()
            }
            Topology::Parallel | Topology::Series => {
                let candidates = match topology {
                    Topology::Parallel => self.combinations.parallel(),
                    _ => self.combinations.series(),
                };
                tracing::debug!(
                    "searching {} {:?} combinations for {}",
                    candidates.len(),
                    topology,
                    target
                );
                find_matches(candidates, target, self.min_results, COMBINATION_INCREMENT)
                    .into_iter()
                    .map(|(pair, error)| Match {
                        key: MatchKey::Pair(pair),
                        percent_error: error,
                    })
                    .collect()
            }
        };
        tracing::debug!("collected {} matches", matches.len());

        Ok(MatchResult {
            target,
            topology,
            matches,
        })
    }

    /// Find resistor ratios nearest `target`, ranked by absolute
    /// percent error.
    ///
    /// With [`RatioType::Divider`] the target is a Vout/Vin ratio and
    /// the search runs against the equivalent R1/R2 ratio; the ratio
    /// table for the requested topology is rebuilt per query.
    pub fn get_ratios(
        &self,
        target: f64,
        topology: Topology,
        ratio_type: RatioType,
    ) -> Result<MatchResult, RescalcError> {
        let target = match ratio_type {
            RatioType::Ratio => target,
            RatioType::Divider => divider_to_ratio(target)?,
        };
        if target == 0.0 {
            return Err(RescalcError::DegenerateTarget);
        }

        let ratios = build_ratios(&self.values, &self.combinations, topology);
        let increment = match topology {
            Topology::Single => SINGLE_INCREMENT,
            _ => COMBINATION_INCREMENT,
        };
        tracing::debug!(
            "searching {} {:?} ratios for {}",
            ratios.len(),
            topology,
            target
        );

        let matches: Vec<Match> = find_matches(&ratios, target, self.min_results, increment)
            .into_iter()
            .map(|((left, right), error)| Match {
                key: MatchKey::Ratio(left, right),
                percent_error: error,
            })
            .collect();
        tracing::debug!("collected {} matches", matches.len());

        Ok(MatchResult {
            target,
            topology,
            matches,
        })
    }
}
