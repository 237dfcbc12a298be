//! Ratio tables across topologies and the divider transform.

use serde::{Deserialize, Serialize};

use crate::combine::{CombinationIndex, Pair};
use crate::core::{RescalcError, Topology};

/// One side of a ratio: a single resistor or a two-resistor combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Single(f64),
    Pair(Pair),
}

/// Build the ratio table for `topology` over `table` and `combos`.
///
/// For the combination topologies both orientations of every pairing
/// are stored, since `x / y` and `y / x` place different physical
/// resistors on each side of the ratio.
pub fn build_ratios(
    table: &[f64],
    combos: &CombinationIndex,
    topology: Topology,
) -> Vec<((Operand, Operand), f64)> {
    match topology {
        Topology::Single => {
            let mut ratios = Vec::with_capacity(table.len() * table.len());
            for &x in table {
                for &y in table {
                    ratios.push(((Operand::Single(x), Operand::Single(y)), x / y));
                }
            }
            ratios
        }
        Topology::Parallel => paired_ratios(table, combos.parallel()),
        Topology::Series => paired_ratios(table, combos.series()),
    }
}

fn paired_ratios(table: &[f64], combos: &[(Pair, f64)]) -> Vec<((Operand, Operand), f64)> {
    let mut ratios = Vec::with_capacity(2 * table.len() * combos.len());
    for &x in table {
        for &(pair, value) in combos {
            ratios.push(((Operand::Single(x), Operand::Pair(pair)), x / value));
            ratios.push(((Operand::Pair(pair), Operand::Single(x)), value / x));
        }
    }
    ratios
}

/// Convert a divider ratio (Vout/Vin) into the equivalent R1/R2 target.
///
/// From `Vout/Vin = R2 / (R1 + R2)`: `R1/R2 = 1/ratio - 1`. A resistive
/// divider can never amplify, so ratios above 1 are rejected before any
/// search runs.
pub fn divider_to_ratio(divider: f64) -> Result<f64, RescalcError> {
    if divider > 1.0 {
        return Err(RescalcError::InvalidDividerRatio(divider));
    }
    if divider == 0.0 {
        return Err(RescalcError::DegenerateTarget);
    }
    Ok(1.0 / divider - 1.0)
}
