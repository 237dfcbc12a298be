//! Rescalc - E-series resistor value and ratio matching
//!
//! This library finds standard resistor values, or combinations of two
//! standard resistors, whose value, sum, parallel combination, or
//! ratio best approximates a requested target. Values are drawn from
//! the IEC E-series preferred value tables (E3 through E192), with the
//! catalog corrections real parts use.
//!
//! # Quick Start
//!
//! ```
//! use rescalc::{ResistorCalculator, Topology};
//!
//! let calc = ResistorCalculator::default();
//! let result = calc.get_resistors(45.0, Topology::Series).unwrap();
//!
//! for m in &result.matches {
//!     println!("{:?}: {:.4}%", m.key, m.percent_error);
//! }
//! ```
//!
//! # Features
//!
//! - **Value search**: single resistors or series/parallel pairs nearest a target
//! - **Ratio search**: resistor ratios across the three topologies
//! - **Divider targets**: Vout/Vin ratios translated to the equivalent R1/R2
//! - **Real-world tables**: E3 through E192 with catalog corrections

pub mod combine;
pub mod core;
pub mod matcher;
pub mod ratio;
pub mod series;

// Re-export main types
pub use crate::core::{
    Match, MatchKey, MatchResult, RatioType, RescalcError, ResistorCalculator, Topology,
};
pub use combine::{CombinationIndex, Pair};
pub use ratio::Operand;
pub use series::ESeries;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ESeries, Match, MatchKey, MatchResult, Operand, Pair, RatioType, RescalcError,
        ResistorCalculator, Topology,
    };
}
