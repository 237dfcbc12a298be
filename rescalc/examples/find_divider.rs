//! Divider design example: find resistor pairs for a Vout/Vin ratio.

use rescalc::prelude::*;

fn main() -> Result<(), RescalcError> {
    let ratio: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.5);

    let calc = ResistorCalculator::default();
    let result = calc.get_ratios(ratio, Topology::Single, RatioType::Divider)?;

    println!("divider ratio {} -> R1/R2 target {}", ratio, result.target);
    println!();

    for m in result.matches.iter().take(10) {
        if let MatchKey::Ratio(Operand::Single(r1), Operand::Single(r2)) = m.key {
            println!("R1 = {}, R2 = {}; error: {:7.4}%", r1, r2, m.percent_error);
        }
    }

    Ok(())
}
