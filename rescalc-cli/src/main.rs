//! Rescalc CLI - find standard resistor values and ratios from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use rescalc::{
    ESeries, MatchKey, MatchResult, Operand, RatioType, ResistorCalculator, Topology,
};
use std::process;

#[derive(Parser)]
#[command(name = "rescalc")]
#[command(about = "E-series resistor value and ratio finder", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find single resistors or two-resistor combinations nearest a value
    Value {
        /// Target resistance
        #[arg(value_name = "OHMS")]
        target: f64,

        /// Resistor arrangement to search
        #[arg(short, long, value_enum, default_value = "single")]
        topology: TopologyArg,

        /// E-series code (3, 6, 12, 24, 48, 96, 192); unknown codes use 96
        #[arg(short, long, default_value_t = 96)]
        series: u32,

        /// Minimum number of matches to collect
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Find resistor pairs or combinations nearest a ratio
    Ratio {
        /// Target ratio (R1/R2, or Vout/Vin with --divider)
        #[arg(value_name = "RATIO")]
        target: f64,

        /// Resistor arrangement to search
        #[arg(short, long, value_enum, default_value = "single")]
        topology: TopologyArg,

        /// Interpret the target as a voltage divider ratio (Vout/Vin)
        #[arg(short, long)]
        divider: bool,

        /// E-series code (3, 6, 12, 24, 48, 96, 192); unknown codes use 96
        #[arg(short, long, default_value_t = 96)]
        series: u32,

        /// Minimum number of matches to collect
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Print the preferred value table for a series
    Table {
        /// E-series code (3, 6, 12, 24, 48, 96, 192); unknown codes use 96
        #[arg(short, long, default_value_t = 96)]
        series: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TopologyArg {
    /// A single resistor
    Single,
    /// Two resistors in parallel
    Parallel,
    /// Two resistors in series
    Series,
}

impl From<TopologyArg> for Topology {
    fn from(arg: TopologyArg) -> Self {
        match arg {
            TopologyArg::Single => Topology::Single,
            TopologyArg::Parallel => Topology::Parallel,
            TopologyArg::Series => Topology::Series,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripting
    Json,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Value {
            target,
            topology,
            series,
            count,
            format,
        } => handle_value(target, topology, series, count, format),
        Commands::Ratio {
            target,
            topology,
            divider,
            series,
            count,
            format,
        } => handle_ratio(target, topology, divider, series, count, format),
        Commands::Table { series } => {
            handle_table(series);
            0
        }
    };

    process::exit(exit_code);
}

fn calculator(series: u32, count: usize) -> ResistorCalculator {
    ResistorCalculator::new(ESeries::from_code(series)).with_min_results(count)
}

fn handle_value(
    target: f64,
    topology: TopologyArg,
    series: u32,
    count: usize,
    format: OutputFormat,
) -> i32 {
    let calc = calculator(series, count);

    match calc.get_resistors(target, topology.into()) {
        Ok(result) => {
            match format {
                OutputFormat::Human => {
                    println!("target resistor: {}", target);
                    print_matches(&result);
                }
                OutputFormat::Json => output_json(target, &result),
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_ratio(
    target: f64,
    topology: TopologyArg,
    divider: bool,
    series: u32,
    count: usize,
    format: OutputFormat,
) -> i32 {
    let calc = calculator(series, count);
    let ratio_type = if divider {
        RatioType::Divider
    } else {
        RatioType::Ratio
    };

    match calc.get_ratios(target, topology.into(), ratio_type) {
        Ok(result) => {
            match format {
                OutputFormat::Human => {
                    // For divider queries the requested Vout/Vin reads
                    // better than the transformed R1/R2 target.
                    println!("target ratio: {}", target);
                    print_matches(&result);
                }
                OutputFormat::Json => output_json(target, &result),
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_table(series: u32) {
    let calc = ResistorCalculator::new(ESeries::from_code(series));

    println!("{} preferred values:", calc.series());
    for value in calc.values() {
        println!("{}", value);
    }
}

fn print_matches(result: &MatchResult) {
    for m in &result.matches {
        println!(
            "{}; error: {:7.4}%",
            render_key(&m.key, result.topology),
            m.percent_error
        );
    }
}

fn render_key(key: &MatchKey, topology: Topology) -> String {
    match key {
        MatchKey::Single(value) => format!("{}", value),
        MatchKey::Pair(pair) => {
            format!("{} {} {}", pair.first, join_op(topology), pair.second)
        }
        MatchKey::Ratio(left, right) => format!(
            "{}, {}",
            render_operand(left, topology),
            render_operand(right, topology)
        ),
    }
}

fn render_operand(operand: &Operand, topology: Topology) -> String {
    match operand {
        Operand::Single(value) => format!("{}", value),
        Operand::Pair(pair) => {
            format!("{} {} {}", pair.first, join_op(topology), pair.second)
        }
    }
}

fn join_op(topology: Topology) -> &'static str {
    match topology {
        Topology::Parallel => "//",
        _ => "+",
    }
}

fn output_json(requested: f64, result: &MatchResult) {
    let output = serde_json::json!({
        "requested": requested,
        "target": result.target,
        "topology": result.topology,
        "matches": result.matches,
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
