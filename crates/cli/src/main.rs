//! Half-precision engine CLI.
//!
//! Evaluates one operation of the binary16 engine and prints the encoded result. It
//! performs:
//! 1. **Setup:** Loads an optional JSON configuration and applies a `--rounding` override.
//! 2. **Parsing:** Reads the operation name and one or two operands (decimal or `0x` bits).
//! 3. **Output:** Prints `0xHHHH  value`, or a JSON object with `--json`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use halfsoft_core::{Config, Half, HalfFpu, Op, RoundingMode};

#[derive(Parser, Debug)]
#[command(
    name = "hf",
    author,
    version,
    about = "Evaluate IEEE 754 binary16 operations in software",
    long_about = "Evaluate one operation of the integer-only binary16 engine.\n\nOperands are decimal numbers (rounded to nearest-even on input) or 0x-prefixed bit patterns.\n\nExamples:\n  hf add 1.5 2.25\n  hf --rounding toward-zero div 1 3\n  hf --json sqrt 0x4000\n  hf atan2 1 -1"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rounding mode override (nearest-even, toward-zero, toward-negative, toward-positive, nearest-away).
    #[arg(short, long)]
    rounding: Option<RoundingMode>,

    /// Print the result as a JSON object.
    #[arg(long)]
    json: bool,

    /// Operation name (add, sqrt, sin, atan2, ...).
    op: Op,

    /// First operand.
    #[arg(allow_hyphen_values = true)]
    a: Half,

    /// Second operand, for two-operand operations.
    #[arg(allow_hyphen_values = true)]
    b: Option<Half>,
}

/// JSON form of one evaluation.
#[derive(Serialize, Debug)]
struct Evaluation {
    op: &'static str,
    mode: RoundingMode,
    bits: String,
    value: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

/// Builds the context, evaluates the operation and prints the result.
fn run(cli: &Cli) -> halfsoft_core::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let mut fpu = HalfFpu::new(&config);
    if let Some(mode) = cli.rounding {
        fpu.set_rounding_mode(mode);
    }

    cli.op.check_operands(1 + usize::from(cli.b.is_some()))?;
    let b = cli.b.unwrap_or(Half::ZERO);

    debug!(op = %cli.op, a = ?cli.a, b = ?b, mode = %fpu.rounding_mode(), "evaluating");
    let result = fpu.execute(cli.op, cli.a, b);

    if cli.json {
        let evaluation = Evaluation {
            op: cli.op.name(),
            mode: fpu.rounding_mode(),
            bits: format!("{:#06x}", result.to_bits()),
            value: result.to_string(),
        };
        println!("{}", serde_json::to_string(&evaluation)?);
    } else {
        println!("{:#06x}  {result}", result.to_bits());
    }
    Ok(())
}
