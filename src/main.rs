use std::io;

use clap::Parser;
use romcalc::{interpreter::evaluator::core::Context, run};

/// romcalc evaluates one `<operand> <operator> <operand>` expression written
/// in Arabic or Roman numerals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Holds results to the operand range 1..=10 in both numeral systems.
    #[arg(short, long)]
    strict: bool,

    /// The expression to evaluate. When omitted, one line is read from
    /// standard input.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let context = if args.strict { Context::strict() } else { Context::new() };

    let expression = args.expression.as_deref();

    if let Err(e) = run(expression, io::stdin().lock(), io::stdout().lock(), &context) {
        eprintln!("Failed to read input or write output: {e}");
        std::process::exit(1);
    }
}
