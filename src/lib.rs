//! # romcalc
//!
//! romcalc is a calculator for single `<operand> <operator> <operand>`
//! expressions written in either Arabic or Roman numerals. It classifies and
//! validates the operands, applies one of `+ - * /`, and writes the result
//! back in the numeral system of the input.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Write};

use crate::interpreter::{evaluator::core::Context, parser::parse_expression};

/// Defines the structure of a parsed expression.
///
/// This module declares the operand, operator and expression types produced
/// by the parser and consumed by the evaluator, together with the numeral
/// system tag every operand carries.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while reading or
/// evaluating an expression. Every error is recoverable: the top level turns
/// it into a message instead of failing the process.
///
/// # Responsibilities
/// - Defines one error enum per phase (parser, evaluator).
/// - Renders each failure as a human-readable message.
pub mod error;
/// Orchestrates the evaluation of one expression.
///
/// This module ties together lexing, parsing and evaluation to turn a raw
/// input line into a result.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Enforces the operand and result range policy.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared by the parser and evaluator.
///
/// Holds the Roman numeral validator and converters.
pub mod util;

/// Evaluates one expression and returns the formatted result.
///
/// The source is parsed into an expression and evaluated under the given
/// context. The result is written in the numeral system of the operands.
///
/// # Errors
/// Returns an error if the input is malformed or evaluation fails, for
/// example on mixed numeral systems, an invalid Roman numeral, division by
/// zero, or an operand or result outside its permitted range.
///
/// # Examples
/// ```
/// use romcalc::{get_result, interpreter::evaluator::core::Context};
///
/// let context = Context::new();
///
/// assert_eq!(get_result("3 + 4", &context).unwrap(), "7");
/// assert_eq!(get_result("VII - III", &context).unwrap(), "IV");
///
/// // Roman and Arabic operands cannot be mixed.
/// assert!(get_result("V + 3", &context).is_err());
/// ```
pub fn get_result(source: &str, context: &Context) -> Result<String, Box<dyn std::error::Error>> {
    let expression = parse_expression(source)?;

    Ok(context.eval(&expression)?)
}

/// Evaluates one expression and returns either its result or the error
/// message.
///
/// This never fails: every error is rendered with its `Display` text.
///
/// # Examples
/// ```
/// use romcalc::{calc, interpreter::evaluator::core::Context};
///
/// assert_eq!(calc("7 / 2", &Context::new()), "3");
/// assert_eq!(calc("5 / 0", &Context::new()), "Division by zero.");
/// ```
#[must_use]
pub fn calc(source: &str, context: &Context) -> String {
    get_result(source, context).unwrap_or_else(|e| e.to_string())
}

/// Runs one prompt/answer exchange of the command-line calculator.
///
/// When `expression` is `None`, `Input:` is written to `out` and one line is
/// read from `input`. The line is read as raw bytes and decoded lossily, so
/// bytes that are not valid UTF-8 reach the parser and are reported as an
/// ordinary evaluation error. An empty line is written, then `Output:` and
/// the result or error message.
///
/// # Errors
/// Returns an error only if reading `input` or writing `out` fails.
///
/// # Examples
/// ```
/// use romcalc::{interpreter::evaluator::core::Context, run};
///
/// let mut out = Vec::new();
/// run(None, "VII - III\n".as_bytes(), &mut out, &Context::new()).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Input:\n\nOutput:\nIV\n");
/// ```
pub fn run(expression: Option<&str>,
           mut input: impl BufRead,
           mut out: impl Write,
           context: &Context)
           -> io::Result<()> {
    let line = match expression {
        Some(expression) => expression.to_string(),
        None => {
            writeln!(out, "Input:")?;
            out.flush()?;
            let mut buf = Vec::new();
            input.read_until(b'\n', &mut buf)?;
            String::from_utf8_lossy(&buf).into_owned()
        },
    };

    writeln!(out, "\nOutput:")?;
    writeln!(out, "{}", calc(&line, context))?;
    out.flush()
}
