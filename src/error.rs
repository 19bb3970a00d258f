/// Parsing errors.
///
/// Defines all error types that can occur while splitting and classifying an
/// input line: a wrong token count, operands that are not numbers, malformed
/// Roman numerals, mixed numeral systems and unknown operators.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero or operands and results outside their permitted range.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
