/// Core evaluation logic and range policy.
///
/// Contains the evaluation context, the operand and result windows, and the
/// entry point that turns a parsed expression into its formatted result.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements checked integer arithmetic for `+`, `-`, `*` and `/`.
pub mod binary;

/// Result formatting.
///
/// Writes a computed value back in the numeral system of its operands,
/// enforcing the result window of the active context.
pub mod format;
