/// The evaluator module applies operators and formats results.
///
/// The evaluator takes a parsed expression, enforces the operand window,
/// performs the arithmetic and writes the result back in the operands'
/// numeral system under the active range policy.
///
/// # Responsibilities
/// - Checks operands and results against their permitted windows.
/// - Performs checked integer arithmetic.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module classifies words of input.
///
/// Each whitespace-separated word is lexed on its own and recognized as an
/// Arabic literal, a Roman literal or an operator.
pub mod lexer;
/// The parser module builds an expression from an input line.
///
/// # Responsibilities
/// - Splits the line into exactly three words.
/// - Classifies operands and rejects mixed numeral systems.
/// - Validates Roman numeral grammar and decodes operand values.
pub mod parser;
