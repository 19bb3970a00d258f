use crate::{
    ast::{BinaryOperator, Expression, NumeralSystem, Operand},
    error::ParseError,
    interpreter::lexer::{LexError, Token, classify},
    util::roman::{roman_to_decimal, validate},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// An operand word that lexed as a literal, before grammar checks.
enum Literal {
    Arabic(i64),
    Roman(String),
}

impl Literal {
    const fn system(&self) -> NumeralSystem {
        match self {
            Self::Arabic(_) => NumeralSystem::Arabic,
            Self::Roman(_) => NumeralSystem::Roman,
        }
    }
}

/// Splits a raw line into its whitespace-separated words.
///
/// Leading and trailing whitespace is ignored and runs of whitespace count as
/// a single separator.
///
/// # Errors
/// Returns `InvalidFormat` unless there are exactly three words.
///
/// # Example
/// ```
/// use romcalc::{error::ParseError, interpreter::parser::tokenize};
///
/// assert_eq!(tokenize("  3 \t+   4 ").unwrap(), ["3", "+", "4"]);
/// assert_eq!(tokenize("3+4"), Err(ParseError::InvalidFormat { found: 1 }));
/// ```
pub fn tokenize(source: &str) -> ParseResult<[&str; 3]> {
    let words: Vec<&str> = source.split_whitespace().collect();

    <[&str; 3]>::try_from(words.as_slice()).map_err(|_| {
                                                   ParseError::InvalidFormat { found: words.len() }
                                               })
}

/// Parses a full `<operand> <operator> <operand>` expression.
///
/// Checks run in a fixed order and stop at the first failure: token count,
/// left then right operand classification, numeral system match, operator,
/// and finally Roman numeral grammar of the left then right operand.
///
/// # Errors
/// Returns the `ParseError` of the first failing check.
///
/// # Example
/// ```
/// use romcalc::{
///     ast::{BinaryOperator, NumeralSystem},
///     interpreter::parser::parse_expression,
/// };
///
/// let expr = parse_expression("VII - III").unwrap();
/// assert_eq!(expr.system(), NumeralSystem::Roman);
/// assert_eq!(expr.op, BinaryOperator::Sub);
/// assert_eq!((expr.left.value, expr.right.value), (7, 3));
/// ```
pub fn parse_expression(source: &str) -> ParseResult<Expression> {
    let [left, op, right] = tokenize(source)?;

    let left = parse_literal(left)?;
    let right = parse_literal(right)?;

    let (left_system, right_system) = (left.system(), right.system());
    if left_system != right_system {
        return Err(ParseError::MixedNumeralSystems { left:  left_system,
                                                     right: right_system, });
    }

    let op = parse_operator(op)?;

    Ok(Expression { left: parse_operand(left)?,
                    op,
                    right: parse_operand(right)? })
}

/// Classifies an operand word as an Arabic or Roman literal.
///
/// # Errors
/// - `LiteralTooLarge` for digit strings that overflow `i64`.
/// - `InvalidNumberFormat` for anything that is not a single literal.
fn parse_literal(word: &str) -> ParseResult<Literal> {
    match classify(word) {
        Some(Ok(Token::Arabic(value))) => Ok(Literal::Arabic(value)),
        Some(Ok(Token::Roman(numeral))) => Ok(Literal::Roman(numeral)),
        Some(Err(LexError::LiteralTooLarge)) => {
            Err(ParseError::LiteralTooLarge { token: word.to_string() })
        },
        _ => Err(ParseError::InvalidNumberFormat { token: word.to_string() }),
    }
}

/// Parses an operator word.
///
/// # Errors
/// Returns `InvalidOperator` unless the word is exactly `+`, `-`, `*` or `/`.
///
/// # Example
/// ```
/// use romcalc::{ast::BinaryOperator, interpreter::parser::parse_operator};
///
/// assert_eq!(parse_operator("*").unwrap(), BinaryOperator::Mul);
/// assert!(parse_operator("%").is_err());
/// assert!(parse_operator("++").is_err());
/// ```
pub fn parse_operator(word: &str) -> ParseResult<BinaryOperator> {
    match classify(word) {
        Some(Ok(Token::Plus)) => Ok(BinaryOperator::Add),
        Some(Ok(Token::Minus)) => Ok(BinaryOperator::Sub),
        Some(Ok(Token::Star)) => Ok(BinaryOperator::Mul),
        Some(Ok(Token::Slash)) => Ok(BinaryOperator::Div),
        _ => Err(ParseError::InvalidOperator { token: word.to_string() }),
    }
}

/// Turns a literal into an operand, validating Roman grammar first.
fn parse_operand(literal: Literal) -> ParseResult<Operand> {
    match literal {
        Literal::Roman(numeral) => {
            if let Err(rule) = validate(&numeral) {
                return Err(ParseError::InvalidRomanNumeral { numeral, rule });
            }
            // `validate` accepts only non-empty Roman digit strings.
            let value = roman_to_decimal(&numeral).unwrap_or_default();
            Ok(Operand::roman(value))
        },
        Literal::Arabic(value) => Ok(Operand::arabic(value)),
    }
}
