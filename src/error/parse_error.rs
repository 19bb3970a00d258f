use crate::{ast::NumeralSystem, util::roman::RomanRule};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading an expression.
pub enum ParseError {
    /// The input did not split into exactly three tokens.
    InvalidFormat {
        /// How many whitespace-separated tokens were found.
        found: usize,
    },
    /// An operand is neither an Arabic nor a Roman number.
    InvalidNumberFormat {
        /// The offending token.
        token: String,
    },
    /// An Arabic literal does not fit into a 64-bit integer.
    LiteralTooLarge {
        /// The offending token.
        token: String,
    },
    /// An operand is made of Roman digits but breaks Roman numeral grammar.
    InvalidRomanNumeral {
        /// The offending numeral.
        numeral: String,
        /// The first grammar rule it breaks.
        rule:    RomanRule,
    },
    /// One operand is Roman and the other Arabic.
    MixedNumeralSystems {
        /// Numeral system of the left operand.
        left:  NumeralSystem,
        /// Numeral system of the right operand.
        right: NumeralSystem,
    },
    /// The operator is not one of `+`, `-`, `*` or `/`.
    InvalidOperator {
        /// The offending token.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat { found } => write!(f,
                                                    "Invalid input format: expected `<operand> <operator> <operand>`, found {found} token(s)."),

            Self::InvalidNumberFormat { token } => {
                write!(f, "Invalid number format: '{token}' is neither an Arabic nor a Roman number.")
            },

            Self::LiteralTooLarge { token } => write!(f, "Literal '{token}' is too large."),

            Self::InvalidRomanNumeral { numeral, rule } => {
                write!(f, "Invalid Roman numeral '{numeral}': {rule}.")
            },

            Self::MixedNumeralSystems { left, right } => write!(f,
                                                                "Mixed numeral systems: cannot combine {left} and {right} operands."),

            Self::InvalidOperator { token } => {
                write!(f, "Invalid operator '{token}': expected one of + - * /.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
