#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum RuntimeError {
    /// An operand or result falls outside its permitted window.
    OutOfRange {
        /// The rejected value.
        value: i64,
        /// Smallest permitted value.
        min:   i64,
        /// Largest permitted value.
        max:   i64,
    },
    /// A Roman result is zero or negative and has no Roman spelling.
    InvalidResult {
        /// The rejected value.
        value: i64,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic operation overflowed.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { value, min, max } => {
                write!(f, "Value {value} is out of range [{min}, {max}].")
            },
            Self::InvalidResult { value } => write!(f,
                                                    "Invalid result: {value} cannot be written as a Roman numeral."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
