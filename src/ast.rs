/// The numeral system an operand is written in.
///
/// Both operands of an [`Expression`] always share one system, and the
/// result is written back in that same system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralSystem {
    /// Decimal digits, e.g. `7`.
    Arabic,
    /// Roman digits, e.g. `VII`.
    Roman,
}

impl std::fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arabic => write!(f, "Arabic"),
            Self::Roman => write!(f, "Roman"),
        }
    }
}

/// A parsed operand: its integer value and the system it was written in.
///
/// The value is not range checked here; the evaluator enforces the operand
/// window before applying the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// The numeral system of the source token.
    pub system: NumeralSystem,
    /// The decoded integer value.
    pub value:  i64,
}

impl Operand {
    /// Creates an Arabic operand.
    #[must_use]
    pub const fn arabic(value: i64) -> Self {
        Self { system: NumeralSystem::Arabic,
               value }
    }

    /// Creates a Roman operand from an already decoded value.
    #[must_use]
    pub const fn roman(value: i64) -> Self {
        Self { system: NumeralSystem::Roman,
               value }
    }
}

/// Represents a binary operator.
///
/// Only the four basic arithmetic operators are supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// A complete `<operand> <operator> <operand>` expression.
///
/// An `Expression` is only ever built by the parser, which guarantees that
/// both operands share the same [`NumeralSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    /// Left operand.
    pub left:  Operand,
    /// The operator.
    pub op:    BinaryOperator,
    /// Right operand.
    pub right: Operand,
}

impl Expression {
    /// The numeral system shared by both operands.
    #[must_use]
    pub const fn system(&self) -> NumeralSystem {
        self.left.system
    }
}
