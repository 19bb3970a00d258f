use crate::{
    ast::{BinaryOperator, Expression},
    error::RuntimeError,
    util::roman::{MAX_ROMAN, MIN_ROMAN},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Smallest value an operand may take, in either numeral system.
pub const OPERAND_MIN: i64 = 1;
/// Largest value an operand may take, in either numeral system.
pub const OPERAND_MAX: i64 = 10;

/// An inclusive window of permitted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest permitted value.
    pub min: i64,
    /// Largest permitted value.
    pub max: i64,
}

impl Bounds {
    /// The window operands must fall in.
    pub const OPERAND: Self = Self { min: OPERAND_MIN,
                                     max: OPERAND_MAX, };
    /// Every value a Roman numeral can express.
    pub const ROMAN: Self = Self { min: MIN_ROMAN,
                                   max: MAX_ROMAN, };

    /// Returns `value` unchanged if it lies inside the window.
    ///
    /// # Errors
    /// Returns `OutOfRange` naming the window otherwise.
    ///
    /// # Example
    /// ```
    /// use romcalc::interpreter::evaluator::core::Bounds;
    ///
    /// assert_eq!(Bounds::OPERAND.check(10), Ok(10));
    /// assert!(Bounds::OPERAND.check(0).is_err());
    /// ```
    pub const fn check(self, value: i64) -> EvalResult<i64> {
        if value < self.min || value > self.max {
            return Err(RuntimeError::OutOfRange { value,
                                                  min: self.min,
                                                  max: self.max });
        }
        Ok(value)
    }
}

/// Stores the range policy used during evaluation.
///
/// Operands are always limited to [`Bounds::OPERAND`]. Results are limited
/// per numeral system: the default policy lets Roman results use every
/// value a Roman numeral can express and leaves Arabic results unbounded,
/// while the strict policy holds results of both systems to the operand
/// window.
///
/// ## Usage
///
/// A `Context` is created once and reused for every expression; evaluation
/// never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Window every operand must fall in.
    pub operands: Bounds,
    /// Window a Roman result must fall in.
    pub roman:    Bounds,
    /// Window an Arabic result must fall in, if any.
    pub arabic:   Option<Bounds>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates the default context: operands in `1..=10`, Roman results in
    /// `1..=3999`, Arabic results unbounded.
    #[must_use]
    pub const fn new() -> Self {
        Self { operands: Bounds::OPERAND,
               roman:    Bounds::ROMAN,
               arabic:   None, }
    }

    /// Creates the strict context: operands and results of both systems in
    /// `1..=10`.
    #[must_use]
    pub const fn strict() -> Self {
        Self { operands: Bounds::OPERAND,
               roman:    Bounds::OPERAND,
               arabic:   Some(Bounds::OPERAND), }
    }

    /// Evaluates an expression and returns the formatted result.
    ///
    /// This is the main entry point for evaluation. Division by zero is
    /// reported before the operand window is checked, so `5 / 0` yields
    /// `DivisionByZero` rather than `OutOfRange`. Then both operands are
    /// range checked, the operator is applied, and the result is written in
    /// the operands' numeral system.
    ///
    /// # Errors
    /// - `DivisionByZero` if the right operand of `/` is zero.
    /// - `OutOfRange` if an operand or the result leaves its window.
    /// - `InvalidResult` if a Roman result is zero or negative.
    ///
    /// # Example
    /// ```
    /// use romcalc::interpreter::{evaluator::core::Context, parser::parse_expression};
    ///
    /// let expr = parse_expression("X * III").unwrap();
    ///
    /// assert_eq!(Context::new().eval(&expr).unwrap(), "XXX");
    /// assert!(Context::strict().eval(&expr).is_err());
    /// ```
    pub fn eval(&self, expr: &Expression) -> EvalResult<String> {
        let Expression { left, op, right } = *expr;

        if op == BinaryOperator::Div && right.value == 0 {
            return Err(RuntimeError::DivisionByZero);
        }

        let left = self.operands.check(left.value)?;
        let right = self.operands.check(right.value)?;

        let value = Self::eval_scalar_op(op, left, right)?;

        self.format_result(value, expr.system())
    }
}
