use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates an integer arithmetic operation.
    ///
    /// Division truncates toward zero. Every operation is checked, so
    /// overflow is reported instead of wrapping.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<i64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use romcalc::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Div, 7, 2), Ok(3));
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Div, -7, 2), Ok(-3));
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Div, 1, 0),
    ///            Err(RuntimeError::DivisionByZero));
    /// ```
    pub const fn eval_scalar_op(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let value = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left.checked_div(right)
            },
        };

        match value {
            Some(value) => Ok(value),
            None => Err(RuntimeError::Overflow),
        }
    }
}
