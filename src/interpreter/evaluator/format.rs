use crate::{
    ast::NumeralSystem,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::roman::decimal_to_roman,
};

impl Context {
    /// Writes a result in the given numeral system.
    ///
    /// Roman results must be positive and inside the context's Roman window.
    /// Arabic results are checked only if the context bounds them.
    ///
    /// # Errors
    /// - `InvalidResult` for a Roman result below one.
    /// - `OutOfRange` for a result outside its window.
    ///
    /// # Example
    /// ```
    /// use romcalc::{
    ///     ast::NumeralSystem,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let context = Context::new();
    ///
    /// assert_eq!(context.format_result(4, NumeralSystem::Roman).unwrap(), "IV");
    /// assert_eq!(context.format_result(-4, NumeralSystem::Arabic).unwrap(), "-4");
    /// assert_eq!(context.format_result(0, NumeralSystem::Roman),
    ///            Err(RuntimeError::InvalidResult { value: 0 }));
    /// ```
    pub fn format_result(&self, value: i64, system: NumeralSystem) -> EvalResult<String> {
        match system {
            NumeralSystem::Roman => {
                if value < 1 {
                    return Err(RuntimeError::InvalidResult { value });
                }
                decimal_to_roman(self.roman.check(value)?)
            },
            NumeralSystem::Arabic => {
                if let Some(bounds) = self.arabic {
                    bounds.check(value)?;
                }
                Ok(value.to_string())
            },
        }
    }
}
