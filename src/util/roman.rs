use crate::error::RuntimeError;

/// Smallest value a Roman numeral can express.
pub const MIN_ROMAN: i64 = 1;
/// Largest value a Roman numeral can express in standard notation.
pub const MAX_ROMAN: i64 = 3999;

/// Value/symbol pairs used by the greedy encoder, in descending order.
pub const NUMERALS: [(i64, &str); 13] = [(1000, "M"),
                                         (900, "CM"),
                                         (500, "D"),
                                         (400, "CD"),
                                         (100, "C"),
                                         (90, "XC"),
                                         (50, "L"),
                                         (40, "XL"),
                                         (10, "X"),
                                         (9, "IX"),
                                         (5, "V"),
                                         (4, "IV"),
                                         (1, "I")];

/// The seven Roman digits with their values and the maximum number of times
/// each may appear consecutively.
const DIGITS: [(char, i64, usize); 7] = [('M', 1000, 3),
                                         ('D', 500, 1),
                                         ('C', 100, 3),
                                         ('L', 50, 1),
                                         ('X', 10, 3),
                                         ('V', 5, 1),
                                         ('I', 1, 3)];

/// The only pairs in which a smaller digit may precede a larger one.
const SUBTRACTIVE_PAIRS: [(char, char); 6] =
    [('I', 'V'), ('I', 'X'), ('X', 'L'), ('X', 'C'), ('C', 'D'), ('C', 'M')];

/// A rule of Roman numeral grammar that a string failed to satisfy.
///
/// Rules are checked in the order they are declared here; validation stops
/// at the first broken rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomanRule {
    /// The numeral has no digits.
    Empty,
    /// A character outside `I V X L C D M` was found.
    InvalidSymbol(char),
    /// A digit was repeated more often than allowed.
    TooManyRepeats {
        /// The repeated digit.
        symbol: char,
        /// How many times it appeared in a row.
        count:  usize,
    },
    /// A smaller digit precedes a larger one outside the canonical pairs.
    InvalidSubtraction {
        /// The digit being subtracted.
        smaller: char,
        /// The digit it was subtracted from.
        larger:  char,
    },
    /// The digits are individually legal but do not spell the standard
    /// form of any number, e.g. `IIV` or `IXI`.
    NonCanonical,
}

impl std::fmt::Display for RomanRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "numeral is empty"),
            Self::InvalidSymbol(c) => write!(f, "'{c}' is not a Roman digit"),
            Self::TooManyRepeats { symbol, count } => {
                let max = max_repeats(*symbol).unwrap_or(0);
                write!(f, "'{symbol}' appears {count} times in a row, at most {max} allowed")
            },
            Self::InvalidSubtraction { smaller, larger } => {
                write!(f, "'{smaller}' cannot be subtracted from '{larger}'")
            },
            Self::NonCanonical => write!(f, "digits are not in standard order"),
        }
    }
}

/// Returns the value of a single Roman digit.
///
/// # Example
/// ```
/// use romcalc::util::roman::symbol_value;
///
/// assert_eq!(symbol_value('X'), Some(10));
/// assert_eq!(symbol_value('x'), None);
/// ```
#[must_use]
pub fn symbol_value(symbol: char) -> Option<i64> {
    DIGITS.iter().find(|(c, ..)| *c == symbol).map(|&(_, value, _)| value)
}

fn max_repeats(symbol: char) -> Option<usize> {
    DIGITS.iter().find(|(c, ..)| *c == symbol).map(|&(.., max)| max)
}

/// Checks a string against the grammar of standard Roman numerals.
///
/// The rules are applied in order and the first violation is returned:
/// 1. the numeral is not empty;
/// 2. every character is one of `I V X L C D M`;
/// 3. `I`, `X`, `C` and `M` repeat at most three times in a row, while `V`,
///    `L` and `D` never repeat;
/// 4. a smaller digit only precedes a larger one in `IV`, `IX`, `XL`, `XC`,
///    `CD` or `CM`;
/// 5. the numeral is the standard spelling of its own value.
///
/// # Errors
/// Returns the first [`RomanRule`] that the string breaks.
///
/// # Example
/// ```
/// use romcalc::util::roman::{RomanRule, validate};
///
/// assert!(validate("XIV").is_ok());
/// assert_eq!(validate("VV"),
///            Err(RomanRule::TooManyRepeats { symbol: 'V',
///                                            count:  2, }));
/// assert_eq!(validate("IL"),
///            Err(RomanRule::InvalidSubtraction { smaller: 'I',
///                                                larger:  'L', }));
/// ```
pub fn validate(numeral: &str) -> Result<(), RomanRule> {
    if numeral.is_empty() {
        return Err(RomanRule::Empty);
    }

    let mut values = Vec::with_capacity(numeral.len());
    for c in numeral.chars() {
        values.push(symbol_value(c).ok_or(RomanRule::InvalidSymbol(c))?);
    }

    let symbols: Vec<char> = numeral.chars().collect();

    let mut run = 1;
    for window in symbols.windows(2) {
        run = if window[0] == window[1] { run + 1 } else { 1 };
        let max = max_repeats(window[1]).unwrap_or(0);
        if run > max {
            return Err(RomanRule::TooManyRepeats { symbol: window[1],
                                                   count:  run, });
        }
    }

    for (pair, value) in symbols.windows(2).zip(values.windows(2)) {
        if value[0] < value[1] && !SUBTRACTIVE_PAIRS.contains(&(pair[0], pair[1])) {
            return Err(RomanRule::InvalidSubtraction { smaller: pair[0],
                                                       larger:  pair[1], });
        }
    }

    let canonical = roman_to_decimal(numeral).and_then(|value| decimal_to_roman(value).ok());
    if canonical.as_deref() != Some(numeral) {
        return Err(RomanRule::NonCanonical);
    }

    Ok(())
}

/// Returns `true` if the string is a standard Roman numeral.
///
/// This is [`validate`] reduced to a predicate.
#[must_use]
pub fn is_valid(numeral: &str) -> bool {
    validate(numeral).is_ok()
}

/// Decodes a Roman numeral into its integer value.
///
/// The string is scanned from right to left. A digit smaller than the digit
/// seen just before it (to its right) is subtracted, every other digit is
/// added. The grammar is not checked, so `IIII` decodes to `4`; call
/// [`validate`] first when the input must be standard.
///
/// # Returns
/// - `Some(value)` for any non-empty string of Roman digits.
/// - `None` if the string is empty or contains a non-Roman character.
///
/// # Example
/// ```
/// use romcalc::util::roman::roman_to_decimal;
///
/// assert_eq!(roman_to_decimal("MCMXCIV"), Some(1994));
/// assert_eq!(roman_to_decimal("IX"), Some(9));
/// assert_eq!(roman_to_decimal("X2"), None);
/// ```
#[must_use]
pub fn roman_to_decimal(numeral: &str) -> Option<i64> {
    if numeral.is_empty() {
        return None;
    }

    let mut total = 0;
    let mut previous = 0;

    for c in numeral.chars().rev() {
        let value = symbol_value(c)?;
        if value < previous {
            total -= value;
        } else {
            total += value;
        }
        previous = value;
    }

    Some(total)
}

/// Encodes an integer as a standard Roman numeral.
///
/// The encoder is greedy: it walks [`NUMERALS`] from the largest value down
/// and emits each symbol for as long as the remainder allows.
///
/// # Errors
/// Returns [`RuntimeError::OutOfRange`] if `value` is outside
/// `MIN_ROMAN..=MAX_ROMAN`.
///
/// # Example
/// ```
/// use romcalc::{error::RuntimeError, util::roman::decimal_to_roman};
///
/// assert_eq!(decimal_to_roman(2024).unwrap(), "MMXXIV");
///
/// let err = decimal_to_roman(4000).unwrap_err();
/// assert!(matches!(err, RuntimeError::OutOfRange { value: 4000, .. }));
/// ```
pub fn decimal_to_roman(value: i64) -> Result<String, RuntimeError> {
    if !(MIN_ROMAN..=MAX_ROMAN).contains(&value) {
        return Err(RuntimeError::OutOfRange { value,
                                              min: MIN_ROMAN,
                                              max: MAX_ROMAN });
    }

    let mut remainder = value;
    let mut numeral = String::new();

    for &(weight, symbol) in &NUMERALS {
        while remainder >= weight {
            numeral.push_str(symbol);
            remainder -= weight;
        }
    }

    Ok(numeral)
}
