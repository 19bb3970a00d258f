/// Roman numeral grammar and conversion.
///
/// This module validates Roman numerals against the standard grammar and
/// converts between Roman numerals and integers. All lookup tables are
/// immutable constants ordered from the largest value down.
///
/// Conversions return a `Result` or an `Option`; nothing here panics on bad
/// input.
pub mod roman;
