use std::fs;

use romcalc::{
    ast::NumeralSystem,
    calc,
    error::{ParseError, RuntimeError},
    get_result,
    interpreter::{evaluator::core::Context, lexer::is_roman, parser::parse_expression},
    util::roman::RomanRule,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for (dir, context) in [("tests/cases/default", Context::new()),
                           ("tests/cases/strict", Context::strict())]
    {
        for entry in WalkDir::new(dir).into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "calc")
                                      })
        {
            let path = entry.path();
            let content = fs::read_to_string(path).unwrap_or_else(|e| {
                                                      panic!("Failed to read {path:?}: {e}")
                                                  });

            for (input, expected) in extract_cases(&content) {
                count += 1;
                let result = get_result(input, &context);
                match expected {
                    Some(expected) => match result {
                        Ok(output) => assert_eq!(output, expected,
                                                 "case `{input}` in {path:?}"),
                        Err(e) => panic!("case `{input}` in {path:?} failed: {e}"),
                    },
                    None => assert!(result.is_err(),
                                    "case `{input}` in {path:?} succeeded but was expected to fail"),
                }
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Reads `input => output` lines; an output of `!` marks an expected error.
fn extract_cases(content: &str) -> Vec<(&str, Option<&str>)> {
    content.lines()
           .map(str::trim_end)
           .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .filter_map(|line| line.rsplit_once(" => "))
           .map(|(input, output)| (input, (output.trim() != "!").then_some(output.trim())))
           .collect()
}

fn parse_error(src: &str) -> ParseError {
    match parse_expression(src) {
        Ok(expr) => panic!("`{src}` parsed to {expr:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn runtime_error(src: &str, context: &Context) -> RuntimeError {
    let expr = parse_expression(src).unwrap_or_else(|e| panic!("`{src}` failed to parse: {e}"));
    match context.eval(&expr) {
        Ok(value) => panic!("`{src}` evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn canonical_examples() {
    let context = Context::new();
    assert_eq!(calc("3 + 4", &context), "7");
    assert_eq!(calc("VII - III", &context), "IV");
    assert_eq!(calc("7 / 2", &context), "3");
    assert_eq!(calc("X * III", &context), "XXX");
    assert_eq!(calc("X + X", &context), "XX");
}

#[test]
fn wrong_token_count_is_invalid_format() {
    assert_eq!(parse_error(""), ParseError::InvalidFormat { found: 0 });
    assert_eq!(parse_error("3+4"), ParseError::InvalidFormat { found: 1 });
    assert_eq!(parse_error("3 + 4 + 5"), ParseError::InvalidFormat { found: 5 });
}

#[test]
fn mixed_numeral_systems_are_rejected() {
    for src in ["V + 3", "3 + V", "X * 10", "1 / I", "IIII - 3"] {
        assert!(matches!(parse_error(src), ParseError::MixedNumeralSystems { .. }),
                "`{src}` should mix numeral systems");
    }
}

#[test]
fn non_numbers_are_invalid_number_format() {
    assert_eq!(parse_error("x + 3"),
               ParseError::InvalidNumberFormat { token: "x".to_string() });
    assert_eq!(parse_error("3 + -4"),
               ParseError::InvalidNumberFormat { token: "-4".to_string() });
    assert_eq!(parse_error("iv + ii"),
               ParseError::InvalidNumberFormat { token: "iv".to_string() });
}

#[test]
fn huge_literal_is_too_large() {
    assert_eq!(parse_error("99999999999999999999 + 1"),
               ParseError::LiteralTooLarge { token: "99999999999999999999".to_string() });
}

#[test]
fn unknown_operator_is_rejected() {
    assert_eq!(parse_error("3 % 4"), ParseError::InvalidOperator { token: "%".to_string() });
    assert_eq!(parse_error("3 ** 4"), ParseError::InvalidOperator { token: "**".to_string() });
    assert_eq!(parse_error("I x I"), ParseError::InvalidOperator { token: "x".to_string() });
}

#[test]
fn malformed_roman_operands_are_rejected() {
    assert_eq!(parse_error("IIII + I"),
               ParseError::InvalidRomanNumeral { numeral: "IIII".to_string(),
                                                 rule:    RomanRule::TooManyRepeats { symbol: 'I',
                                                                                      count:  4, }, });
    assert_eq!(parse_error("I + VV"),
               ParseError::InvalidRomanNumeral { numeral: "VV".to_string(),
                                                 rule:    RomanRule::TooManyRepeats { symbol: 'V',
                                                                                      count:  2, }, });
    assert_eq!(parse_error("IL + I"),
               ParseError::InvalidRomanNumeral { numeral: "IL".to_string(),
                                                 rule:    RomanRule::InvalidSubtraction { smaller: 'I',
                                                                                          larger:  'L', }, });
}

#[test]
fn division_by_zero_is_reported_before_range() {
    assert_eq!(runtime_error("5 / 0", &Context::new()), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("5 / 0", &Context::strict()), RuntimeError::DivisionByZero);
    assert_eq!(calc("5 / 0", &Context::new()), "Division by zero.");
}

#[test]
fn operands_outside_window_are_out_of_range() {
    for context in [Context::new(), Context::strict()] {
        assert_eq!(runtime_error("11 + 1", &context),
                   RuntimeError::OutOfRange { value: 11,
                                              min:   1,
                                              max:   10, });
        assert_eq!(runtime_error("0 * 3", &context),
                   RuntimeError::OutOfRange { value: 0,
                                              min:   1,
                                              max:   10, });
        assert_eq!(runtime_error("XI - I", &context),
                   RuntimeError::OutOfRange { value: 11,
                                              min:   1,
                                              max:   10, });
    }
}

#[test]
fn strict_policy_bounds_results() {
    let strict = Context::strict();
    assert_eq!(runtime_error("X + X", &strict),
               RuntimeError::OutOfRange { value: 20,
                                          min:   1,
                                          max:   10, });
    assert_eq!(runtime_error("X * III", &strict),
               RuntimeError::OutOfRange { value: 30,
                                          min:   1,
                                          max:   10, });
    assert_eq!(runtime_error("3 - 7", &strict),
               RuntimeError::OutOfRange { value: -4,
                                          min:   1,
                                          max:   10, });
    assert_eq!(calc("3 - 7", &Context::new()), "-4");
}

#[test]
fn non_positive_roman_results_are_invalid() {
    for context in [Context::new(), Context::strict()] {
        assert_eq!(runtime_error("I - I", &context), RuntimeError::InvalidResult { value: 0 });
        assert_eq!(runtime_error("II - V", &context), RuntimeError::InvalidResult { value: -3 });
        assert_eq!(runtime_error("I / X", &context), RuntimeError::InvalidResult { value: 0 });
    }
}

#[test]
fn calc_renders_errors_as_messages() {
    let context = Context::new();
    assert_eq!(calc("V + 3", &context),
               "Mixed numeral systems: cannot combine Roman and Arabic operands.");
    assert_eq!(calc("1 2", &context),
               "Invalid input format: expected `<operand> <operator> <operand>`, found 2 token(s).");
    assert_eq!(calc("VV + I", &context),
               "Invalid Roman numeral 'VV': 'V' appears 2 times in a row, at most 1 allowed.");
    assert_eq!(calc("I - I", &context),
               "Invalid result: 0 cannot be written as a Roman numeral.");
}

#[test]
fn evaluation_is_idempotent() {
    let context = Context::new();
    for src in ["IX / II", "V + 3", "10 * 10", "I - I"] {
        assert_eq!(calc(src, &context), calc(src, &context));
    }
}

#[test]
fn words_are_classified_by_character_set() {
    assert!(is_roman("IIII"));
    assert!(is_roman("MMMCMXCIX"));
    assert!(!is_roman("12"));
    assert!(!is_roman("7X"));
    assert!(!is_roman("iv"));
    assert!(!is_roman("+"));
    assert!(!is_roman(""));

    assert_eq!(NumeralSystem::of("IIII"), Some(NumeralSystem::Roman));
    assert_eq!(NumeralSystem::of("12"), Some(NumeralSystem::Arabic));
    assert_eq!(NumeralSystem::of("99999999999999999999"), Some(NumeralSystem::Arabic));
    assert_eq!(NumeralSystem::of("7X"), None);
    assert_eq!(NumeralSystem::of("iv"), None);
    assert_eq!(NumeralSystem::of("-3"), None);
    assert_eq!(NumeralSystem::of("/"), None);
}
