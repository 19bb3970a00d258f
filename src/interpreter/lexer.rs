use logos::Logos;

use crate::ast::NumeralSystem;

/// Errors produced while lexing a single word of input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// The word contains a character no token starts with.
    #[default]
    UnexpectedCharacter,
    /// A run of decimal digits does not fit into an `i64`.
    LiteralTooLarge,
}

/// Represents a lexical token in an expression.
///
/// The lexer runs over one whitespace-separated word at a time; a word is
/// meaningful only if it lexes to exactly one token.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexError)]
pub enum Token {
    /// Arabic literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Arabic(i64),
    /// Roman literal tokens, such as `XIV`. Grammar is checked later.
    #[regex(r"[IVXLCDM]+", |lex| lex.slice().to_string())]
    Roman(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

/// Parses an integer literal from the current token slice.
///
/// The slice only ever holds ASCII digits, so the only way to fail is
/// overflow.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}

/// Lexes one word into a single token.
///
/// # Returns
/// - `Some(Ok(token))` if the whole word is exactly one token.
/// - `Some(Err(error))` if the first token is malformed.
/// - `None` if the word is empty or holds more than one token.
///
/// # Example
/// ```
/// use romcalc::interpreter::lexer::{LexError, Token, classify};
///
/// assert_eq!(classify("XIV"), Some(Ok(Token::Roman("XIV".to_string()))));
/// assert_eq!(classify("7"), Some(Ok(Token::Arabic(7))));
/// assert_eq!(classify("7X"), None);
/// assert_eq!(classify("x"), Some(Err(LexError::UnexpectedCharacter)));
/// ```
#[must_use]
pub fn classify(word: &str) -> Option<Result<Token, LexError>> {
    let mut lexer = Token::lexer(word);
    let token = lexer.next()?;

    if lexer.next().is_some() {
        return None;
    }

    Some(token)
}

impl NumeralSystem {
    /// Determines which numeral system a word is written in, if any.
    ///
    /// Only the character set is inspected: `IIII` is Roman even though it
    /// is not a valid numeral.
    ///
    /// # Example
    /// ```
    /// use romcalc::ast::NumeralSystem;
    ///
    /// assert_eq!(NumeralSystem::of("IIII"), Some(NumeralSystem::Roman));
    /// assert_eq!(NumeralSystem::of("12"), Some(NumeralSystem::Arabic));
    /// assert_eq!(NumeralSystem::of("-3"), None);
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Option<Self> {
        match classify(word) {
            Some(Ok(Token::Roman(_))) => Some(Self::Roman),
            Some(Ok(Token::Arabic(_)) | Err(LexError::LiteralTooLarge)) => Some(Self::Arabic),
            _ => None,
        }
    }
}

/// Returns `true` if the word consists only of Roman digits.
///
/// Grammar is not checked, only the character set.
///
/// # Example
/// ```
/// use romcalc::interpreter::lexer::is_roman;
///
/// assert!(is_roman("IIII"));
/// assert!(!is_roman("12"));
/// assert!(!is_roman("7X"));
/// assert!(!is_roman("iv"));
/// ```
#[must_use]
pub fn is_roman(word: &str) -> bool {
    NumeralSystem::of(word) == Some(NumeralSystem::Roman)
}
