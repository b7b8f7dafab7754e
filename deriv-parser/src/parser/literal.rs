//! Validation of the two leaf grammars: numerals and identifiers.
//!
//! A numeral is a run of digits with at most one decimal point (`2`, `2.5`, `2.`, `.5`). An
//! identifier is made of letters, digits and underscores, does not start with a digit, and is
//! not the name of a unary function.

use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use super::token::op::UnaryOpKind;

/// Returns true if the name is reserved for a unary function.
pub fn is_reserved(name: &str) -> bool {
    UnaryOpKind::from_name(name).is_some()
}

/// Returns the value of the numeral if the tokens consist of exactly one number token whose value
/// is finite. A numeral too large for an `f64` has no value.
pub(crate) fn numeral_value(tokens: &[Token]) -> Option<f64> {
    match tokens {
        [token] if token.kind == TokenKind::Number => token
            .lexeme
            .parse()
            .ok()
            .filter(|value: &f64| value.is_finite()),
        _ => None,
    }
}

/// Returns the name of the identifier if the tokens consist of exactly one non-reserved name.
pub(crate) fn identifier_name<'source>(tokens: &[Token<'source>]) -> Option<&'source str> {
    match tokens {
        [token] if token.kind == TokenKind::Name && !is_reserved(token.lexeme) => Some(token.lexeme),
        _ => None,
    }
}

/// Parses the whole string as a numeral, returning [`None`] if it is not one. Surrounding
/// whitespace is not allowed.
pub fn parse_numeral(source: &str) -> Option<f64> {
    numeral_value(&tokenize_complete(source))
}

/// Returns true if the whole string is a numeral.
pub fn is_numeral(source: &str) -> bool {
    parse_numeral(source).is_some()
}

/// Returns true if the whole string is a valid variable name.
pub fn is_identifier(source: &str) -> bool {
    identifier_name(&tokenize_complete(source)).is_some()
}
