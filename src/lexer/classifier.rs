use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{lookup_keyword, lookup_symbol, TokenKind};

lazy_static! {
    static ref STRING_REGEX: Regex = Regex::new(r#"^".*"$"#).unwrap();
    static ref IDENTIFIER_REGEX: Regex = Regex::new("^[a-zA-Z][a-zA-Z0-9_]*$").unwrap();
    static ref INT_REGEX: Regex = Regex::new("^[0-9]+$").unwrap();
    static ref FLOAT_REGEX: Regex = Regex::new(r"^[0-9]+\.[0-9]*$").unwrap();
}

/// Assigns a kind to one lexeme candidate. The first matching rule wins:
/// symbol, string literal, keyword or identifier, integer, real number.
/// Anything else is `Illegal`.
pub fn classify(lexeme: &str) -> TokenKind {
    if let Some(kind) = lookup_symbol(lexeme) {
        return kind;
    }

    if STRING_REGEX.is_match(lexeme) {
        return TokenKind::StringLiteral;
    }

    if IDENTIFIER_REGEX.is_match(lexeme) {
        return lookup_keyword(lexeme).unwrap_or(TokenKind::Identifier);
    }

    if INT_REGEX.is_match(lexeme) {
        return TokenKind::IntLiteral;
    }

    if FLOAT_REGEX.is_match(lexeme) {
        return TokenKind::FloatLiteral;
    }

    TokenKind::Illegal
}
