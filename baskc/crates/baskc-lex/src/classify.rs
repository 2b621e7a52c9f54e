//! Character classification for the scanner.
//!
//! Every predicate here is a pure function of one character. The scanner
//! only talks to [`classify`]; the individual predicates are public so the
//! identifier rule can be tested and reused on its own.
//!
//! # Example
//!
//! ```
//! use baskc_lex::classify::{classify, is_identifier_continue, CharClass};
//! use baskc_lex::TokenKind;
//!
//! assert_eq!(classify(Some('+')), CharClass::Single(TokenKind::Plus));
//! assert_eq!(classify(None), CharClass::End);
//! assert!(is_identifier_continue('A', '$'));
//! assert!(!is_identifier_continue('A', ':'));
//! assert!(!is_identifier_continue('^', '8'));
//! ```

use crate::token::TokenKind;

/// What the scanner should do with the current character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Past the end of input.
    End,
    /// Space, tab or carriage return.
    Whitespace,
    /// Line feed.
    Newline,
    /// `0`-`9`, starts a number.
    Digit,
    /// `"`, starts a string.
    Quote,
    /// `<`, may start `<=` or `<>`.
    Less,
    /// `>`, may start `>=`.
    Greater,
    /// A character that is a complete token by itself.
    Single(TokenKind),
    /// Anything else, starts an identifier.
    Other,
}

/// Classifies the current character, `None` being the end of input.
pub fn classify(c: Option<char>) -> CharClass {
    let Some(c) = c else {
        return CharClass::End;
    };
    match c {
        '=' => CharClass::Single(TokenKind::Assign),
        ',' => CharClass::Single(TokenKind::Comma),
        '+' => CharClass::Single(TokenKind::Plus),
        '-' => CharClass::Single(TokenKind::Minus),
        '/' => CharClass::Single(TokenKind::Slash),
        '%' => CharClass::Single(TokenKind::Mod),
        '*' => CharClass::Single(TokenKind::Asterisk),
        '(' => CharClass::Single(TokenKind::LBracket),
        ')' => CharClass::Single(TokenKind::RBracket),
        '<' => CharClass::Less,
        '>' => CharClass::Greater,
        '"' => CharClass::Quote,
        c if is_newline(c) => CharClass::Newline,
        c if is_whitespace(c) => CharClass::Whitespace,
        c if is_digit(c) => CharClass::Digit,
        _ => CharClass::Other,
    }
}

/// Space, tab and carriage return. A line feed is not whitespace.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

/// Line feed.
#[inline]
pub fn is_newline(c: char) -> bool {
    c == '\n'
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `{` or `}`.
#[inline]
pub fn is_brace(c: char) -> bool {
    matches!(c, '{' | '}')
}

/// Arithmetic operator characters that end an identifier.
#[inline]
pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '/' | '*')
}

/// Comparison characters that end an identifier.
#[inline]
pub fn is_comparison(c: char) -> bool {
    matches!(c, '=' | '!' | '<' | '>')
}

/// Separators that end an identifier.
#[inline]
pub fn is_compound(c: char) -> bool {
    matches!(c, ',' | ':' | '"' | ';')
}

/// `[` or `]`.
#[inline]
pub fn is_bracket(c: char) -> bool {
    matches!(c, '[' | ']')
}

/// `(` or `)`.
#[inline]
pub fn is_paren(c: char) -> bool {
    matches!(c, '(' | ')')
}

/// Whether `c` may extend a name that began with `first`.
///
/// Digits continue only names that start with a letter, so `X1` and `A2$`
/// are single names while `^8` and `:20` split before the number. `%` and
/// `^` are accepted, so `A%` is one name.
pub fn is_identifier_continue(first: char, c: char) -> bool {
    if is_digit(c) {
        return first.is_alphabetic();
    }
    !(is_whitespace(c)
        || is_newline(c)
        || is_brace(c)
        || is_operator(c)
        || is_comparison(c)
        || is_compound(c)
        || is_bracket(c)
        || is_paren(c))
}
