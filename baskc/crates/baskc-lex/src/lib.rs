//! baskc-lex - Scanner for line-numbered BASIC
//!
//! This crate turns BASIC source text into a flat stream of classified
//! tokens for a parser to consume. Tokens are produced one at a time, on
//! demand, by [`Scanner::next_token`].
//!
//! # Example Usage
//!
//! ```
//! use baskc_lex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("10 LET X = 5\n20 PRINT X");
//!
//! let line = scanner.next_token().unwrap();
//! assert_eq!(line.kind, TokenKind::LineNo);
//! assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Let);
//!
//! // Or take everything at once
//! let tokens = baskc_lex::tokenize("10 END").unwrap();
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and the token value
//! - [`keywords`] - Keyword lookup and the default keyword table
//! - [`scanner`] - The scanner
//! - [`cursor`] - Character cursor over the input
//! - [`classify`] - Character classes
//! - [`error`] - Scanner errors
//!
//! # Lexical Rules
//!
//! - Space, tab and carriage return separate tokens. A line feed is a
//!   `NEWLINE` token.
//! - An integer right after a newline (or at the very start of the input)
//!   is a `LINENO`; any other integer is an `INT`.
//! - `<>`, `<=` and `>=` are single tokens.
//! - Strings are double-quoted. `\n`, `\r`, `\t`, `\"` and `\\` are decoded.
//! - Everything else is a name, and names are resolved through a
//!   [`KeywordLookup`]. Unknown names are `IDENT`.
//! - There are no comments beyond what the parser makes of `REM`.
//!
//! # Diagnostics
//!
//! Attach a [`baskc_util::Handler`] with [`Scanner::with_handler`] to collect
//! a warning for each unknown escape sequence and an error for an
//! unterminated string.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use error::ScanError;
pub use keywords::{default_table, KeywordLookup, KeywordTable};
pub use scanner::Scanner;
pub use token::{Token, TokenKind, KEYWORDS, NEWLINE_TEXT};

/// Scans `source` with the default keyword table.
///
/// The returned tokens end with [`TokenKind::Eof`].
///
/// # Errors
///
/// [`ScanError::UnterminatedString`] if a string literal is not closed.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ScanError> {
    Scanner::new(source).scan_all()
}
