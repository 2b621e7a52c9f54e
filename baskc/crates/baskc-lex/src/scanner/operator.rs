//! Comparison operator lexing.
//!
//! `<` and `>` are the only characters that can start a two-character
//! token. One character of lookahead decides which form it is.

use super::Scanner;
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    /// Lexes `<`, `<=` or `<>`.
    pub(super) fn lex_less(&mut self) -> (TokenKind, String) {
        match self.cursor.peek_char() {
            Some('>') => self.lex_pair(TokenKind::NotEquals, "<>"),
            Some('=') => self.lex_pair(TokenKind::LessEqual, "<="),
            _ => (TokenKind::LessThan, "<".to_string()),
        }
    }

    /// Lexes `>` or `>=`.
    pub(super) fn lex_greater(&mut self) -> (TokenKind, String) {
        match self.cursor.peek_char() {
            Some('=') => self.lex_pair(TokenKind::GreaterEqual, ">="),
            _ => (TokenKind::GreaterThan, ">".to_string()),
        }
    }

    fn lex_pair(&mut self, kind: TokenKind, text: &str) -> (TokenKind, String) {
        self.cursor.read_char();
        (kind, text.to_string())
    }
}
