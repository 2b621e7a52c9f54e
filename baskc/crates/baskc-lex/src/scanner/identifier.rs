//! Identifier and keyword lexing.
//!
//! Names are captured first and classified afterwards through the
//! scanner's [`KeywordLookup`](crate::KeywordLookup).

use super::Scanner;
use crate::classify::is_identifier_continue;
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    /// Lexes a name, starting on its first character.
    ///
    /// The first character is always taken; dispatch only sends characters
    /// here that no other rule claims. Leaves the cursor on the last
    /// character of the name.
    pub(super) fn lex_identifier(&mut self) -> (TokenKind, String) {
        let mut word = self.current_text();
        if let Some(first) = self.cursor.current_char() {
            self.cursor.eat_while(&mut word, |c| is_identifier_continue(first, c));
        }
        let kind = self.keywords.lookup_identifier(&word);
        (kind, word)
    }
}
