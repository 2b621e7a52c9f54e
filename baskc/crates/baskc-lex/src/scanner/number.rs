//! Number literal lexing.
//!
//! Only decimal integers exist in the dialect. Whether an integer is a line
//! number is decided later, when the token is emitted.

use super::Scanner;
use crate::classify::is_digit;

impl<'a> Scanner<'a> {
    /// Lexes a maximal run of decimal digits, starting on the first one.
    ///
    /// Leaves the cursor on the last digit and returns the digits verbatim,
    /// leading zeros included.
    pub(super) fn lex_number(&mut self) -> String {
        let mut digits = self.current_text();
        self.cursor.eat_while(&mut digits, is_digit);
        digits
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Scanner;

    fn lex_after_word(source: &str) -> (TokenKind, String) {
        let mut scanner = Scanner::new(source);
        scanner.next_token().unwrap();
        let token = scanner.next_token().unwrap();
        (token.kind, token.text)
    }

    #[test]
    fn test_integer() {
        assert_eq!(lex_after_word("X 42"), (TokenKind::Int, "42".to_string()));
    }

    #[test]
    fn test_leading_zeros_are_kept() {
        assert_eq!(lex_after_word("X 007"), (TokenKind::Int, "007".to_string()));
    }

    #[test]
    fn test_number_stops_at_non_digit() {
        let tokens = Scanner::new("X 12AB").scan_all().unwrap();
        assert_eq!(tokens[1].text, "12");
        assert_eq!(tokens[2].kind, TokenKind::Ident);
        assert_eq!(tokens[2].text, "AB");
    }

    #[test]
    fn test_no_decimal_point() {
        let tokens = Scanner::new("X 3.14").scan_all().unwrap();
        assert_eq!(tokens[1].text, "3");
        assert_eq!(tokens[2].kind, TokenKind::Ident);
        assert_eq!(tokens[2].text, ".");
        assert_eq!(tokens[3].kind, TokenKind::Int);
        assert_eq!(tokens[3].text, "14");
    }

    #[test]
    fn test_huge_number_is_verbatim() {
        let digits = "123456789012345678901234567890";
        let (kind, text) = lex_after_word(&format!("X {digits}"));
        assert_eq!(kind, TokenKind::Int);
        assert_eq!(text, digits);
    }
}
