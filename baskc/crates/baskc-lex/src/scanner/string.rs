//! String literal lexing.
//!
//! This module handles lexing of double-quoted strings and their escapes.

use baskc_util::{DiagnosticCode, Span};

use super::Scanner;
use crate::error::ScanError;

impl<'a> Scanner<'a> {
    /// Lexes a string literal, starting on the opening quote.
    ///
    /// Leaves the cursor on the closing quote. The quotes are not part of
    /// the returned text, and escapes are decoded:
    ///
    /// | escape | result |
    /// |--------|--------|
    /// | `\n`   | line feed |
    /// | `\r`   | carriage return |
    /// | `\t`   | tab |
    /// | `\"`   | `"` |
    /// | `\\`   | `\` |
    ///
    /// A backslash before any other character is dropped and the character
    /// kept, with a warning. A raw line feed is kept as is.
    ///
    /// # Errors
    ///
    /// [`ScanError::UnterminatedString`] if the input ends before the
    /// closing quote.
    pub(super) fn lex_string(&mut self) -> Result<String, ScanError> {
        let mut content = String::new();

        loop {
            self.cursor.read_char();
            let c = match self.cursor.current_char() {
                None => return Err(self.unterminated_string()),
                Some('"') => break,
                Some('\\') => {
                    let escape_start = self.cursor.here();
                    self.cursor.read_char();
                    match self.cursor.current_char() {
                        None => return Err(self.unterminated_string()),
                        Some(escaped) => self.decode_escape(escaped, escape_start),
                    }
                },
                Some(c) => c,
            };
            content.push(c);
        }

        Ok(content)
    }

    fn decode_escape(&self, escaped: char, escape_start: Span) -> char {
        match escaped {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '"' => '"',
            '\\' => '\\',
            other => {
                self.unknown_escape(other, escape_start);
                other
            },
        }
    }

    fn unknown_escape(&self, escaped: char, escape_start: Span) {
        let span = Span::new(
            escape_start.start,
            self.cursor.byte_offset() + escaped.len_utf8(),
            escape_start.line,
            escape_start.column,
        );
        tracing::warn!(
            escape = %escaped,
            line = span.line,
            column = span.column,
            "unknown escape sequence, keeping the character"
        );
        if let Some(handler) = self.handler {
            handler
                .build_warning(span, format!("unknown escape sequence `\\{}`", escaped))
                .code(DiagnosticCode::W_UNKNOWN_ESCAPE)
                .note("the backslash is dropped and the character kept")
                .help("supported escapes are `\\n`, `\\r`, `\\t`, `\\\"` and `\\\\`")
                .emit(handler);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ScanError;
    use crate::token::{Token, TokenKind};
    use crate::Scanner;
    use baskc_util::{DiagnosticCode, Handler, Level, Span};

    fn lex_string(source: &str) -> Token {
        let token = Scanner::new(source).next_token().unwrap();
        assert_eq!(token.kind, TokenKind::String);
        token
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(lex_string("\"hello\"").text, "hello");
    }

    #[test]
    fn test_empty_string() {
        let token = lex_string("\"\"");
        assert_eq!(token.text, "");
        assert_eq!(token.span, Span::new(0, 2, 1, 1));
    }

    #[test]
    fn test_decoded_escapes() {
        assert_eq!(lex_string(r#""a\tb\n\"c\"""#).text, "a\tb\n\"c\"");
        assert_eq!(lex_string(r#""\r\\""#).text, "\r\\");
    }

    #[test]
    fn test_span_covers_quotes_and_escapes() {
        let source = r#""a\tb""#;
        let token = lex_string(source);
        assert_eq!(token.span.end - token.span.start, source.len());
        assert_eq!(token.span.source_text(source), Some(source));
    }

    #[test]
    fn test_string_keeps_separators() {
        assert_eq!(lex_string("\"A: B; C, D\"").text, "A: B; C, D");
    }

    #[test]
    fn test_raw_newline_is_kept() {
        let tokens = Scanner::new("\"a\nb\" 5").scan_all().unwrap();
        assert_eq!(tokens[0].text, "a\nb");
        assert_eq!(tokens[1].kind, TokenKind::Int);
        assert_eq!(tokens[1].span.line, 2);
    }

    #[test]
    fn test_unknown_escape_passes_through_with_warning() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("\"a\\qb\"").with_handler(&handler);
        let token = scanner.next_token().unwrap();
        assert_eq!(token.text, "aqb");

        let diagnostics = handler.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, Level::Warning);
        assert_eq!(diagnostics[0].code, Some(DiagnosticCode::W_UNKNOWN_ESCAPE));
        assert_eq!(diagnostics[0].span, Span::new(2, 4, 1, 3));
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_unknown_escape_without_handler() {
        assert_eq!(lex_string("\"\\x\"").text, "x");
    }

    #[test]
    fn test_unterminated_string() {
        let mut scanner = Scanner::new("\"abc");
        let err = scanner.next_token().unwrap_err();
        assert_eq!(
            err,
            ScanError::UnterminatedString {
                span: Span::new(0, 4, 1, 1)
            }
        );
        assert!(scanner.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_trailing_backslash_is_unterminated() {
        let mut scanner = Scanner::new("\"abc\\");
        assert!(scanner.next_token().is_err());
        assert!(scanner.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let mut scanner = Scanner::new("\"abc\\\"");
        assert!(matches!(
            scanner.next_token(),
            Err(ScanError::UnterminatedString { .. })
        ));
    }
}
