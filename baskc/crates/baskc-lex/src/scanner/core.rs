//! Core scanner implementation.
//!
//! This module contains the Scanner struct, the dispatch on the current
//! character, and the bookkeeping every token goes through on its way out.

use std::iter::FusedIterator;

use baskc_util::{DiagnosticCode, Handler, Span};

use crate::classify::{classify, is_whitespace, CharClass};
use crate::cursor::Cursor;
use crate::error::ScanError;
use crate::keywords::{default_table, KeywordLookup};
use crate::token::{Token, TokenKind, NEWLINE_TEXT};

/// Scanner for line-numbered BASIC source.
///
/// Tokens are produced one at a time by [`next_token`](Self::next_token).
/// An integer that directly follows a newline is reported as
/// [`TokenKind::LineNo`]; this holds for the first line too.
///
/// # Example
///
/// ```
/// use baskc_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("10 PRINT 5");
/// let first = scanner.next_token().unwrap();
/// assert_eq!(first.kind, TokenKind::LineNo);
/// assert_eq!(first.text, "10");
/// ```
pub struct Scanner<'a> {
    /// Character cursor over the input.
    pub(super) cursor: Cursor,

    /// Resolves captured words to keywords.
    pub(super) keywords: &'a dyn KeywordLookup,

    /// Receives diagnostics, if attached.
    pub(super) handler: Option<&'a Handler>,

    /// Kind of the last token produced.
    previous_kind: Option<TokenKind>,

    /// Location of the first character of the current token.
    token_start: Span,

    /// Set once the iterator has yielded EOF or an error.
    finished: bool,
}

impl Scanner<'static> {
    /// Creates a scanner using the default keyword table.
    pub fn new(source: &str) -> Self {
        Scanner::with_keywords(source, default_table())
    }
}

impl<'a> Scanner<'a> {
    /// Creates a scanner that resolves words through `keywords`.
    pub fn with_keywords(source: &str, keywords: &'a dyn KeywordLookup) -> Self {
        Self {
            cursor: Cursor::new(source),
            keywords,
            handler: None,
            previous_kind: None,
            token_start: Span::point(0, 1, 1),
            finished: false,
        }
    }

    /// Attaches a handler that collects warnings and errors.
    pub fn with_handler<'b>(self, handler: &'b Handler) -> Scanner<'b>
    where
        'a: 'b,
    {
        Scanner {
            cursor: self.cursor,
            keywords: self.keywords,
            handler: Some(handler),
            previous_kind: self.previous_kind,
            token_start: self.token_start,
            finished: self.finished,
        }
    }

    /// Returns the next token.
    ///
    /// Once the input is exhausted every call returns [`TokenKind::Eof`].
    /// The only error is an unterminated string; the call after it returns
    /// EOF.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        if self.cursor.position() == 0 {
            // The leading newline only primes the line-number rule.
            self.scan_token()?;
        }
        self.scan_token()
    }

    /// Scans the remaining input, the final EOF included.
    pub fn scan_all(&mut self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Kind of the last token produced, `None` before the first.
    pub fn previous_kind(&self) -> Option<TokenKind> {
        self.previous_kind
    }

    /// Line of the next character to scan (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Column of the next character to scan (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    fn scan_token(&mut self) -> Result<Token, ScanError> {
        self.skip_whitespace();
        self.token_start = self.cursor.here();

        let (kind, text) = match classify(self.cursor.current_char()) {
            CharClass::End => return Ok(self.emit(TokenKind::Eof, String::new())),
            CharClass::Newline => (TokenKind::Newline, NEWLINE_TEXT.to_string()),
            CharClass::Single(kind) => (kind, self.current_text()),
            CharClass::Less => self.lex_less(),
            CharClass::Greater => self.lex_greater(),
            CharClass::Quote => (TokenKind::String, self.lex_string()?),
            CharClass::Digit => (TokenKind::Int, self.lex_number()),
            CharClass::Whitespace | CharClass::Other => self.lex_identifier(),
        };

        self.cursor.read_char();
        Ok(self.emit(kind, text))
    }

    fn skip_whitespace(&mut self) {
        while self.cursor.current_char().is_some_and(is_whitespace) {
            self.cursor.read_char();
        }
    }

    /// Finishes a token that ends just before the cursor.
    fn emit(&mut self, kind: TokenKind, text: String) -> Token {
        let kind = match (self.previous_kind, kind) {
            (Some(TokenKind::Newline), TokenKind::Int) => TokenKind::LineNo,
            (_, kind) => kind,
        };
        self.previous_kind = Some(kind);

        let span = self.token_span();
        tracing::trace!(%kind, text = %text, line = span.line, column = span.column, "token");
        Token::new(kind, text, span)
    }

    /// From the start of the current token up to the cursor.
    fn token_span(&self) -> Span {
        self.token_start.merge(self.cursor.here())
    }

    /// The current character as a string.
    pub(super) fn current_text(&self) -> String {
        self.cursor
            .current_char()
            .map(String::from)
            .unwrap_or_default()
    }

    /// Reports an unterminated string that started at `token_start`.
    pub(super) fn unterminated_string(&self) -> ScanError {
        let span = self.token_span();
        tracing::debug!(line = span.line, column = span.column, "unterminated string literal");
        if let Some(handler) = self.handler {
            handler
                .build_error(span, "unterminated string literal")
                .code(DiagnosticCode::E_UNTERMINATED_STRING)
                .help("add a closing `\"`")
                .emit(handler);
        }
        ScanError::UnterminatedString { span }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}

impl FusedIterator for Scanner<'_> {}
