//! Token definitions for the line-numbered BASIC dialect.
//!
//! [`TokenKind`] is the closed vocabulary shared by the scanner and whatever
//! parser consumes its output. Every kind has a canonical upper-snake name
//! (`LINENO`, `LESS_EQUAL`, ...) used for display and for naming kinds in
//! configuration files.

use std::fmt;

use baskc_util::Span;

/// Text carried by every NEWLINE token.
pub const NEWLINE_TEXT: &str = "N";

macro_rules! token_kinds {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, )*) => {
        /// The kind of a token.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum TokenKind {
            $( $(#[$doc])* $variant, )*
        }

        impl TokenKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [TokenKind] = &[$( TokenKind::$variant, )*];

            /// Canonical upper-snake name of this kind.
            ///
            /// # Example
            ///
            /// ```
            /// use baskc_lex::TokenKind;
            ///
            /// assert_eq!(TokenKind::LineNo.name(), "LINENO");
            /// assert_eq!(TokenKind::GreaterEqual.name(), "GREATER_EQUAL");
            /// ```
            pub const fn name(self) -> &'static str {
                match self {
                    $( TokenKind::$variant => $name, )*
                }
            }
        }
    };
}

token_kinds! {
    // Single-character punctuation and operators
    /// `=`
    Assign => "ASSIGN",
    /// `,`
    Comma => "COMMA",
    /// `+`
    Plus => "PLUS",
    /// `-`
    Minus => "MINUS",
    /// `/`
    Slash => "SLASH",
    /// `%`
    Mod => "MOD",
    /// `*`
    Asterisk => "ASTERISK",
    /// `(`
    LBracket => "LBRACKET",
    /// `)`
    RBracket => "RBRACKET",

    // Comparisons
    /// `<`
    LessThan => "LESS_THAN",
    /// `>`
    GreaterThan => "GREATER_THAN",
    /// `<=`
    LessEqual => "LESS_EQUAL",
    /// `>=`
    GreaterEqual => "GREATER_EQUAL",
    /// `<>`
    NotEquals => "NOT_EQUALS",

    // Punctuation resolved through the keyword table
    /// `:` statement separator
    Colon => "COLON",
    /// `;` print separator
    Semicolon => "SEMICOLON",
    /// `^` exponentiation
    Pow => "POW",

    // Literals
    /// Quoted string, escapes decoded
    String => "STRING",
    /// Integer literal
    Int => "INT",
    /// Integer in line-number position
    LineNo => "LINENO",

    // Names
    /// Identifier that is not a keyword
    Ident => "IDENT",
    /// Registered builtin function name
    Builtin => "BUILTIN",

    // Keywords
    /// `AND`
    And => "AND",
    /// `DATA`
    Data => "DATA",
    /// `DEF`
    Def => "DEF",
    /// `DIM`
    Dim => "DIM",
    /// `ELSE`
    Else => "ELSE",
    /// `END`
    End => "END",
    /// `FN`
    Fn => "FN",
    /// `FOR`
    For => "FOR",
    /// `GOSUB`
    Gosub => "GOSUB",
    /// `GOTO`
    Goto => "GOTO",
    /// `IF`
    If => "IF",
    /// `INPUT`
    Input => "INPUT",
    /// `LET`
    Let => "LET",
    /// `NEXT`
    Next => "NEXT",
    /// `OR`
    Or => "OR",
    /// `PRINT`
    Print => "PRINT",
    /// `READ`
    Read => "READ",
    /// `REM`
    Rem => "REM",
    /// `RETURN`
    Return => "RETURN",
    /// `STEP`
    Step => "STEP",
    /// `SWAP`
    Swap => "SWAP",
    /// `THEN`
    Then => "THEN",
    /// `TO`
    To => "TO",
    /// `XOR`
    Xor => "XOR",

    // Structure
    /// Line break
    Newline => "NEWLINE",
    /// End of input
    Eof => "EOF",
}

/// The reserved words of the dialect, in their canonical spelling.
pub const KEYWORDS: &[TokenKind] = &[
    TokenKind::And,
    TokenKind::Data,
    TokenKind::Def,
    TokenKind::Dim,
    TokenKind::Else,
    TokenKind::End,
    TokenKind::Fn,
    TokenKind::For,
    TokenKind::Gosub,
    TokenKind::Goto,
    TokenKind::If,
    TokenKind::Input,
    TokenKind::Let,
    TokenKind::Next,
    TokenKind::Or,
    TokenKind::Print,
    TokenKind::Read,
    TokenKind::Rem,
    TokenKind::Return,
    TokenKind::Step,
    TokenKind::Swap,
    TokenKind::Then,
    TokenKind::To,
    TokenKind::Xor,
];

impl TokenKind {
    /// Parses a canonical name back into a kind, ignoring ASCII case.
    ///
    /// # Example
    ///
    /// ```
    /// use baskc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_name("print"), Some(TokenKind::Print));
    /// assert_eq!(TokenKind::from_name("NOT_EQUALS"), Some(TokenKind::NotEquals));
    /// assert_eq!(TokenKind::from_name("WEND"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<TokenKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Returns true for reserved words (`LET`, `PRINT`, ...).
    pub fn is_keyword(self) -> bool {
        KEYWORDS.contains(&self)
    }

    /// Returns true for literal kinds, line numbers included.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Int | TokenKind::LineNo)
    }

    /// Returns true for arithmetic and comparison operators.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Slash
                | TokenKind::Mod
                | TokenKind::Asterisk
                | TokenKind::Pow
                | TokenKind::LessThan
                | TokenKind::GreaterThan
                | TokenKind::LessEqual
                | TokenKind::GreaterEqual
                | TokenKind::NotEquals
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// `text` holds the decoded contents for strings, the verbatim digits for
/// numbers, the verbatim spelling for names and operators, [`NEWLINE_TEXT`]
/// for line breaks and nothing for end of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What the lexeme is.
    pub kind: TokenKind,
    /// The lexeme's text.
    pub text: String,
    /// Where the lexeme sits in the original source.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns true if this is the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof | TokenKind::Newline => write!(f, "{}", self.kind),
            TokenKind::String => write!(f, "{}({:?})", self.kind, self.text),
            _ => write!(f, "{}({})", self.kind, self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_for_every_kind() {
        for &kind in TokenKind::ALL {
            assert_eq!(TokenKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = TokenKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TokenKind::ALL.len());
    }

    #[test]
    fn test_keyword_classification() {
        assert!(TokenKind::Gosub.is_keyword());
        assert!(!TokenKind::Ident.is_keyword());
        assert!(!TokenKind::Colon.is_keyword());
        assert!(TokenKind::LineNo.is_literal());
        assert!(TokenKind::NotEquals.is_operator());
        assert!(!TokenKind::Assign.is_operator());
    }

    #[test]
    fn test_token_display() {
        let span = Span::DUMMY;
        assert_eq!(Token::new(TokenKind::LineNo, "10", span).to_string(), "LINENO(10)");
        assert_eq!(Token::new(TokenKind::Newline, NEWLINE_TEXT, span).to_string(), "NEWLINE");
        assert_eq!(Token::new(TokenKind::Eof, "", span).to_string(), "EOF");
        assert_eq!(
            Token::new(TokenKind::String, "a\tb", span).to_string(),
            "STRING(\"a\\tb\")"
        );
    }
}
