//! Keyword resolution.
//!
//! The scanner captures a word and asks a [`KeywordLookup`] what it is. The
//! scanner itself knows no keywords; swap the lookup to scan a different
//! dialect, add aliases, or register builtin function names.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::token::{TokenKind, KEYWORDS};

/// Maps a captured word to its token kind.
///
/// Unrecognized words must resolve to [`TokenKind::Ident`].
///
/// Closures implement this trait, which keeps one-off tables short:
///
/// ```
/// use baskc_lex::{KeywordLookup, TokenKind};
///
/// let shout = |word: &str| {
///     if word == "SAY" { TokenKind::Print } else { TokenKind::Ident }
/// };
/// assert_eq!(shout.lookup_identifier("SAY"), TokenKind::Print);
/// ```
pub trait KeywordLookup {
    /// Resolves `text` to a token kind.
    fn lookup_identifier(&self, text: &str) -> TokenKind;
}

impl<F> KeywordLookup for F
where
    F: Fn(&str) -> TokenKind,
{
    fn lookup_identifier(&self, text: &str) -> TokenKind {
        self(text)
    }
}

/// Hash-backed keyword table with case-insensitive matching.
///
/// # Example
///
/// ```
/// use baskc_lex::{KeywordLookup, KeywordTable, TokenKind};
///
/// let mut table = KeywordTable::basic();
/// table.register_builtin("LEN");
///
/// assert_eq!(table.lookup_identifier("goto"), TokenKind::Goto);
/// assert_eq!(table.lookup_identifier("Len"), TokenKind::Builtin);
/// assert_eq!(table.lookup_identifier("A$"), TokenKind::Ident);
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeywordTable {
    words: FxHashMap<String, TokenKind>,
}

impl KeywordTable {
    /// Creates a table that resolves every word to [`TokenKind::Ident`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the table for the standard dialect: every keyword in its
    /// canonical spelling, plus `:`, `;` and `^`.
    pub fn basic() -> Self {
        let mut table = Self::empty();
        for &kind in KEYWORDS {
            table.insert(kind.name(), kind);
        }
        table.insert(":", TokenKind::Colon);
        table.insert(";", TokenKind::Semicolon);
        table.insert("^", TokenKind::Pow);
        table
    }

    /// Maps `word` to `kind`, replacing any previous mapping.
    pub fn insert(&mut self, word: &str, kind: TokenKind) -> Option<TokenKind> {
        self.words.insert(normalize(word), kind)
    }

    /// Registers `name` as a builtin function.
    pub fn register_builtin(&mut self, name: &str) -> Option<TokenKind> {
        self.insert(name, TokenKind::Builtin)
    }

    /// Removes the mapping for `word`, if any.
    pub fn remove(&mut self, word: &str) -> Option<TokenKind> {
        self.words.remove(&normalize(word))
    }

    /// Number of mapped words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no word is mapped.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl KeywordLookup for KeywordTable {
    fn lookup_identifier(&self, text: &str) -> TokenKind {
        self.words
            .get(&normalize(text))
            .copied()
            .unwrap_or(TokenKind::Ident)
    }
}

fn normalize(word: &str) -> String {
    word.to_uppercase()
}

static DEFAULT_TABLE: LazyLock<KeywordTable> = LazyLock::new(KeywordTable::basic);

/// The shared [`KeywordTable::basic`] table used by [`crate::Scanner::new`].
pub fn default_table() -> &'static KeywordTable {
    &DEFAULT_TABLE
}
