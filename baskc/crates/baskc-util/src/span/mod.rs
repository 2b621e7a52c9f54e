//! Span module - Source location tracking.
//!
//! A [`Span`] records where a lexeme came from: the byte range in the
//! original source text plus the 1-based line and column of its first
//! character.
//!
//! # Examples
//!
//! ```
//! use baskc_util::span::Span;
//!
//! let span = Span::new(3, 8, 1, 4);
//! assert_eq!(span.source_text("10 PRINT X"), Some("PRINT"));
//! assert_eq!(span.to_string(), "1:4");
//! ```

use std::fmt;

/// Source location span
///
/// Byte offsets always refer to the text the caller handed in, never to any
/// buffer the scanner builds internally.
///
/// # Examples
///
/// ```
/// use baskc_util::span::Span;
///
/// let span = Span::new(10, 20, 2, 5);
/// assert_eq!((span.start, span.end), (10, 20));
/// assert_eq!(span.to_string(), "2:5");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use baskc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a zero-width span at a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use baskc_util::span::Span;
    ///
    /// let point = Span::point(7, 2, 1);
    /// assert_eq!(point.start, point.end);
    /// assert_eq!(point.start, 7);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Merge two spans into a single span covering both
    ///
    /// Line and column are taken from whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use baskc_util::span::Span;
    ///
    /// let a = Span::new(10, 12, 3, 1);
    /// let b = Span::new(4, 6, 2, 5);
    /// let merged = a.merge(b);
    /// assert_eq!((merged.start, merged.end), (4, 12));
    /// assert_eq!((merged.line, merged.column), (2, 5));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    /// Returns the slice of `source` this span covers, if it is in bounds
    /// and on character boundaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use baskc_util::span::Span;
    ///
    /// let source = "10 PRINT X";
    /// assert_eq!(Span::new(3, 8, 1, 4).source_text(source), Some("PRINT"));
    /// assert_eq!(Span::new(3, 80, 1, 4).source_text(source), None);
    /// ```
    pub fn source_text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
