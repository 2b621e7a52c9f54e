//! Diagnostic codes for categorizing scanner errors and warnings.
//!
//! Codes follow the format `{prefix}{number}`: `E` for errors, `W` for
//! warnings, four digits zero-padded. The `01xx` range belongs to the
//! lexical phase.
//!
//! # Examples
//!
//! ```
//! use baskc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 101);
//! assert_eq!(code.as_str(), "E0101");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
    /// Short snake_case name shown next to the code
    pub name: &'static str,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use baskc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001, "custom");
    /// assert_eq!(code.as_str(), "E1001");
    /// assert_eq!(code.name(), "custom");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32, name: &'static str) -> Self {
        Self {
            prefix,
            number,
            name,
        }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the short name
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the full code string (e.g., "E0101")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXICAL ERRORS (E01xx)
    // =========================================================================

    /// E0101: string literal reaches end of input without a closing quote
    pub const E_UNTERMINATED_STRING: Self = Self::new("E", 101, "unterminated_string");

    // =========================================================================
    // LEXICAL WARNINGS (W01xx)
    // =========================================================================

    /// W0101: backslash followed by a character with no defined escape
    pub const W_UNKNOWN_ESCAPE: Self = Self::new("W", 101, "unknown_escape");
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({}{:04} {})", self.prefix, self.number, self.name)
    }
}
