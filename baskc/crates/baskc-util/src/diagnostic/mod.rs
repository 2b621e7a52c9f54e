//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Diagnostics are collected by a [`Handler`] rather than printed on the
//! spot, so the scanner can keep producing tokens and the driver decides how
//! (and whether) to show them.
//!
//! # Examples
//!
//! ```
//! use baskc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! handler
//!     .build_error(Span::new(3, 9, 1, 4), "unterminated string literal")
//!     .code(DiagnosticCode::E_UNTERMINATED_STRING)
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

pub use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use baskc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Input that cannot be turned into a token stream
    Error,
    /// Suspicious input that still scans
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
///
/// Built through [`DiagnosticBuilder`].
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Render the diagnostic as `origin:line:col: level[code]: message`,
    /// followed by one indented line per note and help.
    ///
    /// # Examples
    ///
    /// ```
    /// use baskc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Span};
    ///
    /// let diag = DiagnosticBuilder::warning("unknown escape sequence `\\q`")
    ///     .code(DiagnosticCode::W_UNKNOWN_ESCAPE)
    ///     .span(Span::new(5, 7, 2, 3))
    ///     .build();
    /// assert_eq!(
    ///     diag.render("prog.bas"),
    ///     "prog.bas:2:3: warning[W0101]: unknown escape sequence `\\q`"
    /// );
    /// ```
    pub fn render(&self, origin: &str) -> String {
        let mut out = format!("{}:{}: {}", origin, self.span, self);
        for note in &self.notes {
            out.push_str(&format!("\n  = note: {}", note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = help: {}", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Collects diagnostics emitted while scanning.
///
/// Interior mutability lets several borrowers share one handler through `&`.
///
/// # Examples
///
/// ```
/// use baskc_util::diagnostic::{Handler, Span};
///
/// let handler = Handler::new();
/// handler.build_warning(Span::DUMMY, "odd escape").emit(&handler);
///
/// assert_eq!(handler.warning_count(), 1);
/// assert_eq!(handler.error_count(), 0);
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for an error at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Create a diagnostic builder for a warning at `span`
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("errors", &self.error_count())
            .field("warnings", &self.warning_count())
            .finish()
    }
}
