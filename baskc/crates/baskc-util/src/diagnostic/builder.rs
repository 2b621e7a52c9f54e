//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level, Span};

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use baskc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level, Span};
///
/// let diag = DiagnosticBuilder::new(Level::Error, "unterminated string literal")
///     .code(DiagnosticCode::E_UNTERMINATED_STRING)
///     .span(Span::new(9, 14, 1, 10))
///     .help("add a closing `\"`")
///     .build();
///
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[must_use = "a diagnostic builder does nothing until `build` or `emit` is called"]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new builder with the given level and message
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create a builder for an error
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a builder for a warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help message
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finish building the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
