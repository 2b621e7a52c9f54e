//! Scanner error types.

use baskc_util::Span;
use thiserror::Error;

/// Errors that stop the scanner from producing a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The input ended inside a string literal.
    #[error("unterminated string literal starting at {}", span)]
    UnterminatedString {
        /// From the opening quote to the end of input.
        span: Span,
    },
}

impl ScanError {
    /// Source location of the error.
    pub fn span(&self) -> Span {
        match self {
            ScanError::UnterminatedString { span } => *span,
        }
    }
}
