//! baskc-util - Shared foundation types for the baskc toolchain.
//!
//! This crate holds the pieces every other baskc crate needs but that carry
//! no knowledge of the BASIC dialect itself:
//!
//! - [`span`] - source locations (byte range plus line/column)
//! - [`diagnostic`] - errors and warnings, collected by a [`Handler`]
//!
//! # Example
//!
//! ```
//! use baskc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("unknown escape sequence `\\q`")
//!     .code(DiagnosticCode::W_UNKNOWN_ESCAPE)
//!     .span(Span::new(4, 6, 1, 5))
//!     .emit(&handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! assert_eq!(handler.error_count(), 0);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;
