//! Scanner module.
//!
//! The scanner is split by the kind of lexeme it recognizes:
//! - `core` - Scanner struct, dispatch and the line-number rule
//! - `identifier` - names, resolved through the keyword lookup
//! - `number` - integer literals
//! - `string` - string literals and escapes
//! - `operator` - comparison operators

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;
