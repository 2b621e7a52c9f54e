//! Command modules for the baskt CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod common;

pub mod check;
pub mod tokens;

pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
