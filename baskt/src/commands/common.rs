//! Common types and utilities for baskt commands.
//!
//! This module provides shared types and helpers used by every command.

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{BasktError, Result};

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

// ============================================================================
// Output Format
// ============================================================================

/// How token streams are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `line:col KIND text` line per token
    #[default]
    Text,
    /// A JSON array of token objects per file
    Json,
}

// ============================================================================
// Source Input
// ============================================================================

/// Read a source file, or standard input for `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    std::fs::read_to_string(path).map_err(|e| {
        BasktError::FileOperation(format!(
            "{} {}: {}",
            error_messages::CANNOT_READ,
            path.display(),
            e
        ))
    })
}

/// Name used for `path` in output and diagnostics.
pub fn display_name(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when a source file cannot be read.
    pub const CANNOT_READ: &str = "Cannot read";

    /// Error when standard input is named more than once.
    pub const STDIN_TWICE: &str = "Standard input can only be read once";
}

/// Check the file list every command takes.
pub fn validate_inputs(files: &[std::path::PathBuf]) -> Result<()> {
    if files.is_empty() {
        return Err(BasktError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }
    let stdin_count = files
        .iter()
        .filter(|path| path.as_path() == Path::new(STDIN_PATH))
        .count();
    if stdin_count > 1 {
        return Err(BasktError::Validation(
            error_messages::STDIN_TWICE.to_string(),
        ));
    }
    Ok(())
}
