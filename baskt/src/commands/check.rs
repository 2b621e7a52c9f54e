//! Check command implementation.
//!
//! Scans each input file and reports every diagnostic as
//! `path:line:col: level[code]: message`. Fails if any file has an error.

use std::path::PathBuf;

use baskc_lex::{KeywordLookup, Scanner};
use baskc_util::Handler;

use crate::commands::common::{display_name, read_source, validate_inputs};
use crate::error::{BasktError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Source files, `-` for standard input.
    pub files: Vec<PathBuf>,
}

/// Totals over every checked file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    /// Files scanned.
    pub files: usize,
    /// Errors reported.
    pub errors: usize,
    /// Warnings reported.
    pub warnings: usize,
}

/// Run the check command, printing diagnostics to standard error.
pub fn run_check(args: CheckArgs, keywords: &dyn KeywordLookup) -> Result<CheckSummary> {
    validate_inputs(&args.files)?;

    let mut summary = CheckSummary::default();
    for path in &args.files {
        let name = display_name(path);
        let source = read_source(path)?;
        let handler = check_source(&source, keywords);

        for diagnostic in handler.diagnostics() {
            eprintln!("{}", diagnostic.render(&name));
        }

        summary.files += 1;
        summary.errors += handler.error_count();
        summary.warnings += handler.warning_count();
    }

    tracing::info!(
        files = summary.files,
        errors = summary.errors,
        warnings = summary.warnings,
        "check finished"
    );

    if summary.errors > 0 {
        return Err(BasktError::Validation(format!(
            "{} error(s) in {} file(s)",
            summary.errors, summary.files
        )));
    }
    Ok(summary)
}

/// Scan `source` to the end and return the handler holding what the
/// scanner reported.
pub fn check_source(source: &str, keywords: &dyn KeywordLookup) -> Handler {
    let handler = Handler::new();
    let result = Scanner::with_keywords(source, keywords)
        .with_handler(&handler)
        .scan_all();
    if let Err(err) = result {
        // also on the handler as E0101
        tracing::debug!(%err, "scan stopped early");
    }
    handler
}

#[cfg(test)]
mod tests {
    use super::*;
    use baskc_lex::default_table;
    use baskc_util::{DiagnosticCode, Level};
    use tempfile::TempDir;

    #[test]
    fn test_clean_source() {
        let handler = check_source("10 PRINT \"OK\"\n20 END\n", default_table());
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_unknown_escape_is_warning() {
        let diagnostics = check_source("10 PRINT \"\\q\"", default_table()).diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, Level::Warning);
        assert_eq!(
            diagnostics[0].render("a.bas"),
            "a.bas:1:11: warning[W0101]: unknown escape sequence `\\q`\n  \
             = note: the backslash is dropped and the character kept\n  \
             = help: supported escapes are `\\n`, `\\r`, `\\t`, `\\\"` and `\\\\`"
        );
    }

    #[test]
    fn test_unterminated_string_is_error() {
        let handler = check_source("10 PRINT \"OOPS", default_table());
        assert_eq!(handler.error_count(), 1);
        let diagnostics = handler.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, Some(DiagnosticCode::E_UNTERMINATED_STRING));
    }

    #[test]
    fn test_run_check_counts() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.bas");
        let warn = temp_dir.path().join("warn.bas");
        std::fs::write(&good, "10 END\n").unwrap();
        std::fs::write(&warn, "10 PRINT \"\\z\"\n").unwrap();

        let summary = run_check(
            CheckArgs {
                files: vec![good, warn],
            },
            default_table(),
        )
        .unwrap();
        assert_eq!(
            summary,
            CheckSummary {
                files: 2,
                errors: 0,
                warnings: 1,
            }
        );
    }

    #[test]
    fn test_run_check_fails_on_error() {
        let temp_dir = TempDir::new().unwrap();
        let bad = temp_dir.path().join("bad.bas");
        std::fs::write(&bad, "10 PRINT \"").unwrap();

        let err = run_check(CheckArgs { files: vec![bad] }, default_table()).unwrap_err();
        assert!(matches!(err, BasktError::Validation(_)));
    }
}
