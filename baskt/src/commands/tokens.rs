//! Tokens command implementation.
//!
//! Scans each input file and prints its token stream, either as text
//! (`line:col KIND text`, one token per line) or as JSON.

use std::io::Write;
use std::path::PathBuf;

use baskc_lex::{KeywordLookup, Scanner, Token, TokenKind};
use baskc_util::{Diagnostic, Handler, Level};
use serde::Serialize;

use crate::commands::common::{display_name, read_source, validate_inputs, OutputFormat};
use crate::error::{BasktError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source files, `-` for standard input.
    pub files: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
}

/// One token as written by `--format json`.
#[derive(Debug, Serialize, PartialEq)]
pub struct TokenRecord<'a> {
    /// Canonical kind name.
    pub kind: &'static str,
    /// Token text.
    pub text: &'a str,
    /// Line (1-based).
    pub line: u32,
    /// Column (1-based).
    pub column: u32,
    /// Start byte offset.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.name(),
            text: &token.text,
            line: token.span.line,
            column: token.span.column,
            start: token.span.start,
            end: token.span.end,
        }
    }
}

/// Run the tokens command, writing to standard output.
pub fn run_tokens(args: TokensArgs, keywords: &dyn KeywordLookup) -> Result<()> {
    validate_inputs(&args.files)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let print_headers = args.files.len() > 1 && args.format == OutputFormat::Text;

    for path in &args.files {
        let name = display_name(path);
        let source = read_source(path)?;
        let tokens = scan_file(&name, &source, keywords)?;
        tracing::debug!(file = %name, tokens = tokens.len(), "scanned");

        if print_headers {
            writeln!(out, "==> {} <==", name)?;
        }
        write_tokens(&mut out, &tokens, args.format)?;
    }

    out.flush()?;
    Ok(())
}

/// Scan `source`, printing warnings to standard error.
fn scan_file(name: &str, source: &str, keywords: &dyn KeywordLookup) -> Result<Vec<Token>> {
    let handler = Handler::new();
    let result = Scanner::with_keywords(source, keywords)
        .with_handler(&handler)
        .scan_all();

    for line in rendered_warnings(name, handler.take()) {
        eprintln!("{}", line);
    }

    result.map_err(|source| BasktError::Scan {
        path: name.to_string(),
        source,
    })
}

/// Errors are left out: the returned scan error already reports them.
fn rendered_warnings(name: &str, diagnostics: Vec<Diagnostic>) -> Vec<String> {
    diagnostics
        .into_iter()
        .filter(|d| d.level == Level::Warning)
        .map(|d| d.render(name))
        .collect()
}

/// Write `tokens` in the requested format.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}", text_line(token))?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            serde_json::to_writer(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

/// Render one token as `line:col KIND text`.
///
/// String text is quoted and escaped so every token stays on one line; EOF
/// has no text.
pub fn text_line(token: &Token) -> String {
    let position = format!("{}:{}", token.span.line, token.span.column);
    match token.kind {
        TokenKind::Eof => format!("{} {}", position, token.kind),
        TokenKind::String => format!("{} {} {:?}", position, token.kind, token.text),
        _ => format!("{} {} {}", position, token.kind, token.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str, format: OutputFormat) -> String {
        let tokens = baskc_lex::tokenize(source).unwrap();
        let mut out = Vec::new();
        write_tokens(&mut out, &tokens, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        assert_eq!(
            render("10 PRINT \"A\\tB\"\n", OutputFormat::Text),
            "1:1 LINENO 10\n\
             1:4 PRINT PRINT\n\
             1:10 STRING \"A\\tB\"\n\
             1:16 NEWLINE N\n\
             2:1 EOF\n"
        );
    }

    #[test]
    fn test_json_output() {
        let output = render("10 X", OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let tokens = value.as_array().unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0]["kind"], "LINENO");
        assert_eq!(tokens[0]["text"], "10");
        assert_eq!(tokens[1]["kind"], "IDENT");
        assert_eq!(tokens[1]["start"], 3);
        assert_eq!(tokens[1]["end"], 4);
        assert_eq!(tokens[1]["column"], 4);
        assert_eq!(tokens[2]["kind"], "EOF");
    }

    #[test]
    fn test_token_record_from_token() {
        let tokens = baskc_lex::tokenize("A").unwrap();
        let record = TokenRecord::from(&tokens[0]);
        assert_eq!(
            record,
            TokenRecord {
                kind: "IDENT",
                text: "A",
                line: 1,
                column: 1,
                start: 0,
                end: 1,
            }
        );
    }

    #[test]
    fn test_scan_file_reports_unterminated_string() {
        let err = scan_file("a.bas", "10 PRINT \"X", baskc_lex::default_table()).unwrap_err();
        assert!(matches!(err, BasktError::Scan { .. }));
        assert!(err.to_string().starts_with("a.bas: unterminated string literal"));
    }

    #[test]
    fn test_only_warnings_are_rendered() {
        let handler = Handler::new();
        let result = Scanner::new("10 PRINT \"\\q\" \"OPEN")
            .with_handler(&handler)
            .scan_all();
        assert!(result.is_err());

        let diagnostics = handler.take();
        assert_eq!(diagnostics.len(), 2);

        let lines = rendered_warnings("a.bas", diagnostics);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("a.bas:1:11: warning[W0101]"));
    }
}
