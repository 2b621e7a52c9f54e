//! Edge case tests for baskc-lex

use crate::{tokenize, Scanner, ScanError, Token, TokenKind};
use baskc_util::{Handler, Span};

fn lex_all(source: &str) -> Vec<Token> {
    let mut tokens = tokenize(source).unwrap();
    tokens.pop();
    tokens
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex_all(source).into_iter().map(|t| t.kind).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(lex_all("").is_empty());
}

#[test]
fn test_edge_eof_is_idempotent() {
    let mut scanner = Scanner::new("END");
    scanner.next_token().unwrap();
    let first = scanner.next_token().unwrap();
    for _ in 0..5 {
        assert_eq!(scanner.next_token().unwrap(), first);
    }
}

#[test]
fn test_edge_only_newlines() {
    assert_eq!(kinds("\n\n"), vec![TokenKind::Newline, TokenKind::Newline]);
}

#[test]
fn test_edge_blank_line_then_line_number() {
    assert_eq!(kinds("\n\n10"), vec![TokenKind::Newline, TokenKind::Newline, TokenKind::LineNo]);
}

#[test]
fn test_edge_whitespace_only() {
    assert!(lex_all(" \t\r ").is_empty());
}

#[test]
fn test_edge_line_number_needs_newline_right_before() {
    // a string between the newline and the integer breaks the rule
    assert_eq!(kinds("\"A\" 10"), vec![TokenKind::String, TokenKind::Int]);
}

#[test]
fn test_edge_negative_number_is_two_tokens() {
    assert_eq!(kinds("X -5"), vec![TokenKind::Ident, TokenKind::Minus, TokenKind::Int]);
}

#[test]
fn test_edge_single_char_ident() {
    let t = lex_all("x");
    assert_eq!(t[0].kind, TokenKind::Ident);
    assert_eq!(t[0].text, "x");
}

#[test]
fn test_edge_long_identifier() {
    let name = "A".repeat(10000);
    let t = lex_all(&format!("10 LET {} = 1", name));
    assert_eq!(t[2].text, name);
}

#[test]
fn test_edge_identifier_with_digit_and_question_mark() {
    let t = lex_all("X1?");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].kind, TokenKind::Ident);
    assert_eq!(t[0].text, "X1?");
}

#[test]
fn test_edge_keyword_glued_to_paren() {
    assert_eq!(
        kinds("PRINT(1)"),
        vec![
            TokenKind::Print,
            TokenKind::LBracket,
            TokenKind::Int,
            TokenKind::RBracket,
        ]
    );
}

#[test]
fn test_edge_bang_ends_name_but_starts_one() {
    let t = lex_all("A!B");
    assert_eq!(t.len(), 2);
    assert_eq!(t[0].text, "A");
    assert_eq!(t[1].text, "!B");
}

#[test]
fn test_edge_square_brackets_are_names() {
    let t = lex_all("A[1]");
    let texts: Vec<_> = t.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["A", "[", "1", "]"]);
    assert!(t.iter().all(|t| t.kind != TokenKind::LBracket));
}

#[test]
fn test_edge_all_comparisons() {
    assert_eq!(
        kinds("< > <= >= <> ="),
        vec![
            TokenKind::LessThan,
            TokenKind::GreaterThan,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::NotEquals,
            TokenKind::Assign,
        ]
    );
}

#[test]
fn test_edge_comparison_at_end() {
    assert_eq!(kinds("A<"), vec![TokenKind::Ident, TokenKind::LessThan]);
}

#[test]
fn test_edge_empty_string() {
    let t = lex_all("\"\"");
    assert_eq!(t[0].kind, TokenKind::String);
    assert_eq!(t[0].text, "");
}

#[test]
fn test_edge_lone_quote() {
    let mut scanner = Scanner::new("\"");
    assert_eq!(
        scanner.next_token(),
        Err(ScanError::UnterminatedString {
            span: Span::new(0, 1, 1, 1)
        })
    );
    assert!(scanner.next_token().unwrap().is_eof());
}

#[test]
fn test_edge_unterminated_string_on_second_line() {
    let handler = Handler::new();
    let err = Scanner::new("10 END\n20 PRINT \"X")
        .with_handler(&handler)
        .scan_all()
        .unwrap_err();
    assert_eq!(err.span().line, 2);
    assert_eq!(err.span().column, 10);
    assert_eq!(handler.error_count(), 1);
}

#[test]
fn test_edge_several_unknown_escapes() {
    let handler = Handler::new();
    let tokens = Scanner::new("\"\\a\\b\\c\"")
        .with_handler(&handler)
        .scan_all()
        .unwrap();
    assert_eq!(tokens[0].text, "abc");
    assert_eq!(handler.warning_count(), 3);
}

#[test]
fn test_edge_line_number_span_on_first_line() {
    let t = lex_all("10");
    assert_eq!(t[0].kind, TokenKind::LineNo);
    assert_eq!(t[0].span, Span::new(0, 2, 1, 1));
}

#[test]
fn test_edge_unicode_text() {
    let source = "10 PRINT \"héllo wörld\"";
    let t = lex_all(source);
    assert_eq!(t[2].text, "héllo wörld");
    assert_eq!(t[2].span.end, source.len());
}

#[test]
fn test_edge_tab_separated() {
    assert_eq!(
        kinds("10\tPRINT\t1"),
        vec![TokenKind::LineNo, TokenKind::Print, TokenKind::Int]
    );
}
