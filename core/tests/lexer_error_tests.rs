use loxscan::errors::{Diagnostics, ErrorReporter, LexError};
use loxscan::lexer::scanner::Scanner;
use loxscan::lexer::{lex, scan_tokens, token::TokenType};
use pretty_assertions::assert_eq;

fn scan_with_diagnostics(source: &str) -> (Vec<TokenType>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let kinds = scan_tokens(source, &mut diagnostics)
        .into_iter()
        .map(|t| t.kind)
        .collect();
    (kinds, diagnostics)
}

#[test]
fn unexpected_character_is_reported_and_skipped() {
    let (kinds, diagnostics) = scan_with_diagnostics("a @ b");
    assert_eq!(
        kinds,
        vec![TokenType::Identifier, TokenType::Identifier, TokenType::Eof]
    );
    assert_eq!(
        diagnostics.messages(),
        &[(1, "Unexpected character '@'".to_string())]
    );
    assert!(matches!(
        diagnostics.errors(),
        [LexError::UnexpectedCharacter { character: '@', line: 1, .. }]
    ));
}

#[test]
fn every_error_in_a_pass_is_reported() {
    let (kinds, diagnostics) = scan_with_diagnostics("#\n$ ok\n%");
    assert_eq!(kinds, vec![TokenType::Identifier, TokenType::Eof]);
    let lines: Vec<usize> = diagnostics.messages().iter().map(|(line, _)| *line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
}

#[test]
fn non_ascii_character_is_skipped_whole() {
    let (kinds, diagnostics) = scan_with_diagnostics("é1");
    assert_eq!(kinds, vec![TokenType::Number, TokenType::Eof]);
    assert_eq!(diagnostics.messages()[0].1, "Unexpected character 'é'");
    assert_eq!(diagnostics.errors()[0].span().len(), 'é'.len_utf8());
}

#[test]
fn unterminated_string_produces_no_token() {
    let (kinds, diagnostics) = scan_with_diagnostics("\"hello");
    assert_eq!(kinds, vec![TokenType::Eof]);
    assert_eq!(
        diagnostics.messages(),
        &[(1, "Unterminated string.".to_string())]
    );
}

#[test]
fn unterminated_string_reports_last_line() {
    let (kinds, diagnostics) = scan_with_diagnostics("print \"one\ntwo\nthree");
    assert_eq!(kinds, vec![TokenType::Print, TokenType::Eof]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.errors()[0].line(), 3);
    let span = diagnostics.errors()[0].span();
    assert_eq!(span.offset(), 6);
    assert_eq!(span.len(), "\"one\ntwo\nthree".len());
}

#[test]
fn scanning_continues_after_errors() {
    let (kinds, diagnostics) = scan_with_diagnostics("var ~x = 1;");
    assert_eq!(
        kinds,
        vec![
            TokenType::Var,
            TokenType::Identifier,
            TokenType::Equal,
            TokenType::Number,
            TokenType::Semicolon,
            TokenType::Eof,
        ]
    );
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn lex_fails_with_every_error() {
    let err = lex("@ \"open").expect_err("lexing should fail");
    assert_eq!(err.errors.len(), 2);
    let messages: Vec<String> = err.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec!["Unexpected character '@'", "Unterminated string."]
    );
}

#[test]
fn custom_reporter_receives_line_and_message() {
    struct Lines(Vec<usize>);

    impl ErrorReporter for Lines {
        fn report(&mut self, line: usize, _message: &str) {
            self.0.push(line);
        }
    }

    let mut lines = Lines(Vec::new());
    let tokens = scan_tokens("\n\n?", &mut lines);
    assert_eq!(tokens.len(), 1);
    assert_eq!(lines.0, vec![3]);
}

#[test]
fn scanner_yields_tokens_lazily() {
    let mut scanner = Scanner::new("1 @ 2", Diagnostics::new());
    assert_eq!(scanner.next().map(|t| t.kind), Some(TokenType::Number));
    assert_eq!(scanner.next().map(|t| t.kind), Some(TokenType::Number));
    assert_eq!(scanner.next().map(|t| t.kind), Some(TokenType::Eof));
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.next(), None);

    let diagnostics = scanner.into_reporter();
    assert_eq!(diagnostics.len(), 1);
}
