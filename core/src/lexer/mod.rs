pub mod classify;
pub mod cursor;
pub mod keywords;
mod number_ident_scanner;
pub mod scanner;
mod string_scanner;
pub mod token;

use tracing::debug;

use crate::errors::{Diagnostics, ErrorReporter, LexErrors};
use scanner::Scanner;
use token::Token;

/// Tokenize source code, sending every lexical error to `reporter`.
///
/// Always returns the full token sequence, terminated by one EOF token.
pub fn scan_tokens<R: ErrorReporter + ?Sized>(source: &str, reporter: &mut R) -> Vec<Token> {
    let _span = tracing::debug_span!("scan_tokens", len = source.len()).entered();
    let mut counted = Counting {
        inner: reporter,
        count: 0,
    };
    let tokens = Scanner::new(source, &mut counted).scan_tokens();
    debug!(tokens = tokens.len(), errors = counted.count, "scan finished");
    tokens
}

/// Tokenize source code, failing if any lexical error was reported.
pub fn lex(source: &str) -> Result<Vec<Token>, LexErrors> {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan_tokens(source, &mut diagnostics);
    if diagnostics.has_errors() {
        return Err(LexErrors::new(diagnostics.into_errors()));
    }
    Ok(tokens)
}

struct Counting<'a, R: ?Sized> {
    inner: &'a mut R,
    count: usize,
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for Counting<'_, R> {
    fn report(&mut self, line: usize, message: &str) {
        self.count += 1;
        self.inner.report(line, message);
    }

    fn report_error(&mut self, error: crate::errors::LexError) {
        self.count += 1;
        self.inner.report_error(error);
    }
}
