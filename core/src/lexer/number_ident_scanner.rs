use super::classify::is_ident_continue;
use super::keywords;
use super::scanner::Scanner;
use super::token::{Literal, Token, TokenType};
use crate::errors::ErrorReporter;

impl<R: ErrorReporter> Scanner<'_, R> {
    /// Scan the rest of a number literal after its first digit.
    ///
    /// At most one fractional part, and only when a digit follows the dot:
    /// `1.` scans as `1` and leaves the dot behind.
    pub(super) fn scan_number(&mut self) -> Token {
        self.consume_digits();

        if self.cursor.peek() == Some('.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance(); // '.'
            self.consume_digits();
        }

        // A digit run with an optional fraction is always a valid f64.
        let value: f64 = self.cursor.lexeme().parse().unwrap_or(f64::NAN);
        self.make_token(TokenType::Number, Some(Literal::Number(value)), self.cursor.line())
    }

    fn consume_digits(&mut self) {
        while self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
        }
    }

    /// Scan the rest of an identifier or reserved word after its first character.
    pub(super) fn scan_identifier(&mut self) -> Token {
        while self.cursor.peek().is_some_and(is_ident_continue) {
            self.cursor.advance();
        }

        let kind = keywords::lookup(self.cursor.lexeme()).unwrap_or(TokenType::Identifier);
        self.make_token(kind, None, self.cursor.line())
    }
}
