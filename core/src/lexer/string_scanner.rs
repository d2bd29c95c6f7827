use super::scanner::Scanner;
use super::token::{Literal, Token, TokenType};
use crate::errors::{ErrorReporter, LexError};

impl<R: ErrorReporter> Scanner<'_, R> {
    /// Scan the rest of a string literal after its opening quote.
    ///
    /// Backslashes are ordinary characters. The token keeps the line the
    /// string started on.
    pub(super) fn scan_string(&mut self) -> Option<Token> {
        let line = self.cursor.line();

        while let Some(c) = self.cursor.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.cursor.newline();
            }
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            let error = LexError::unterminated_string(self.cursor.line(), self.lexeme_span());
            self.report(error);
            return None;
        }

        self.cursor.advance(); // closing '"'

        let value = self.cursor.slice(self.cursor.start() + 1, self.cursor.pos() - 1);
        Some(self.make_token(TokenType::String, Some(Literal::String(value.to_owned())), line))
    }
}
