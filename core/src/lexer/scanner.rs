use tracing::{debug, trace};

use super::classify::{CharClass, classify};
use super::cursor::Cursor;
use super::token::{Literal, Span, Token, TokenType};
use crate::errors::{ErrorReporter, LexError};

/// Scans source code into a sequence of tokens.
///
/// Iterating a `Scanner` yields one token per lexeme and finishes with a
/// single EOF token. Malformed lexemes go to the reporter and produce no
/// token.
pub struct Scanner<'src, R> {
    pub(super) cursor: Cursor<'src>,
    reporter: R,
    finished: bool,
}

impl<'src, R: ErrorReporter> Scanner<'src, R> {
    pub fn new(source: &'src str, reporter: R) -> Self {
        Self {
            cursor: Cursor::new(source),
            reporter,
            finished: false,
        }
    }

    pub fn scan_tokens(self) -> Vec<Token> {
        self.collect()
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Scan lexemes until one produces a token or input runs out.
    fn next_lexeme(&mut self) -> Option<Token> {
        while !self.cursor.is_at_end() {
            self.cursor.begin_lexeme();
            if let Some(token) = self.scan_token() {
                return Some(token);
            }
        }
        None
    }

    fn scan_token(&mut self) -> Option<Token> {
        let c = self.cursor.advance()?;

        let kind = match classify(c) {
            CharClass::Punctuation(kind) => kind,
            CharClass::Slash => {
                if self.cursor.match_char('/') {
                    self.skip_line_comment();
                    return None;
                }
                TokenType::Slash
            }
            CharClass::Comparison { bare, with_equal } => {
                if self.cursor.match_char('=') {
                    with_equal
                } else {
                    bare
                }
            }
            CharClass::Whitespace => return None,
            CharClass::Newline => {
                self.cursor.newline();
                return None;
            }
            CharClass::StringStart => return self.scan_string(),
            CharClass::DigitStart => return Some(self.scan_number()),
            CharClass::IdentStart => return Some(self.scan_identifier()),
            CharClass::Unexpected(c) => {
                let error =
                    LexError::unexpected_character(c, self.cursor.line(), self.lexeme_span());
                self.report(error);
                return None;
            }
        };

        Some(self.make_token(kind, None, self.cursor.line()))
    }

    /// Skip to the end of the line, leaving the newline for the main loop.
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.cursor.peek() {
            if ch == '\n' {
                break;
            }
            self.cursor.advance();
        }
    }

    pub(super) fn make_token(
        &self,
        kind: TokenType,
        literal: Option<Literal>,
        line: usize,
    ) -> Token {
        Token::new(kind, self.cursor.lexeme(), literal, line, self.lexeme_span())
    }

    pub(super) fn lexeme_span(&self) -> Span {
        Span::new(self.cursor.start(), self.cursor.pos())
    }

    pub(super) fn report(&mut self, error: LexError) {
        debug!(line = error.line(), %error, "lexical error");
        self.reporter.report_error(error);
    }

    fn eof_token(&self) -> Token {
        let end = self.cursor.source().len();
        Token::new(TokenType::Eof, "", None, self.cursor.line(), Span::new(end, end))
    }
}

impl<R: ErrorReporter> Iterator for Scanner<'_, R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = match self.next_lexeme() {
            Some(token) => token,
            None => {
                self.finished = true;
                self.eof_token()
            }
        };
        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line, "token");
        Some(token)
    }
}

impl<R: ErrorReporter> std::iter::FusedIterator for Scanner<'_, R> {}
