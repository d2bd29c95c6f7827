use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::token::Span;

/// A malformed lexeme. Reported, never fatal to the scan.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum LexError {
    #[error("Unexpected character '{character}'")]
    #[diagnostic(
        code(loxscan::unexpected_character),
        help("this character does not start any Lox token")
    )]
    UnexpectedCharacter {
        character: char,
        line: usize,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("Unterminated string.")]
    #[diagnostic(
        code(loxscan::unterminated_string),
        help("add a closing '\"' before the end of the input")
    )]
    UnterminatedString {
        line: usize,
        #[label("string starts here")]
        span: SourceSpan,
    },
}

impl LexError {
    pub fn unexpected_character(character: char, line: usize, span: Span) -> Self {
        Self::UnexpectedCharacter {
            character,
            line,
            span: span.into(),
        }
    }

    pub fn unterminated_string(line: usize, span: Span) -> Self {
        Self::UnterminatedString {
            line,
            span: span.into(),
        }
    }

    /// Line the error is reported at.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { line, .. }
            | LexError::UnterminatedString { line, .. } => *line,
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::UnterminatedString { span, .. } => *span,
        }
    }
}

/// Every error from one scan pass, for callers that treat any diagnostic as fatal.
#[derive(Debug, Error, Diagnostic)]
#[error("scanning failed with {} error(s)", .errors.len())]
#[diagnostic(code(loxscan::scan_failed))]
pub struct LexErrors {
    #[related]
    pub errors: Vec<LexError>,
}

impl LexErrors {
    pub fn new(errors: Vec<LexError>) -> Self {
        Self { errors }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LexError> {
        self.errors.iter()
    }
}

impl IntoIterator for LexErrors {
    type Item = LexError;
    type IntoIter = std::vec::IntoIter<LexError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
