pub mod diagnostics;
pub mod errors;
pub mod lexer;

pub use errors::{Diagnostics, ErrorReporter, LexError, LexErrors};
pub use lexer::token::{Literal, Span, Token, TokenType};
pub use lexer::{lex, scan_tokens};
