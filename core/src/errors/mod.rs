mod lex_error;
mod reporter;

pub use lex_error::{LexError, LexErrors};
pub use reporter::{Diagnostics, ErrorReporter};
