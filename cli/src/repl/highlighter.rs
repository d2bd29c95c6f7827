use std::borrow::Cow;

use loxscan::errors::Diagnostics;
use loxscan::lexer::scan_tokens;
use loxscan::lexer::token::{Token, TokenType};
use owo_colors::OwoColorize;

/// Color a line by its tokens. Skipped text is copied through unchanged.
pub fn highlight_line(line: &str) -> Cow<'_, str> {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan_tokens(line, &mut diagnostics);

    let mut out = String::with_capacity(line.len());
    let mut pos = 0;
    for token in tokens.iter().filter(|t| !t.is_eof()) {
        out.push_str(&line[pos..token.span.start]);
        out.push_str(&paint(token));
        pos = token.span.end;
    }
    out.push_str(&line[pos..]);
    Cow::Owned(out)
}

fn paint(token: &Token) -> String {
    let text = token.lexeme.as_str();
    match token.kind {
        kind if kind.is_keyword() => text.blue().bold().to_string(),
        TokenType::String => text.green().to_string(),
        TokenType::Number => text.yellow().to_string(),
        TokenType::Identifier => text.to_string(),
        _ => text.cyan().to_string(),
    }
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    Cow::Borrowed(prompt)
}
