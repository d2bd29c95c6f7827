use super::token::TokenType;

/// What the first character of a lexeme commits the scanner to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Complete single-character token, no lookahead needed.
    Punctuation(TokenType),
    /// `/`: either a line comment or SLASH.
    Slash,
    /// `! = < >`: the bare kind, or `with_equal` when followed by `=`.
    Comparison {
        bare: TokenType,
        with_equal: TokenType,
    },
    Whitespace,
    Newline,
    StringStart,
    DigitStart,
    IdentStart,
    Unexpected(char),
}

pub fn classify(c: char) -> CharClass {
    match c {
        ';' => CharClass::Punctuation(TokenType::Semicolon),
        '(' => CharClass::Punctuation(TokenType::LeftParen),
        ')' => CharClass::Punctuation(TokenType::RightParen),
        '{' => CharClass::Punctuation(TokenType::LeftBrace),
        '}' => CharClass::Punctuation(TokenType::RightBrace),
        ',' => CharClass::Punctuation(TokenType::Comma),
        '.' => CharClass::Punctuation(TokenType::Dot),
        '+' => CharClass::Punctuation(TokenType::Plus),
        '-' => CharClass::Punctuation(TokenType::Minus),
        '*' => CharClass::Punctuation(TokenType::Star),
        '/' => CharClass::Slash,
        '!' => CharClass::Comparison {
            bare: TokenType::Bang,
            with_equal: TokenType::BangEqual,
        },
        '=' => CharClass::Comparison {
            bare: TokenType::Equal,
            with_equal: TokenType::EqualEqual,
        },
        '<' => CharClass::Comparison {
            bare: TokenType::Less,
            with_equal: TokenType::LessEqual,
        },
        '>' => CharClass::Comparison {
            bare: TokenType::Greater,
            with_equal: TokenType::GreaterEqual,
        },
        ' ' | '\r' | '\t' => CharClass::Whitespace,
        '\n' => CharClass::Newline,
        '"' => CharClass::StringStart,
        c if c.is_ascii_digit() => CharClass::DigitStart,
        c if is_ident_start(c) => CharClass::IdentStart,
        c => CharClass::Unexpected(c),
    }
}

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
