use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::token::TokenType;

static KEYWORDS: Lazy<HashMap<&'static str, TokenType>> = Lazy::new(|| {
    HashMap::from([
        ("and", TokenType::And),
        ("class", TokenType::Class),
        ("else", TokenType::Else),
        ("false", TokenType::False),
        ("for", TokenType::For),
        ("fun", TokenType::Fun),
        ("if", TokenType::If),
        ("nil", TokenType::Nil),
        ("or", TokenType::Or),
        ("print", TokenType::Print),
        ("return", TokenType::Return),
        ("super", TokenType::Super),
        ("this", TokenType::This),
        ("true", TokenType::True),
        ("var", TokenType::Var),
        ("while", TokenType::While),
    ])
});

/// Look up a reserved word. Exact match only.
pub fn lookup(word: &str) -> Option<TokenType> {
    KEYWORDS.get(word).copied()
}

/// All reserved words, sorted.
pub fn keywords() -> Vec<&'static str> {
    let mut words: Vec<_> = KEYWORDS.keys().copied().collect();
    words.sort_unstable();
    words
}
