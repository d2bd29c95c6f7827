/// Character-level reader over the source string.
///
/// Tracks where the current lexeme started, where reading is, and the line
/// the reader is on. Offsets are byte offsets that always sit on a `char`
/// boundary.
pub struct Cursor<'src> {
    source: &'src str,
    start: usize,
    current: usize,
    line: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Current byte position in the source.
    pub fn pos(&self) -> usize {
        self.current
    }

    /// Byte position where the current lexeme begins.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Mark the current position as the start of a new lexeme.
    pub fn begin_lexeme(&mut self) {
        self.start = self.current;
    }

    pub fn newline(&mut self) {
        self.line += 1;
    }

    /// Whether the cursor has consumed all input.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Peek at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.source.get(self.current..)?.chars().next()
    }

    /// Peek at the character after the current one.
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.source.get(self.current..)?.chars();
        chars.next()?;
        chars.next()
    }

    /// Advance one character and return it.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    /// Advance if the current character matches `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Text of the current lexeme, from `start` to the current position.
    pub fn lexeme(&self) -> &'src str {
        self.slice(self.start, self.current)
    }

    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        self.source.get(start..end).unwrap_or_default()
    }
}
