#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    pub line: usize,
    pub col: usize,
}

/// Line start offsets of a source string, for turning spans into positions.
#[derive(Debug, Clone)]
pub struct SourceMap<'src> {
    source: &'src str,
    line_offsets: Vec<usize>,
}

impl<'src> SourceMap<'src> {
    pub fn from_source(source: &'src str) -> Self {
        let mut line_offsets = vec![0];
        for (idx, ch) in source.char_indices() {
            if ch == '\n' {
                line_offsets.push(idx + 1);
            }
        }
        Self {
            source,
            line_offsets,
        }
    }

    /// 1-based line and column (in chars) of a byte offset.
    pub fn byte_to_pos(&self, byte: usize) -> SourcePos {
        let line_idx = match self.line_offsets.binary_search(&byte) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_offsets.get(line_idx).copied().unwrap_or(0);
        let col = self
            .source
            .get(line_start..byte.min(self.source.len()))
            .map_or(0, |prefix| prefix.chars().count());
        SourcePos {
            line: line_idx + 1,
            col: col + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_offsets_to_lines_and_columns() {
        let map = SourceMap::from_source("var a;\nprint a;\n");
        assert_eq!(map.byte_to_pos(0), SourcePos { line: 1, col: 1 });
        assert_eq!(map.byte_to_pos(4), SourcePos { line: 1, col: 5 });
        assert_eq!(map.byte_to_pos(7), SourcePos { line: 2, col: 1 });
        assert_eq!(map.byte_to_pos(13), SourcePos { line: 2, col: 7 });
    }

    #[test]
    fn columns_count_chars_not_bytes() {
        let map = SourceMap::from_source("\"é\" @");
        assert_eq!(map.byte_to_pos(5), SourcePos { line: 1, col: 5 });
    }
}
