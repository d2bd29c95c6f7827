use loxscan::lexer::classify::is_ident_continue;
use loxscan::lexer::keywords;
use rustyline::completion::Pair;

/// Complete the word under the cursor against the reserved words.
pub fn complete_line(line: &str, pos: usize) -> (usize, Vec<Pair>) {
    let safe_pos = pos.min(line.len());
    let prefix = line.get(..safe_pos).unwrap_or(line);

    let start = word_start(prefix);
    let needle = &prefix[start..];
    if needle.is_empty() {
        return (start, Vec::new());
    }

    let words = keywords::keywords()
        .into_iter()
        .filter(|kw| kw.starts_with(needle))
        .map(|kw| Pair {
            display: kw.to_string(),
            replacement: kw.to_string(),
        })
        .collect();

    (start, words)
}

fn word_start(prefix: &str) -> usize {
    prefix
        .char_indices()
        .rev()
        .find(|(_, ch)| !is_ident_continue(*ch))
        .map_or(0, |(idx, ch)| idx + ch.len_utf8())
}
