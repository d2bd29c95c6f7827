use std::io::{self, Write};
use std::path::Path;

use loxscan::diagnostics::source_map::SourceMap;
use loxscan::errors::LexError;
use loxscan::lexer::token::Token;
use miette::{NamedSource, Report};
use owo_colors::OwoColorize;

/// How token streams are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
    pub no_eof: bool,
}

pub fn print_tokens(
    out: &mut impl Write,
    tokens: &[Token],
    options: OutputOptions,
) -> io::Result<()> {
    let shown: Vec<&Token> = tokens
        .iter()
        .filter(|token| !(options.no_eof && token.is_eof()))
        .collect();

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &shown)?;
        writeln!(out)?;
    } else {
        for token in shown {
            writeln!(out, "{token}")?;
        }
    }
    out.flush()
}

/// One-line form used by the REPL: `[line N:C] Error: message`.
pub fn format_lex_error(map: &SourceMap<'_>, err: &LexError) -> String {
    let pos = map.byte_to_pos(err.span().offset());
    format!(
        "{} {}: {}",
        format!("[line {}:{}]", err.line(), pos.col).bright_black(),
        "Error".red().bold(),
        err.to_string().bright_white()
    )
}

/// Lox's classic report line: `[line N] Error: message`.
pub fn format_report_line(err: &LexError) -> String {
    format!("[line {}] Error: {}", err.line(), err)
}

/// Render every error against the file it came from: the report line,
/// then the miette snippet.
pub fn report_errors(
    out: &mut impl Write,
    source: &str,
    path: &Path,
    errors: Vec<LexError>,
) -> io::Result<()> {
    let name = path.display().to_string();
    for err in errors {
        writeln!(out, "{}", format_report_line(&err))?;
        let report =
            Report::new(err).with_source_code(NamedSource::new(&name, source.to_owned()));
        writeln!(out, "{report:?}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use loxscan::lexer::token::Span;

    use super::*;

    #[test]
    fn report_line_uses_lox_layout() {
        let err = LexError::unexpected_character('@', 3, Span::new(7, 8));
        assert_eq!(format_report_line(&err), "[line 3] Error: Unexpected character '@'");
    }

    #[test]
    fn no_eof_hides_only_the_eof_token() {
        let tokens = loxscan::lex("x").unwrap();
        let mut out = Vec::new();
        print_tokens(&mut out, &tokens, OutputOptions { json: false, no_eof: true }).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "IDENTIFIER x null\n");
    }

    #[test]
    fn json_output_lists_kinds() {
        let tokens = loxscan::lex("1").unwrap();
        let mut out = Vec::new();
        print_tokens(&mut out, &tokens, OutputOptions { json: true, no_eof: false }).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["kind"], "NUMBER");
        assert_eq!(value[0]["literal"], 1.0);
        assert_eq!(value[1]["kind"], "EOF");
    }
}
