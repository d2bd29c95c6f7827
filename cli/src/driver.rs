use std::fs;
use std::io::Write;
use std::path::Path;

use loxscan::errors::Diagnostics;
use loxscan::lexer::scan_tokens;
use owo_colors::OwoColorize;

use crate::render::{self, OutputOptions};

pub const EXIT_OK: i32 = 0;
/// Output could not be written.
pub const EXIT_FAILURE: i32 = 1;
/// Input was read but contained lexical errors.
pub const EXIT_DATA_ERR: i32 = 65;
/// Input file could not be read.
pub const EXIT_NO_INPUT: i32 = 66;

/// Load a file and scan it. Returns the process exit code.
pub fn run_file(
    path: &Path,
    options: OutputOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    match fs::read_to_string(path) {
        Ok(source) => run_source(&source, path, options, out, err),
        Err(e) => {
            let _ = writeln!(
                err,
                "{} could not read '{}': {e}",
                "error:".red().bold(),
                path.display().yellow()
            );
            EXIT_NO_INPUT
        }
    }
}

/// Scan `source`, print its tokens to `out` and its diagnostics to `err`.
/// Returns the process exit code.
pub fn run_source(
    source: &str,
    path: &Path,
    options: OutputOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan_tokens(source, &mut diagnostics);

    if let Err(e) = render::print_tokens(out, &tokens, options) {
        let _ = writeln!(err, "{} {e}", "error:".red().bold());
        return EXIT_FAILURE;
    }

    if !diagnostics.has_errors() {
        return EXIT_OK;
    }
    if let Err(e) = render::report_errors(err, source, path, diagnostics.into_errors()) {
        let _ = writeln!(err, "{} {e}", "error:".red().bold());
    }
    EXIT_DATA_ERR
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn run(source: &str) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_source(
            source,
            Path::new("<eval>"),
            OutputOptions::default(),
            &mut out,
            &mut err,
        );
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn clean_input_exits_zero() {
        let (code, out, err) = run("var x = 1;");
        assert_eq!(code, EXIT_OK);
        assert!(out.starts_with("VAR var null\n"), "{out}");
        assert!(out.ends_with("EOF  null\n"), "{out}");
        assert!(err.is_empty(), "{err}");
    }

    #[test]
    fn lexical_errors_exit_65_with_report_lines() {
        let (code, out, err) = run("a @ \"open");
        assert_eq!(code, EXIT_DATA_ERR);
        assert!(out.contains("IDENTIFIER a null"), "{out}");
        assert!(err.contains("[line 1] Error: Unexpected character '@'"), "{err}");
        assert!(err.contains("[line 1] Error: Unterminated string."), "{err}");
        assert_eq!(err.matches("[line").count(), 2, "{err}");
    }

    #[test]
    fn missing_file_exits_66() {
        let path = PathBuf::from("definitely/not/here.lox");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_file(&path, OutputOptions::default(), &mut out, &mut err);
        assert_eq!(code, EXIT_NO_INPUT);
        assert!(out.is_empty());
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("could not read"), "{err}");
    }
}
