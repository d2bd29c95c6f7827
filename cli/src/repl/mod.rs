mod completer;
mod helper;
mod highlighter;

use std::io;

use loxscan::diagnostics::source_map::SourceMap;
use loxscan::errors::{Diagnostics, LexError};
use loxscan::lexer::scan_tokens;
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;
use crate::render::{self, OutputOptions};

pub fn run(options: OutputOptions) -> Result<(), ReadlineError> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ReplHelper));

    println!(
        "{} {}",
        "loxscan".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == ".exit" || trimmed == "exit" {
                    break;
                }
                if trimmed == ".help" {
                    print_help();
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);
                scan_snippet(&line, options);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn print_help() {
    println!("{}", ".help                show commands".bright_blue());
    println!("{}", ".exit                exit REPL".bright_blue());
    println!(
        "{}",
        "anything else        print its tokens".bright_blue()
    );
}

fn scan_snippet(source: &str, options: OutputOptions) {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan_tokens(source, &mut diagnostics);
    if let Err(err) = render::print_tokens(&mut io::stdout().lock(), &tokens, options) {
        eprintln!("{} {err}", "error:".red().bold());
    }

    let map = SourceMap::from_source(source);
    for err in diagnostics.errors() {
        eprintln!("{}", render::format_lex_error(&map, err));
    }
}

/// An unterminated string means the user is still typing it.
pub fn needs_more_input(source: &str) -> bool {
    let mut diagnostics = Diagnostics::new();
    scan_tokens(source, &mut diagnostics);
    diagnostics
        .errors()
        .iter()
        .any(|err| matches!(err, LexError::UnterminatedString { .. }))
}
