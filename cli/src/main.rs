use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;

mod driver;
mod render;
mod repl;
mod tracing_config;

use render::OutputOptions;

#[derive(Parser)]
#[command(name = "loxscan", about = "Tokenize Lox source code")]
struct Cli {
    /// Path to a .lox file to scan
    file: Option<PathBuf>,
    /// Scan inline Lox source
    #[arg(long, conflicts_with = "file")]
    eval: Option<String>,
    /// Print the token stream as JSON
    #[arg(long)]
    json: bool,
    /// Leave the EOF token out of the printed stream
    #[arg(long)]
    no_eof: bool,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() {
    tracing_config::init_tracing();
    let cli = Cli::parse();

    if cli.version {
        println!(
            "{} {}",
            "loxscan".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    let options = OutputOptions {
        json: cli.json,
        no_eof: cli.no_eof,
    };

    let code = match (cli.eval, cli.file) {
        (Some(code), _) => driver::run_source(
            &code,
            Path::new("<eval>"),
            options,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        ),
        (None, Some(file)) => driver::run_file(
            &file,
            options,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        ),
        (None, None) => {
            if let Err(e) = repl::run(options) {
                eprintln!("{} {e}", "repl error:".red().bold());
                process::exit(driver::EXIT_FAILURE);
            }
            return;
        }
    };

    if code != driver::EXIT_OK {
        process::exit(code);
    }
}
