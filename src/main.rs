//! BookBot - CLI
//!
//! Prints word count and letter frequency for a book.

use anyhow::{Context, Result};
use bookbot::{
    books::load_text,
    commands::analyze,
    output::{FOOTER, failure_lines, header_lines},
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "bookbot",
    about = "Report word count and letter frequency for a book",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Path to the book text file; any single argument is taken as the path
    #[arg(allow_hyphen_values = true)]
    path_to_book: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            log::debug!("invalid arguments: {:?}", err.kind());
            println!("Usage: {} <path_to_book>", program_name());
            return ExitCode::FAILURE;
        }
    };

    match run_analyze_command(&cli.path_to_book) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Print the report for one book
///
/// The header is printed before the book is read. On a read failure the
/// statistics sections are replaced by the error lines.
fn run_analyze_command(path: &Path) -> Result<()> {
    print_lines(&header_lines(path));

    let document = match load_text(path) {
        Ok(document) => document,
        Err(err) => {
            print_lines(&failure_lines(&err));
            println!("{FOOTER}");
            return Err(err).with_context(|| format!("could not analyze {}", path.display()));
        }
    };

    let stats = analyze(&document);
    print_lines(&stats.stats_lines());
    println!("{FOOTER}");
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

/// Name the binary was invoked as, for the usage line
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map_or_else(
            || "bookbot".to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}
