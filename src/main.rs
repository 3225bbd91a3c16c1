use std::path::PathBuf;

use clap::Parser;
use clite_lexer::{
    errors::errors::{Error, ErrorTip},
    init_tracing, TokenStream,
};

/// Print the token stream of a Clite source file.
#[derive(Parser, Debug)]
#[command(name = "clite-lex", version)]
struct Cli {
    /// Source file to scan
    #[arg(default_value = "lexertest.c")]
    file: PathBuf,
}

fn main() {
    init_tracing();

    // More than one positional argument is rejected here, before any scanning.
    let cli = Cli::parse();
    tracing::debug!(file = %cli.file.display(), "scanning");

    let mut stream = TokenStream::open(&cli.file);
    for token in stream.by_ref() {
        println!("{}", token);
    }

    if let Some(error) = stream.open_error() {
        display_error(error);
    }
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", error.get_path().display());
}
