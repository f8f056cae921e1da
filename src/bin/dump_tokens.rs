//! dump_tokens - scans a file and saves the token sequence
//!
//! The dump is a serialized snapshot for inspection, not a stable format.

use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use transpiler::{display_error, lexer::lexer::tokenize};

/// Scans a source file and writes its tokens to disk
#[derive(Parser, Debug)]
#[command(name = "dump_tokens")]
#[command(version, about, long_about = None)]
struct Args {
    /// The source file to scan
    input_file: PathBuf,

    /// Where to write the token dump
    #[arg(short, long, default_value = "tokens.bin")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let source = match fs::read_to_string(&args.input_file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("ERROR: cannot read input file {}: {}", args.input_file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, &args.input_file.to_string_lossy());
            return ExitCode::FAILURE;
        }
    };

    let bytes = match serde_json::to_vec(&tokens) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("ERROR: cannot serialize tokens: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = fs::write(&args.output, &bytes) {
        eprintln!("ERROR: cannot write output file {}: {}", args.output.display(), err);
        return ExitCode::FAILURE;
    }
    debug!(bytes = bytes.len(), output = %args.output.display(), "token dump written");

    for token in &tokens {
        println!("{}", token);
    }

    ExitCode::SUCCESS
}
