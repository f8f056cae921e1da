//! transpiler - translates a source program into Python
//!
//! Usage:
//!   transpiler <INPUT>                 Write the translation to salida.py
//!   transpiler <INPUT> -o <OUTPUT>     Write the translation to OUTPUT
//!   transpiler <INPUT> -d              Also print tokens and the tree

use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use transpiler::{
    display_error,
    emitter::emitter::{emit_with, EmitterConfig},
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

const DEFAULT_OUTPUT: &str = "salida.py";

/// Translates a source program into Python
#[derive(Parser, Debug)]
#[command(name = "transpiler")]
#[command(version, about, long_about = None)]
struct Args {
    /// The source file to translate
    input_file: PathBuf,

    /// Where to write the translation
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print the tokens and the tree while translating
    #[arg(short, long)]
    debug: bool,

    /// Only keep the parentheses written in the source
    #[arg(long)]
    source_parens: bool,
}

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn transpile(source: &str, args: &Args) -> Result<String, Error> {
    let start = Instant::now();

    let tokens = tokenize(source)?;
    if args.debug {
        println!("Tokens:");
        for token in &tokens {
            println!("{}", token);
        }
    }
    debug!(elapsed = ?start.elapsed(), "tokenized");

    let program = parse(tokens)?;
    if args.debug {
        println!("Tree:\n{:#?}", program);
    }
    debug!(elapsed = ?start.elapsed(), "parsed");

    let config = EmitterConfig {
        source_parens_only: args.source_parens,
        ..EmitterConfig::default()
    };
    Ok(emit_with(&program, &config))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    let source = match fs::read_to_string(&args.input_file) {
        Ok(source) => source,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            eprintln!("ERROR: input file not found: {}", args.input_file.display());
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("ERROR: cannot read input file {}: {}", args.input_file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let output = match transpile(&source, &args) {
        Ok(output) => output,
        Err(error) => {
            display_error(&error, &source, &args.input_file.to_string_lossy());
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = fs::write(&args.output, output) {
        eprintln!("ERROR: cannot write output file {}: {}", args.output.display(), err);
        return ExitCode::FAILURE;
    }

    info!(output = %args.output.display(), "translation written");
    ExitCode::SUCCESS
}
