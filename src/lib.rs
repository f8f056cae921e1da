#![allow(clippy::module_inception)]

use serde::Serialize;
use tracing::debug;

use crate::{
    emitter::emitter::{emit_with, EmitterConfig},
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod emitter;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the source text. `offset` is a byte offset, `line` and
/// `column` are 1-based (columns count characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }

    pub fn null() -> Self {
        Position::new(0, 1, 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runs the whole pipeline: scan, parse, emit.
pub fn transpile(source: &str) -> Result<String, Error> {
    transpile_with(source, &EmitterConfig::default())
}

pub fn transpile_with(source: &str, config: &EmitterConfig) -> Result<String, Error> {
    let tokens = tokenize(source)?;
    let program = parse(tokens)?;
    let output = emit_with(&program, config);

    debug!(bytes = output.len(), "transpiled source");
    Ok(output)
}

/// Returns the line number, the text of the line (without its newline) and
/// the byte offset into that line for `position`.
///
/// Offsets past the end of the source resolve to the end of the last line.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let pos = position.min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let text = line.trim_end_matches(['\n', '\r']);
            return (line_number, text.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // Position sits at the very end of the input
    match source.rsplit_once('\n') {
        Some((_, last)) if !last.is_empty() => {
            (line_number - 1, last.to_string(), last.len())
        }
        Some(_) => (line_number, String::new(), 0),
        None => (1, source.to_string(), source.len()),
    }
}

/// Renders an error as a short report with a code frame:
///
/// ```text
/// SyntaxError: syntax error at line 2, column 13: ...
/// -> input.txt
///   |
/// 2 | mientras (a { }
///   | ------------^
/// ```
///
/// Lexical errors already carry the offending line and caret in their
/// message, so they get no second frame.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    let position = error.get_position();
    let framed = error.get_kind().has_source_frame();

    let mut report = String::new();
    report.push_str(&format!("{}: {}", Error::CLASS_NAME, error));
    if !framed {
        report.push('\n');
    }
    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        report.push_str(&format!("   ({})\n", tip));
    }
    report.push_str(&format!("-> {}\n", file));

    if framed {
        return report;
    }

    let (_, line_text, _) = get_line_at_position(source, position.offset);
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    report.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    report.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);
    report.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    report
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", format_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
