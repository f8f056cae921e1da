use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The single error type raised by the scanner and the parser.
///
/// It pairs the cause with the position it was detected at. There is no
/// separate lexical error type: callers only see a `SyntaxError`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "syntax error at line {}, column {}: {}",
    .position.line,
    .position.column,
    .internal_error
)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub const CLASS_NAME: &'static str = "SyntaxError";

    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> usize {
        self.position.line
    }

    pub fn get_column(&self) -> usize {
        self.position.column
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The cause alone, without the location prefix.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedComment { .. } => "UnterminatedComment",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEof { .. } => "UnexpectedEof",
            ErrorImpl::ExpectedStatement { .. } => "ExpectedStatement",
            ErrorImpl::ReturnOutsideFunction => "ReturnOutsideFunction",
            ErrorImpl::UnexpectedElse => "UnexpectedElse",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedComment { .. } => {
                ErrorTip::Suggestion(String::from("close the comment with `*/`"))
            }
            ErrorImpl::UnexpectedToken { expected, .. } if expected == "`;`" => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::UnexpectedToken { expected, .. } if expected == "`)`" => {
                ErrorTip::Suggestion(String::from("did you forget to close a parenthesis?"))
            }
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedEof { .. } => {
                ErrorTip::Suggestion(String::from("is a closing `}` missing?"))
            }
            ErrorImpl::ExpectedStatement { .. } => ErrorTip::None,
            ErrorImpl::ReturnOutsideFunction => ErrorTip::Suggestion(String::from(
                "move the `retornar` into the body of a `funcion`",
            )),
            ErrorImpl::UnexpectedElse => ErrorTip::Suggestion(String::from(
                "a `sino` block must directly follow a `si` block",
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the code into smaller functions",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character {token:?}{}", render_caret(.source_line, .column))]
    UnrecognisedToken {
        token: char,
        source_line: String,
        column: usize,
    },
    #[error("unterminated block comment{}", render_caret(.source_line, .column))]
    UnterminatedComment { source_line: String, column: usize },
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: String },
    #[error("expected a declaration, assignment, call, loop, conditional or function declaration, found {found}")]
    ExpectedStatement { found: String },
    #[error("`retornar` outside of a function body")]
    ReturnOutsideFunction,
    #[error("`sino` without a preceding `si` block")]
    UnexpectedElse,
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl ErrorImpl {
    /// Lexical causes render the offending line and caret in their own message.
    pub fn has_source_frame(&self) -> bool {
        matches!(
            self,
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::UnterminatedComment { .. }
        )
    }
}

/// Echoes the offending line with a caret under `column` (1-based).
fn render_caret(source_line: &str, column: &usize) -> String {
    let padding: String = source_line
        .chars()
        .take(column.saturating_sub(1))
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    format!("\n\n\t{}\n\t{}^\n", source_line, padding)
}
