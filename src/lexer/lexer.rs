use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    get_line_at_position, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the length in bytes of the text the pattern matched at the cursor.
pub type RegexHandler = fn(&mut Lexer, usize);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})", pattern)).expect("token patterns are valid regexes")
}

lazy_static! {
    /// Token patterns in priority order. The first pattern that matches at the
    /// cursor wins, so reserved words must stay ahead of identifiers and
    /// comments ahead of the `/` operator.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: anchored(r"//[^\n]*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Comment) },
        RegexPattern { regex: anchored(r"(?s)/\*.*?\*/"), handler: MK_DEFAULT_HANDLER!(TokenKind::BlockComment) },
        RegexPattern { regex: anchored(r"(?:sino|si|fin_si|mientras|fin_mientras|para|funcion|fin_funcion|retornar)\b"), handler: reserved_handler },
        RegexPattern { regex: anchored(r"(?:entero|flotante|texto|booleano)\b"), handler: MK_DEFAULT_HANDLER!(TokenKind::DataType) },
        RegexPattern { regex: anchored(r"(?:verdadero|falso)\b"), handler: MK_DEFAULT_HANDLER!(TokenKind::Boolean) },
        RegexPattern { regex: anchored(r"[0-9]+\.[0-9]+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Float) },
        RegexPattern { regex: anchored(r"[0-9]+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Integer) },
        RegexPattern { regex: anchored(r#""[^"\n]*""#), handler: MK_DEFAULT_HANDLER!(TokenKind::String) },
        RegexPattern { regex: anchored("=="), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { regex: anchored("!="), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
        RegexPattern { regex: anchored("<="), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals) },
        RegexPattern { regex: anchored(">="), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals) },
        RegexPattern { regex: anchored("<"), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        RegexPattern { regex: anchored(">"), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        RegexPattern { regex: anchored("="), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: anchored(r"\+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: anchored("-"), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { regex: anchored(r"\*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        RegexPattern { regex: anchored("/"), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: anchored(r"\("), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: anchored(r"\)"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: anchored(r"\{"), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: anchored(r"\}"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
        RegexPattern { regex: anchored(","), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: anchored(";"), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: anchored(r"\s+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Whitespace) },
        RegexPattern { regex: anchored("[a-zA-Z][a-zA-Z0-9_]*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Identifier) },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: usize,
    column: usize,
    keep_trivia: bool,
}

impl Lexer {
    pub fn new(source: &str, keep_trivia: bool) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
            line: 1,
            column: 1,
            keep_trivia,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.pos, self.line, self.column)
    }

    /// The next `len` bytes of input.
    pub fn peek_text(&self, len: usize) -> &str {
        &self.source[self.pos..self.pos + len]
    }

    /// Moves the cursor `len` bytes forward, keeping line and column in step.
    pub fn advance_n(&mut self, len: usize) {
        for c in self.source[self.pos..self.pos + len].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += len;
    }

    /// Records the next `len` bytes as a token of `kind` and consumes them.
    /// Whitespace and comments are consumed but only kept when scanning with trivia.
    pub fn push_match(&mut self, kind: TokenKind, len: usize) {
        let start = self.position();
        let value = self.peek_text(len).to_string();
        self.advance_n(len);

        if self.keep_trivia || !kind.is_trivia() {
            let span = Span {
                start,
                end: self.position(),
            };
            trace!(%kind, value = value.as_str(), line = start.line, column = start.column, "token");
            self.push(MK_TOKEN!(kind, value, span));
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// A `/*` with no closing `*/` anywhere after it.
    fn at_unterminated_comment(&self) -> bool {
        let rest = self.remainder();
        rest.starts_with("/*") && !rest[2..].contains("*/")
    }

    fn unterminated_comment(&self) -> Error {
        let (_, source_line, _) = get_line_at_position(&self.source, self.pos);

        Error::new(
            ErrorImpl::UnterminatedComment {
                source_line,
                column: self.column,
            },
            self.position(),
        )
    }

    fn unrecognised(&self) -> Error {
        let (_, source_line, _) = get_line_at_position(&self.source, self.pos);

        Error::new(
            ErrorImpl::UnrecognisedToken {
                token: self.at(),
                source_line,
                column: self.column,
            },
            self.position(),
        )
    }
}

fn reserved_handler(lexer: &mut Lexer, len: usize) {
    let kind = RESERVED_LOOKUP
        .get(lexer.peek_text(len))
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push_match(kind, len);
}

fn scan(source: &str, keep_trivia: bool) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, keep_trivia);

    while !lex.at_eof() {
        if lex.at_unterminated_comment() {
            return Err(lex.unterminated_comment());
        }

        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .filter(|found| !found.is_empty())
                .map(|found| (pattern.handler, found.end()))
        });

        match matched {
            Some((handler, len)) => handler(&mut lex, len),
            None => return Err(lex.unrecognised()),
        }
    }

    let end = lex.position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), Span { start: end, end }));

    debug!(tokens = lex.tokens.len(), "scanned source");
    Ok(lex.tokens)
}

/// Converts source text into the token sequence consumed by the parser.
///
/// Whitespace and comments are dropped. The sequence always ends with an
/// `EOF` token positioned at the end of the input.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    scan(source, false)
}

/// Like [`tokenize`] but keeps whitespace and comment tokens, so that the
/// lexemes concatenate back to the original source.
pub fn tokenize_with_trivia(source: &str) -> Result<Vec<Token>, Error> {
    scan(source, true)
}
