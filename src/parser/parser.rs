//! Parser implementation for building the Abstract Syntax Tree.
//!
//! The parser walks the token sequence with a single cursor and one token of
//! lookahead. Each grammar rule is a function in `stmt.rs` or `expr.rs` that
//! receives the parser by mutable reference, so recursion shares the cursor
//! without any global state. The first error aborts the parse.

use tracing::debug;

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Span, MK_TOKEN,
};

use super::{lookups::ScopeKind, stmt::parse_stmt};

/// How many blocks, groupings and argument lists may be open at once.
pub const MAX_NESTING: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always terminated by an `EOF` token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Blocks currently open, innermost last
    scopes: Vec<ScopeKind>,
    /// Open blocks, groupings and argument lists
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended when the sequence does not already end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or_else(crate::Position::null);
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), Span { start: end, end }));
        }

        Parser {
            tokens,
            pos: 0,
            scopes: vec![ScopeKind::Program],
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous one.
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.tokens[index].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Builds the error for the current token not matching `expected`.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();
        let error = if token.kind == TokenKind::EOF {
            ErrorImpl::UnexpectedEof {
                expected: String::from(expected),
            }
        } else {
            ErrorImpl::UnexpectedToken {
                expected: String::from(expected),
                found: token.describe(),
            }
        };

        Error::new(error, token.span.start)
    }

    /// Expects a token of the specified kind, naming it as `expected` in the error.
    pub fn expect_error(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected(expected));
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with the default description.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, &expected_kind.describe())
    }

    /// Returns true while the current token is not `EOF`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Opens one nesting level at the current token, failing past `MAX_NESTING`.
    pub fn nest(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_NESTING },
                self.current_token().span.start,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn unnest(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn enter_scope(&mut self, scope: ScopeKind) -> Result<(), Error> {
        self.nest()?;
        self.scopes.push(scope);
        Ok(())
    }

    pub fn exit_scope(&mut self) {
        self.scopes.pop();
        self.unnest();
    }

    /// Whether any enclosing block is a function body.
    pub fn in_function(&self) -> bool {
        self.scopes.contains(&ScopeKind::Function)
    }
}

/// Parses a token sequence into a `Program`.
///
/// This is the main entry point for parsing: statements are read until `EOF`.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);
    let mut body = vec![];

    while parser.has_tokens() {
        parse_stmt(&mut parser, &mut body)?;
    }

    debug!(statements = body.len(), "parsed program");
    Ok(Program { body })
}
