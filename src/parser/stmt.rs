use tracing::trace;

use crate::{
    ast::{
        expressions::{Expr, FunctionCall},
        statements::{
            Assignment, Conditional, ConditionalElse, Declaration, FunctionDeclaration, Parameter,
            Return, Stmt, WhileLoop,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_call_args, parse_expr},
    lookups::{classify_stmt, ScopeKind, StmtKind},
    parser::Parser,
};

/// Parses the statement starting at the current token and appends it to `body`.
///
/// A conditional followed by `sino` appends two statements: the `Conditional`
/// and, right after it, its `ConditionalElse`.
pub fn parse_stmt(parser: &mut Parser, body: &mut Vec<Stmt>) -> Result<(), Error> {
    let kind = classify_stmt(parser.current_token_kind());
    trace!(?kind, line = parser.current_token().line(), "statement");

    match kind {
        StmtKind::Declaration => body.push(parse_declaration_stmt(parser)?),
        StmtKind::Identifier => body.push(parse_identifier_stmt(parser)?),
        StmtKind::Conditional => parse_conditional_stmt(parser, body)?,
        StmtKind::WhileLoop => body.push(parse_while_stmt(parser)?),
        StmtKind::FunctionDeclaration => body.push(parse_fn_decl_stmt(parser)?),
        StmtKind::Return => body.push(parse_return_stmt(parser)?),
        StmtKind::Empty => {
            parser.advance();
        }
        StmtKind::Else => {
            return Err(Error::new(
                ErrorImpl::UnexpectedElse,
                parser.current_token().span.start,
            ))
        }
        StmtKind::Invalid => {
            return Err(Error::new(
                ErrorImpl::ExpectedStatement {
                    found: parser.current_token().describe(),
                },
                parser.current_token().span.start,
            ))
        }
    }

    Ok(())
}

/// Parses `'{' Statement* '}'` as a block of the given kind.
pub fn parse_block(parser: &mut Parser, scope: ScopeKind) -> Result<Vec<Stmt>, Error> {
    parser.enter_scope(scope)?;
    parser.expect(TokenKind::OpenCurly)?;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(parser.unexpected("`}`"));
        }
        parse_stmt(parser, &mut statements)?;
    }

    parser.exit_scope();
    parser.expect(TokenKind::CloseCurly)?;

    Ok(statements)
}

pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let data_type = parser.advance().value.clone();

    let identifier = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Declaration(Declaration {
        data_type,
        identifier,
        value,
    }))
}

/// `IDENT '=' ...` or `IDENT '(' ...`, told apart by the token after the identifier.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let identifier = parser.advance().value.clone();

    match parser.current_token_kind() {
        TokenKind::Assignment => parse_assignment_stmt(parser, identifier),
        TokenKind::OpenParen => parse_call_stmt(parser, identifier),
        _ => Err(parser.unexpected("`=` or `(`")),
    }
}

pub fn parse_assignment_stmt(parser: &mut Parser, identifier: String) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Assignment(Assignment { identifier, value }))
}

pub fn parse_call_stmt(parser: &mut Parser, identifier: String) -> Result<Stmt, Error> {
    let arguments = parse_call_args(parser)?;

    // The semicolon after a call is optional
    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Stmt::FunctionCall(FunctionCall {
        identifier,
        arguments,
    }))
}

/// Parses `'(' Expression ')'` as used by `si` and `mientras`.
fn parse_guard(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(condition)
}

pub fn parse_conditional_stmt(parser: &mut Parser, body: &mut Vec<Stmt>) -> Result<(), Error> {
    parser.advance();

    let condition = parse_guard(parser)?;
    let then_body = parse_block(parser, ScopeKind::Conditional)?;
    body.push(Stmt::Conditional(Conditional {
        condition,
        body: then_body,
    }));

    if parser.current_token_kind() == TokenKind::Sino {
        parser.advance();
        let else_body = parse_block(parser, ScopeKind::Conditional)?;
        body.push(Stmt::ConditionalElse(ConditionalElse { body: else_body }));
    }

    Ok(())
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let condition = parse_guard(parser)?;
    let body = parse_block(parser, ScopeKind::Loop)?;

    Ok(Stmt::WhileLoop(WhileLoop { condition, body }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let identifier = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let data_type = parser.expect(TokenKind::DataType)?.value;
            let name = parser.expect(TokenKind::Identifier)?.value;
            parameters.push(Parameter { data_type, name });

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect_error(TokenKind::CloseParen, "`,` or `)`")?;

    let body = parse_block(parser, ScopeKind::Function)?;

    Ok(Stmt::FunctionDeclaration(FunctionDeclaration {
        identifier,
        parameters,
        body,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if !parser.in_function() {
        return Err(Error::new(
            ErrorImpl::ReturnOutsideFunction,
            parser.current_token().span.start,
        ));
    }
    parser.advance();

    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(Return { value }))
}
