use crate::{
    ast::expressions::{BinaryExpr, Expr, FunctionCall},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// `Expression := Factor ((OP|CMP) Factor)*`
///
/// There is a single precedence level: each operator folds the expression
/// parsed so far into the left operand of a new node, giving a left-deep tree.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_factor(parser)?;

    while parser.current_token_kind().is_binary_operator() {
        let operator = parser.advance().value.clone();
        let right = parse_factor(parser)?;

        left = Expr::Binary(BinaryExpr::new(operator, left, right));
    }

    Ok(left)
}

pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => {
            let identifier = parser.advance().value.clone();

            if parser.current_token_kind() == TokenKind::OpenParen {
                let arguments = parse_call_args(parser)?;
                Ok(Expr::Call(FunctionCall {
                    identifier,
                    arguments,
                }))
            } else {
                Ok(Expr::Identifier(identifier))
            }
        }
        TokenKind::Integer => Ok(Expr::Integer(parser.advance().value.clone())),
        TokenKind::Float => Ok(Expr::Float(parser.advance().value.clone())),
        TokenKind::String => Ok(Expr::String(parser.advance().value.clone())),
        TokenKind::Boolean => Ok(Expr::Boolean(parser.advance().value.clone())),
        TokenKind::OpenParen => parse_grouping_expr(parser),
        _ => Err(parser.unexpected("an expression")),
    }
}

/// `'(' Expression ')'`. Only the outermost node of the group is flagged.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nest()?;
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.unnest();

    Ok(match expr {
        Expr::Binary(binary) => Expr::Binary(BinaryExpr {
            parenthesized: true,
            ..binary
        }),
        other => other,
    })
}

/// `'(' (Expression (',' Expression)*)? ')'`. Commas are skipped.
pub fn parse_call_args(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.nest()?;
    parser.expect(TokenKind::OpenParen)?;

    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        args.push(parse_expr(parser)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            args.push(parse_expr(parser)?);
        }
    }

    parser.expect_error(TokenKind::CloseParen, "`,` or `)`")?;
    parser.unnest();

    Ok(args)
}
