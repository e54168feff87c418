//! Expression parsing.
//!
//! Binary operators are resolved by precedence climbing over
//! [`BINARY_LOOKUP`]. Prefix operators bind tighter than any binary operator,
//! and postfix calls, subscripts and member accesses bind tightest of all,
//! chaining left to right.

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArrayExpr, BinaryExpr, CallExpr, ExprKind, MemberExpr, PrefixExpr, SubscriptExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, Token, TokenKind},
};

use super::{
    lookups::{BindingPower, BINARY_LOOKUP, NUD_LOOKUP, PREFIX_LOOKUP},
    parser::Parser,
};

/// Parses a full expression.
pub fn parse_expression(parser: &mut Parser) -> Result<Expr, Error> {
    parse_expr(parser, BindingPower::Default)
}

/// Parses an expression whose binary operators all bind at least as tightly as `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter()?;
    let mut left = parse_prefix_expr(parser)?;

    while let Some((operator, operator_bp)) =
        BINARY_LOOKUP.get(&parser.current_token_kind()).copied()
    {
        if operator_bp < bp {
            break;
        }

        parser.advance();
        let right = parse_expr(parser, operator_bp.right_operand())?;

        let position = left.position;
        left = Expr::new(
            ExprKind::Binary(BinaryExpr {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            }),
            position,
        );
    }

    parser.leave();
    Ok(left)
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(operator) = PREFIX_LOOKUP.get(&parser.current_token_kind()).copied() else {
        return parse_postfix_expr(parser);
    };

    parser.enter()?;
    let position = parser.advance().position;
    let rhs = parse_prefix_expr(parser)?;
    parser.leave();

    Ok(Expr::new(
        ExprKind::Prefix(PrefixExpr {
            operator,
            right_expr: Box::new(rhs),
        }),
        position,
    ))
}

pub fn parse_postfix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_atomic_expr(parser)?;

    loop {
        let position = expr.position;
        let kind = match parser.current_token_kind() {
            TokenKind::OpenParen => {
                parser.advance();
                let arguments = parse_expression_list(parser, TokenKind::CloseParen)?;
                parser.expect(TokenKind::CloseParen)?;

                ExprKind::Call(CallExpr {
                    callee: Box::new(expr),
                    arguments,
                })
            }
            TokenKind::OpenBracket => {
                parser.advance();
                let index = parse_expression(parser)?;
                parser.expect(TokenKind::CloseBracket)?;

                ExprKind::Subscript(SubscriptExpr {
                    object: Box::new(expr),
                    index: Box::new(index),
                })
            }
            TokenKind::Dot => {
                parser.advance();
                let member = parser.expect_identifier()?;

                ExprKind::Member(MemberExpr {
                    object: Box::new(expr),
                    member,
                })
            }
            _ => break,
        };

        expr = Expr::new(kind, position);
    }

    Ok(expr)
}

pub fn parse_atomic_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();
    let Some(handler) = NUD_LOOKUP.get(&token_kind) else {
        return Err(Error::new(
            ErrorImpl::ExpectedExpression {
                found: parser.current_token().describe(),
            },
            parser.get_position(),
        ));
    };

    handler(parser)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();

    let kind = match token.kind {
        TokenKind::Integer => match token.literal {
            Some(Literal::Integer(value)) => ExprKind::Integer(value),
            _ => ExprKind::Integer(parse_lexeme(&token)?),
        },
        TokenKind::Float => match token.literal {
            Some(Literal::Float(value)) => ExprKind::Float(value),
            _ => ExprKind::Float(parse_lexeme(&token)?),
        },
        TokenKind::String => match token.literal {
            Some(Literal::Text(value)) => ExprKind::String(value),
            _ => ExprKind::String(token.lexeme),
        },
        TokenKind::True => ExprKind::Boolean(true),
        TokenKind::False => ExprKind::Boolean(false),
        TokenKind::Null => ExprKind::Null,
        TokenKind::Identifier => ExprKind::Symbol(token.lexeme),
        _ => {
            return Err(Error::new(
                ErrorImpl::ExpectedExpression {
                    found: token.describe(),
                },
                token.position,
            ))
        }
    };

    Ok(Expr::new(kind, token.position))
}

/// Numeric tokens built without a literal value fall back to their lexeme.
fn parse_lexeme<T: std::str::FromStr>(token: &Token) -> Result<T, Error> {
    token.lexeme.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.lexeme.clone(),
            },
            token.position,
        )
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_array_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.expect(TokenKind::OpenBracket)?.position;
    let elements = parse_expression_list(parser, TokenKind::CloseBracket)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::new(ExprKind::Array(ArrayExpr { elements }), position))
}

/// Parses `expr (, expr)*`, or nothing when `close` follows immediately.
///
/// The closing token itself is left for the caller.
fn parse_expression_list(parser: &mut Parser, close: TokenKind) -> Result<Vec<Expr>, Error> {
    let mut expressions = vec![];

    if parser.check(&[close]) {
        return Ok(expressions);
    }

    loop {
        expressions.push(parse_expression(parser)?);

        if !parser.check(&[TokenKind::Comma]) {
            break;
        }
        parser.advance();
    }

    Ok(expressions)
}
