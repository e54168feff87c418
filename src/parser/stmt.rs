use crate::{
    ast::{
        ast::Stmt,
        statements::{
            AssignmentStmt, BlockStmt, ClassDeclStmt, ConditionalBranch, FnDeclStmt, ForStmt,
            IfStmt, ImportStmt, Parameter, ReturnStmt, StmtKind, VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expression,
    lookups::{ASSIGNMENT_LOOKUP, STMT_LOOKUP},
    parser::Parser,
    types::parse_type,
};

/// Parses one statement, dispatching on its leading token.
///
/// Anything without a statement keyword is an expression, which becomes an
/// assignment target when an assignment operator follows it.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.discard_newlines();

    if let Some(handler) = STMT_LOOKUP.get(&parser.current_token_kind()) {
        return handler(parser);
    }

    let position = parser.get_position();
    let expr = parse_expression(parser)?;

    let kind = match ASSIGNMENT_LOOKUP.get(&parser.current_token_kind()).copied() {
        Some(operator) => {
            parser.advance();
            let value = parse_expression(parser)?;

            StmtKind::Assignment(AssignmentStmt {
                assignee: expr,
                operator,
                value,
            })
        }
        None => StmtKind::Expression(expr),
    };

    parser.discard_newlines();
    Ok(Stmt::new(kind, position))
}

/// Parses the `: BLOCK` that ends every compound statement header.
fn parse_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.expect(TokenKind::Colon)?;
    parser.discard_newlines();
    parse_block_stmt(parser)
}

/// Parses either `{ STMT* }` or `INDENT STMT* DEDENT`.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.enter()?;
    let position = parser.get_position();
    let mut body = Vec::new();

    if parser.check(&[TokenKind::OpenCurly]) {
        parser.advance();
        parser.discard_newlines();

        while !parser.check(&[TokenKind::CloseCurly, TokenKind::EOF]) {
            body.push(parse_stmt(parser)?);
            parser.discard_newlines();
        }

        parser.expect(TokenKind::CloseCurly)?;
        parser.discard_newlines();
    } else {
        parser.expect(TokenKind::Indent)?;

        while !parser.check(&[TokenKind::Dedent, TokenKind::EOF]) {
            body.push(parse_stmt(parser)?);
            parser.discard_newlines();
        }

        // Lenient mode closes a block left open at end of input
        if parser.check(&[TokenKind::Dedent]) || parser.config().is_strict() {
            parser.expect(TokenKind::Dedent)?;
        }
    }

    parser.leave();
    Ok(BlockStmt { body, position })
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Def)?.position;
    let identifier = parser.expect_identifier()?;

    parser.expect(TokenKind::OpenParen)?;
    let parameters = parse_parameters(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.check(&[TokenKind::Arrow]) {
        parser.advance();
        Some(parse_type(parser)?)
    } else {
        None
    };

    let body = parse_body(parser)?;

    Ok(Stmt::new(
        StmtKind::FnDecl(FnDeclStmt {
            identifier,
            parameters,
            return_type,
            body,
        }),
        start,
    ))
}

/// `NAME [: TYPE] [= EXPR]`, comma separated. Defaulted parameters may
/// appear anywhere in the list.
fn parse_parameters(parser: &mut Parser) -> Result<Vec<Parameter>, Error> {
    let mut parameters = Vec::new();

    if parser.check(&[TokenKind::CloseParen]) {
        return Ok(parameters);
    }

    loop {
        let position = parser.get_position();
        let name = parser.expect_identifier()?;

        let explicit_type = if parser.check(&[TokenKind::Colon]) {
            parser.advance();
            Some(parse_type(parser)?)
        } else {
            None
        };

        let default_value = if parser.check(&[TokenKind::Assignment]) {
            parser.advance();
            Some(parse_expression(parser)?)
        } else {
            None
        };

        parameters.push(Parameter {
            name,
            explicit_type,
            default_value,
            position,
        });

        if !parser.check(&[TokenKind::Comma]) {
            break;
        }
        parser.advance();
    }

    Ok(parameters)
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();
    let is_constant = start_token.kind == TokenKind::Const;

    let identifier = parser.expect_identifier()?;

    let explicit_type = if parser.check(&[TokenKind::Colon]) {
        parser.advance();
        Some(parse_type(parser)?)
    } else {
        None
    };

    // `const` without a value is left for a later semantic pass to reject
    let assigned_value = if parser.check(&[TokenKind::Assignment]) {
        parser.advance();
        Some(parse_expression(parser)?)
    } else {
        None
    };

    parser.discard_newlines();

    Ok(Stmt::new(
        StmtKind::VarDecl(VarDeclStmt {
            identifier,
            is_constant,
            assigned_value,
            explicit_type,
        }),
        start_token.position,
    ))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::If)?.position;

    let condition = parse_expression(parser)?;
    let body = parse_body(parser)?;
    let mut branches = vec![ConditionalBranch { condition, body }];

    while parser.check(&[TokenKind::Elif]) {
        parser.advance();
        let condition = parse_expression(parser)?;
        let body = parse_body(parser)?;
        branches.push(ConditionalBranch { condition, body });
    }

    let else_body = if parser.check(&[TokenKind::Else]) {
        parser.advance();
        Some(parse_body(parser)?)
    } else {
        None
    };

    Ok(Stmt::new(
        StmtKind::If(IfStmt {
            branches,
            else_body,
        }),
        start,
    ))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::While)?.position;

    let condition = parse_expression(parser)?;
    let body = parse_body(parser)?;

    Ok(Stmt::new(StmtKind::While(WhileStmt { condition, body }), start))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::For)?.position;

    let variable = parser.expect_identifier()?;
    parser.expect(TokenKind::In)?;
    let iterable = parse_expression(parser)?;
    let body = parse_body(parser)?;

    Ok(Stmt::new(
        StmtKind::For(ForStmt {
            variable,
            iterable,
            body,
        }),
        start,
    ))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Return)?.position;

    let value = if parser.check(&[TokenKind::Newline, TokenKind::EOF]) {
        None
    } else {
        Some(parse_expression(parser)?)
    };

    parser.discard_newlines();

    Ok(Stmt::new(StmtKind::Return(ReturnStmt { value }), start))
}

/// `break`, `continue` and `pass`.
pub fn parse_keyword_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.advance().clone();

    let kind = match token.kind {
        TokenKind::Break => StmtKind::Break,
        TokenKind::Continue => StmtKind::Continue,
        _ => StmtKind::Pass,
    };

    parser.discard_newlines();
    Ok(Stmt::new(kind, token.position))
}

pub fn parse_class_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Class)?.position;

    let name = parser.expect_identifier()?;
    let body = parse_body(parser)?;

    Ok(Stmt::new(StmtKind::ClassDecl(ClassDeclStmt { name, body }), start))
}

/// `import NAME [as ALIAS]`
pub fn parse_import_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Import)?.position;

    let module = parser.expect_identifier()?;
    let alias = parse_import_alias(parser)?;

    parser.discard_newlines();

    Ok(Stmt::new(
        StmtKind::Import(ImportStmt {
            module,
            items: None,
            alias,
        }),
        start,
    ))
}

/// `from NAME import NAME (, NAME)* [as ALIAS]`
pub fn parse_from_import_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::From)?.position;

    let module = parser.expect_identifier()?;
    parser.expect(TokenKind::Import)?;

    let mut items = vec![parser.expect_identifier()?];
    while parser.check(&[TokenKind::Comma]) {
        parser.advance();
        items.push(parser.expect_identifier()?);
    }

    let alias = parse_import_alias(parser)?;

    parser.discard_newlines();

    Ok(Stmt::new(
        StmtKind::Import(ImportStmt {
            module,
            items: Some(items),
            alias,
        }),
        start,
    ))
}

fn parse_import_alias(parser: &mut Parser) -> Result<Option<String>, Error> {
    if !parser.check(&[TokenKind::As]) {
        return Ok(None);
    }

    parser.advance();
    Ok(Some(parser.expect_identifier()?))
}
