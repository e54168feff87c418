//! Type annotation parsing.
//!
//! Annotations are a single type name for now (`x: int`, `-> str`).

use crate::{ast::types::TypeAnnotation, errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

pub fn parse_type(parser: &mut Parser) -> Result<TypeAnnotation, Error> {
    let token = parser.expect(TokenKind::Identifier)?;

    Ok(TypeAnnotation {
        name: token.lexeme,
        optional: false,
        position: token.position,
    })
}
