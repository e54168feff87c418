use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{BinaryOperator, PrefixOperator},
        statements::AssignmentOperator,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binary operator precedence, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    LogicalOr,
    LogicalAnd,
    Relational,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Shift,
    Additive,
    Multiplicative,
    Power,
    /// Binds tighter than every binary operator
    Prefix,
}

impl BindingPower {
    /// The next level up.
    pub fn tighter(self) -> BindingPower {
        match self {
            BindingPower::Default => BindingPower::LogicalOr,
            BindingPower::LogicalOr => BindingPower::LogicalAnd,
            BindingPower::LogicalAnd => BindingPower::Relational,
            BindingPower::Relational => BindingPower::BitwiseOr,
            BindingPower::BitwiseOr => BindingPower::BitwiseXor,
            BindingPower::BitwiseXor => BindingPower::BitwiseAnd,
            BindingPower::BitwiseAnd => BindingPower::Shift,
            BindingPower::Shift => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative => BindingPower::Power,
            BindingPower::Power | BindingPower::Prefix => BindingPower::Prefix,
        }
    }

    /// Minimum binding power for the right operand of an operator at this level.
    ///
    /// `**` groups to the right, every other operator to the left.
    pub fn right_operand(self) -> BindingPower {
        match self {
            BindingPower::Power => BindingPower::Power,
            other => other.tighter(),
        }
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

lazy_static! {
    pub static ref STMT_LOOKUP: HashMap<TokenKind, StmtHandler> = {
        let mut map: HashMap<TokenKind, StmtHandler> = HashMap::new();
        map.insert(TokenKind::Def, parse_fn_decl_stmt);
        map.insert(TokenKind::Let, parse_var_decl_stmt);
        map.insert(TokenKind::Const, parse_var_decl_stmt);
        map.insert(TokenKind::If, parse_if_stmt);
        map.insert(TokenKind::While, parse_while_stmt);
        map.insert(TokenKind::For, parse_for_stmt);
        map.insert(TokenKind::Return, parse_return_stmt);
        map.insert(TokenKind::Break, parse_keyword_stmt);
        map.insert(TokenKind::Continue, parse_keyword_stmt);
        map.insert(TokenKind::Pass, parse_keyword_stmt);
        map.insert(TokenKind::Class, parse_class_decl_stmt);
        map.insert(TokenKind::Import, parse_import_stmt);
        map.insert(TokenKind::From, parse_from_import_stmt);
        map
    };

    /// Atomic expressions, keyed by their first token.
    pub static ref NUD_LOOKUP: HashMap<TokenKind, NUDHandler> = {
        let mut map: HashMap<TokenKind, NUDHandler> = HashMap::new();
        map.insert(TokenKind::Integer, parse_primary_expr);
        map.insert(TokenKind::Float, parse_primary_expr);
        map.insert(TokenKind::String, parse_primary_expr);
        map.insert(TokenKind::True, parse_primary_expr);
        map.insert(TokenKind::False, parse_primary_expr);
        map.insert(TokenKind::Null, parse_primary_expr);
        map.insert(TokenKind::Identifier, parse_primary_expr);
        map.insert(TokenKind::OpenParen, parse_grouping_expr);
        map.insert(TokenKind::OpenBracket, parse_array_expr);
        map
    };

    pub static ref BINARY_LOOKUP: HashMap<TokenKind, (BinaryOperator, BindingPower)> = {
        let mut map = HashMap::new();
        // Logical
        map.insert(TokenKind::Or, (BinaryOperator::Or, BindingPower::LogicalOr));
        map.insert(TokenKind::And, (BinaryOperator::And, BindingPower::LogicalAnd));

        // Equality and relational
        map.insert(TokenKind::Equals, (BinaryOperator::Equals, BindingPower::Relational));
        map.insert(TokenKind::NotEquals, (BinaryOperator::NotEquals, BindingPower::Relational));
        map.insert(TokenKind::Less, (BinaryOperator::Less, BindingPower::Relational));
        map.insert(TokenKind::LessEquals, (BinaryOperator::LessEquals, BindingPower::Relational));
        map.insert(TokenKind::Greater, (BinaryOperator::Greater, BindingPower::Relational));
        map.insert(TokenKind::GreaterEquals, (BinaryOperator::GreaterEquals, BindingPower::Relational));

        // Bitwise
        map.insert(TokenKind::Pipe, (BinaryOperator::BitOr, BindingPower::BitwiseOr));
        map.insert(TokenKind::Caret, (BinaryOperator::BitXor, BindingPower::BitwiseXor));
        map.insert(TokenKind::Ampersand, (BinaryOperator::BitAnd, BindingPower::BitwiseAnd));
        map.insert(TokenKind::ShiftLeft, (BinaryOperator::ShiftLeft, BindingPower::Shift));
        map.insert(TokenKind::ShiftRight, (BinaryOperator::ShiftRight, BindingPower::Shift));

        // Additive and multiplicative
        map.insert(TokenKind::Plus, (BinaryOperator::Add, BindingPower::Additive));
        map.insert(TokenKind::Dash, (BinaryOperator::Subtract, BindingPower::Additive));
        map.insert(TokenKind::Star, (BinaryOperator::Multiply, BindingPower::Multiplicative));
        map.insert(TokenKind::Slash, (BinaryOperator::Divide, BindingPower::Multiplicative));
        map.insert(TokenKind::Percent, (BinaryOperator::Modulo, BindingPower::Multiplicative));
        map.insert(TokenKind::SlashSlash, (BinaryOperator::FloorDivide, BindingPower::Multiplicative));

        map.insert(TokenKind::StarStar, (BinaryOperator::Power, BindingPower::Power));
        map
    };

    pub static ref PREFIX_LOOKUP: HashMap<TokenKind, PrefixOperator> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Not, PrefixOperator::Not);
        map.insert(TokenKind::Dash, PrefixOperator::Negate);
        map.insert(TokenKind::Plus, PrefixOperator::Plus);
        map.insert(TokenKind::Tilde, PrefixOperator::BitNot);
        map
    };

    pub static ref ASSIGNMENT_LOOKUP: HashMap<TokenKind, AssignmentOperator> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Assignment, AssignmentOperator::Assign);
        map.insert(TokenKind::PlusEquals, AssignmentOperator::AddAssign);
        map.insert(TokenKind::MinusEquals, AssignmentOperator::SubtractAssign);
        map.insert(TokenKind::StarEquals, AssignmentOperator::MultiplyAssign);
        map.insert(TokenKind::SlashEquals, AssignmentOperator::DivideAssign);
        map
    };
}
