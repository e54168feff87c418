use std::fmt::Display;

use num_bigint::BigInt;

use super::ast::{Expr, Node};

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    // LITERALS
    Integer(BigInt),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,

    /// A variable reference
    Symbol(String),

    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Call(CallExpr),
    Subscript(SubscriptExpr),
    Member(MemberExpr),
    Array(ArrayExpr),
}

impl ExprKind {
    pub(crate) fn erase_positions(&mut self) {
        match self {
            ExprKind::Integer(_)
            | ExprKind::Float(_)
            | ExprKind::String(_)
            | ExprKind::Boolean(_)
            | ExprKind::Null
            | ExprKind::Symbol(_) => {}
            ExprKind::Binary(binary) => {
                binary.left.erase_positions();
                binary.right.erase_positions();
            }
            ExprKind::Prefix(prefix) => prefix.right_expr.erase_positions(),
            ExprKind::Call(call) => {
                call.callee.erase_positions();
                call.arguments.iter_mut().for_each(Node::erase_positions);
            }
            ExprKind::Subscript(subscript) => {
                subscript.object.erase_positions();
                subscript.index.erase_positions();
            }
            ExprKind::Member(member) => member.object.erase_positions(),
            ExprKind::Array(array) => array.elements.iter_mut().for_each(Node::erase_positions),
        }
    }
}

/// Binary Expression
/// `left operator right`, built by precedence climbing.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Prefix Expression
/// A unary operator applied to the expression on its right.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: PrefixOperator,
    pub right_expr: Box<Expr>,
}

/// Call Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// Subscript Expression
/// `object[index]`
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptExpr {
    pub object: Box<Expr>,
    pub index: Box<Expr>,
}

/// Member Expression
/// `object.member`
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub member: String,
}

/// Array Expression
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpr {
    pub elements: Vec<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Or,
    And,
    Equals,
    NotEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    BitOr,
    BitXor,
    BitAnd,
    ShiftLeft,
    ShiftRight,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    FloorDivide,
    Power,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Or => "or",
            BinaryOperator::And => "and",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::FloorDivide => "//",
            BinaryOperator::Power => "**",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    Not,
    Negate,
    Plus,
    BitNot,
}

impl PrefixOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            PrefixOperator::Not => "not",
            PrefixOperator::Negate => "-",
            PrefixOperator::Plus => "+",
            PrefixOperator::BitNot => "~",
        }
    }
}

impl Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
