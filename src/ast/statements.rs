use std::{fmt::Display, slice::Iter};

use crate::Position;

use super::{
    ast::{Expr, Node, Stmt},
    types::TypeAnnotation,
};

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Expression(Expr),
    VarDecl(VarDeclStmt),
    FnDecl(FnDeclStmt),
    Return(ReturnStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Break,
    Continue,
    Pass,
    Assignment(AssignmentStmt),
    ClassDecl(ClassDeclStmt),
    Import(ImportStmt),
}

impl StmtKind {
    pub(crate) fn erase_positions(&mut self) {
        match self {
            StmtKind::Expression(expression) => expression.erase_positions(),
            StmtKind::VarDecl(decl) => {
                if let Some(ty) = decl.explicit_type.as_mut() {
                    ty.erase_positions();
                }
                if let Some(value) = decl.assigned_value.as_mut() {
                    value.erase_positions();
                }
            }
            StmtKind::FnDecl(decl) => {
                decl.parameters.iter_mut().for_each(Node::erase_positions);
                if let Some(ty) = decl.return_type.as_mut() {
                    ty.erase_positions();
                }
                decl.body.erase_positions();
            }
            StmtKind::Return(ret) => {
                if let Some(value) = ret.value.as_mut() {
                    value.erase_positions();
                }
            }
            StmtKind::If(cond) => {
                for branch in cond.branches.iter_mut() {
                    branch.condition.erase_positions();
                    branch.body.erase_positions();
                }
                if let Some(else_body) = cond.else_body.as_mut() {
                    else_body.erase_positions();
                }
            }
            StmtKind::While(stmt) => {
                stmt.condition.erase_positions();
                stmt.body.erase_positions();
            }
            StmtKind::For(stmt) => {
                stmt.iterable.erase_positions();
                stmt.body.erase_positions();
            }
            StmtKind::Break | StmtKind::Continue | StmtKind::Pass | StmtKind::Import(_) => {}
            StmtKind::Assignment(assignment) => {
                assignment.assignee.erase_positions();
                assignment.value.erase_positions();
            }
            StmtKind::ClassDecl(decl) => decl.body.erase_positions(),
        }
    }
}

/// The body of a function, branch, loop or class.
///
/// Brace-delimited and indentation-delimited bodies both parse to this node.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub position: Position,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
    pub fn len(&self) -> usize {
        self.body.len()
    }
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Node for BlockStmt {
    fn position(&self) -> Position {
        self.position
    }
    fn erase_positions(&mut self) {
        self.position = Position::null();
        self.body.iter_mut().for_each(Node::erase_positions);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub is_constant: bool,
    pub assigned_value: Option<Expr>,
    pub explicit_type: Option<TypeAnnotation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub explicit_type: Option<TypeAnnotation>,
    pub default_value: Option<Expr>,
    pub position: Position,
}

impl Node for Parameter {
    fn position(&self) -> Position {
        self.position
    }
    fn erase_positions(&mut self) {
        self.position = Position::null();
        if let Some(ty) = self.explicit_type.as_mut() {
            ty.erase_positions();
        }
        if let Some(value) = self.default_value.as_mut() {
            value.erase_positions();
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeAnnotation>,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalBranch {
    pub condition: Expr,
    pub body: BlockStmt,
}

/// `if`/`elif`/`else`. Branches are kept in source order; the first whose
/// condition holds is the one taken.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub branches: Vec<ConditionalBranch>,
    pub else_body: Option<BlockStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub variable: String,
    pub iterable: Expr,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
}

impl AssignmentOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubtractAssign => "-=",
            AssignmentOperator::MultiplyAssign => "*=",
            AssignmentOperator::DivideAssign => "/=",
        }
    }

    pub fn is_compound(&self) -> bool {
        *self != AssignmentOperator::Assign
    }
}

impl Display for AssignmentOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub assignee: Expr,
    pub operator: AssignmentOperator,
    pub value: Expr,
}

/// Class body statements are not yet split into fields and methods.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclStmt {
    pub name: String,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportStmt {
    pub module: String,
    /// `None` imports the whole module
    pub items: Option<Vec<String>>,
    pub alias: Option<String>,
}
