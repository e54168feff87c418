use crate::Position;

use super::{expressions::ExprKind, statements::StmtKind};

/// Node Trait
///
/// Shared behaviour of every positioned node in the tree.
pub trait Node {
    /// Returns the position of the token that starts the node.
    fn position(&self) -> Position;
    /// Resets this node's position and the positions of all its descendants.
    ///
    /// Used to compare trees that differ only in layout.
    fn erase_positions(&mut self);
}

/// Root of a parsed source unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub position: Position,
}

impl Program {
    /// Returns a copy of the tree with every position reset.
    pub fn without_positions(&self) -> Program {
        let mut program = self.clone();
        program.erase_positions();
        program
    }

    /// Compares two trees, ignoring where their nodes came from.
    pub fn structurally_eq(&self, other: &Program) -> bool {
        self.without_positions() == other.without_positions()
    }
}

impl Node for Program {
    fn position(&self) -> Position {
        self.position
    }
    fn erase_positions(&mut self) {
        self.position = Position::null();
        self.body.iter_mut().for_each(Node::erase_positions);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub position: Position,
}

impl Expr {
    pub fn new(kind: ExprKind, position: Position) -> Self {
        Expr { kind, position }
    }
}

impl Node for Expr {
    fn position(&self) -> Position {
        self.position
    }
    fn erase_positions(&mut self) {
        self.position = Position::null();
        self.kind.erase_positions();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub position: Position,
}

impl Stmt {
    pub fn new(kind: StmtKind, position: Position) -> Self {
        Stmt { kind, position }
    }
}

impl Node for Stmt {
    fn position(&self) -> Position {
        self.position
    }
    fn erase_positions(&mut self) {
        self.position = Position::null();
        self.kind.erase_positions();
    }
}
