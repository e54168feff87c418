use crate::Position;

use super::ast::Node;

/// A type annotation such as the `int` in `let x: int`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAnnotation {
    pub name: String,
    /// Reserved for nullable type syntax; the grammar never sets it yet.
    pub optional: bool,
    pub position: Position,
}

impl Node for TypeAnnotation {
    fn position(&self) -> Position {
        self.position
    }
    fn erase_positions(&mut self) {
        self.position = Position::null();
    }
}
