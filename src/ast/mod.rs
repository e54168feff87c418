/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program root, the positioned Expr/Stmt wrappers and the Node trait
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants and blocks
/// - types: Type annotations
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
