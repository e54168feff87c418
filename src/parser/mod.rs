//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It handles:
//!
//! - Statement parsing (declarations, control flow, classes, imports)
//! - Expression parsing by precedence climbing, with prefix and postfix operators
//! - Blocks in either brace or indentation form
//! - Type annotations
//!
//! Dispatch and precedence live in static lookup tables (`lookups.rs`).

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
