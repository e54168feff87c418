//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Indentation tracking, emitting INDENT/DEDENT tokens from a width stack
//! - Recognition of keywords, identifiers, literals, and operators
//! - String escapes and numeric literal values
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
