//! Error types and error handling for the front end.
//!
//! This module defines the error types raised while scanning and parsing.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexical and syntax phases
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
