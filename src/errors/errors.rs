use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Which stage of the front end rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::InconsistentDedent { .. } => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::ExpectedExpression { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Syntax,
        }
    }

    /// The token kind the parser required, when the failure came from `expect`.
    pub fn expected(&self) -> Option<TokenKind> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => Some(*expected),
            _ => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::InconsistentDedent { .. } => "InconsistentDedent",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "`{}` is not a valid number",
                token
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing quote"))
            }
            ErrorImpl::InconsistentDedent { width } => ErrorTip::Suggestion(format!(
                "Indentation of {} does not match any enclosing block",
                width
            )),
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected {}, found {}", expected, found))
            }
            ErrorImpl::ExpectedExpression { found } => {
                ErrorTip::Suggestion(format!("Expected an expression, found {}", found))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions and blocks may nest at most {} levels deep",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("inconsistent dedent to width {width}")]
    InconsistentDedent { width: usize },
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: String },
    #[error("expected expression, found {found}")]
    ExpectedExpression { found: String },
    #[error("nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}
