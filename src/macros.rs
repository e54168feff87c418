//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The raw source text of the token
/// * `$literal` - The token's literal value, if any
/// * `$position` - The position of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), Some(Literal::Integer(BigInt::from(42))), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $position:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            position: $position,
        }
    };
    ($kind:expr, $lexeme:expr, $position:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: None,
            position: $position,
        }
    };
}
