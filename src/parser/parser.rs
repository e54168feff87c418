//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry point.
//! The parser is a recursive descent over the token stream: statements are
//! dispatched on their leading token through a static lookup table, and
//! expressions are parsed by precedence climbing (see `expr.rs`).
//!
//! The parser owns its token stream and a single cursor into it. Parsing
//! stops at the first error; no partial tree is ever returned.

use tracing::debug;

use crate::{
    ast::ast::Program,
    config::Config,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, MK_TOKEN,
};

use super::stmt::parse_stmt;

/// Deepest nesting of expressions and blocks the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending in `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Open recursive constructs, bounded by [`MAX_NESTING_DEPTH`]
    depth: usize,
    config: Config,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A stream that does not end in `EOF` gets one appended, so the cursor
    /// always has a token to look at.
    pub fn new(mut tokens: Vec<Token>, config: Config) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let position = tokens
                .last()
                .map(|token| token.position)
                .unwrap_or(Position::new(1, 1));
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), position));
        }

        Parser {
            tokens,
            pos: 0,
            depth: 0,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.peek(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token `offset` places ahead, clamped to the final `EOF`.
    pub fn peek(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if self.tokens[current].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `UnexpectedToken` error positioned at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: token.describe(),
                },
                token.position,
            ));
        }

        Ok(self.advance().clone())
    }

    /// Consumes an identifier and returns its spelling.
    pub fn expect_identifier(&mut self) -> Result<String, Error> {
        Ok(self.expect(TokenKind::Identifier)?.lexeme)
    }

    /// Tests whether the current token is one of `kinds` without consuming it.
    pub fn check(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current_token_kind())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Skips line breaks wherever they carry no meaning.
    pub fn discard_newlines(&mut self) {
        while self.check(&[TokenKind::Newline]) {
            self.advance();
        }
    }

    /// Enters one level of recursion, failing once the input nests too deeply.
    ///
    /// Errors abort the parse, so only the success path needs a matching
    /// [`Parser::leave`].
    pub fn enter(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().position
    }
}

/// Parses a stream of tokens with the default (lenient) configuration.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    parse_with(tokens, &Config::default())
}

/// Parses a stream of tokens into a Program.
///
/// This is the main entry point for parsing: statements are parsed in order
/// until `EOF`.
pub fn parse_with(tokens: Vec<Token>, config: &Config) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, *config);
    let mut body = vec![];

    parser.discard_newlines();
    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
        parser.discard_newlines();
    }

    debug!(statements = body.len(), "parsed program");

    Ok(Program {
        body,
        position: Position::new(1, 1),
    })
}
