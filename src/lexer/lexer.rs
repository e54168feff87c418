use lazy_static::lazy_static;
use num_bigint::BigInt;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    config::Config,
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{
    Literal, Token, TokenKind, DOUBLE_CHAR_LOOKUP, RESERVED_LOOKUP, SINGLE_CHAR_LOOKUP,
};

/// Width a tab contributes to a line's indentation.
const TAB_WIDTH: usize = 4;

pub type RegexHandler = fn(&mut Lexer<'_>, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Order matters: the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[ \t\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\n").unwrap(), handler: newline_handler },
        RegexPattern { regex: Regex::new(r"^#[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+(\.[0-9]*)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r#"^["']"#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"^[\p{Alphabetic}_][\p{Alphabetic}\p{N}_]*").unwrap(), handler: symbol_handler },
    ];
}

/// Scanner state for a single source unit.
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset of the cursor into `source`
    pos: usize,
    line: u32,
    column: u32,
    tokens: Vec<Token>,
    /// Open indentation widths, bottom is always 0
    indent_stack: Vec<usize>,
    at_line_start: bool,
    config: Config,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, config: Config) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 1,
            tokens: vec![],
            indent_stack: vec![0],
            at_line_start: true,
            config,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// Consumes one character, keeping line and column current.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.at()?;
        self.pos += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Advances past `text`, which must be the prefix of the remainder.
    fn advance_str(&mut self, text: &str) {
        self.advance_n(text.chars().count());
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Measures the indentation of a fresh line and emits INDENT/DEDENT tokens.
    ///
    /// Returns `false` when the line is blank or holds only a comment; such
    /// lines are consumed whole and never touch the indentation stack.
    fn scan_line_start(&mut self) -> Result<bool, Error> {
        let mut width = 0;
        while let Some(ch) = self.at() {
            match ch {
                ' ' => width += 1,
                '\t' => width += TAB_WIDTH,
                '\r' => {}
                _ => break,
            }
            self.advance();
        }

        match self.at() {
            None => Ok(false),
            Some('\n') => {
                self.advance();
                Ok(false)
            }
            Some('#') => {
                while !matches!(self.at(), None | Some('\n')) {
                    self.advance();
                }
                self.advance();
                Ok(false)
            }
            Some(_) => {
                self.handle_indentation(width)?;
                self.at_line_start = false;
                Ok(true)
            }
        }
    }

    fn handle_indentation(&mut self, width: usize) -> Result<(), Error> {
        let current = self.indent_stack.last().copied().unwrap_or(0);
        let position = Position::new(self.line, 1);

        if width > current {
            self.indent_stack.push(width);
            trace!(width, depth = self.indent_stack.len(), "indent");
            self.push(MK_TOKEN!(TokenKind::Indent, String::new(), position));
            return Ok(());
        }

        while self.indent_stack.len() > 1 && self.indent_stack.last().is_some_and(|top| *top > width) {
            self.indent_stack.pop();
            trace!(width, depth = self.indent_stack.len(), "dedent");
            self.push(MK_TOKEN!(TokenKind::Dedent, String::new(), position));
        }

        if self.config.is_strict() && self.indent_stack.last() != Some(&width) {
            return Err(Error::new(ErrorImpl::InconsistentDedent { width }, position));
        }

        Ok(())
    }

    /// Tries the two-character table, then the one-character table.
    fn scan_operator(&mut self) -> Result<(), Error> {
        let position = self.position();
        let remaining = self.remainder();
        let Some(first) = remaining.chars().next() else {
            return Ok(());
        };

        let pair: String = remaining.chars().take(2).collect();
        if let Some(kind) = DOUBLE_CHAR_LOOKUP.get(pair.as_str()) {
            self.advance_n(2);
            self.push(MK_TOKEN!(*kind, pair, position));
            return Ok(());
        }

        if let Some(kind) = SINGLE_CHAR_LOOKUP.get(&first) {
            self.advance();
            self.push(MK_TOKEN!(*kind, first.to_string(), position));
            return Ok(());
        }

        Err(Error::new(
            ErrorImpl::UnrecognisedCharacter { character: first },
            position,
        ))
    }

    /// Closes every indentation level still open at end of input.
    fn flush_indentation(&mut self) {
        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            let position = self.position();
            self.push(MK_TOKEN!(TokenKind::Dedent, String::new(), position));
        }
    }
}

fn skip_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), Error> {
    lexer.advance_str(matched);
    Ok(())
}

fn newline_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), Error> {
    let position = lexer.position();
    lexer.push(MK_TOKEN!(TokenKind::Newline, String::from(matched), position));
    lexer.advance_str(matched);
    lexer.at_line_start = true;
    Ok(())
}

fn number_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), Error> {
    let position = lexer.position();
    let parse_error = || {
        Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(matched),
            },
            position,
        )
    };

    let token = if matched.contains('.') {
        let value: f64 = matched.parse().map_err(|_| parse_error())?;
        MK_TOKEN!(TokenKind::Float, String::from(matched), Some(Literal::Float(value)), position)
    } else {
        let value: BigInt = matched.parse().map_err(|_| parse_error())?;
        MK_TOKEN!(TokenKind::Integer, String::from(matched), Some(Literal::Integer(value)), position)
    };

    lexer.push(token);
    lexer.advance_str(matched);
    Ok(())
}

fn string_handler(lexer: &mut Lexer<'_>, _matched: &str) -> Result<(), Error> {
    let position = lexer.position();
    let start = lexer.pos;
    let Some(quote) = lexer.advance() else {
        return Ok(());
    };

    let mut result = String::new();
    let mut terminated = false;

    while let Some(ch) = lexer.advance() {
        if ch == quote {
            terminated = true;
            break;
        }

        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match lexer.advance() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            // Covers the escaped delimiter as well as unknown escapes
            Some(other) => result.push(other),
            None => break,
        }
    }

    if !terminated && lexer.config.is_strict() {
        return Err(Error::new(ErrorImpl::UnterminatedString, position));
    }

    let lexeme = String::from(&lexer.source[start..lexer.pos]);
    lexer.push(MK_TOKEN!(TokenKind::String, lexeme, Some(Literal::Text(result)), position));
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer<'_>, matched: &str) -> Result<(), Error> {
    let position = lexer.position();
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let literal = match kind {
        TokenKind::True => Some(Literal::Boolean(true)),
        TokenKind::False => Some(Literal::Boolean(false)),
        TokenKind::Null => Some(Literal::Null),
        TokenKind::Identifier => Some(Literal::Text(String::from(matched))),
        _ => None,
    };

    lexer.push(MK_TOKEN!(kind, String::from(matched), literal, position));
    lexer.advance_str(matched);
    Ok(())
}

/// Scans `source` with the default (lenient) configuration.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    tokenize_with(source, &Config::default())
}

/// Scans `source` into tokens ending in a single `EOF`.
///
/// INDENT and DEDENT tokens are always balanced: levels still open at end of
/// input are closed before the end marker.
pub fn tokenize_with(source: &str, config: &Config) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, *config);

    while !lex.at_eof() {
        if lex.at_line_start && !lex.scan_line_start()? {
            continue;
        }

        let remaining = lex.remainder();
        let matched = PATTERNS
            .iter()
            .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern.handler, m.as_str())));

        match matched {
            Some((handler, text)) => handler(&mut lex, text)?,
            None => lex.scan_operator()?,
        }
    }

    lex.flush_indentation();

    let position = lex.position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), position));

    debug!(tokens = lex.tokens.len(), lines = lex.line, "tokenized source");
    Ok(lex.tokens)
}
