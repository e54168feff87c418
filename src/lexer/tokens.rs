use lazy_static::lazy_static;
use num_bigint::BigInt;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("let", TokenKind::Let);
        map.insert("const", TokenKind::Const);
        map.insert("if", TokenKind::If);
        map.insert("elif", TokenKind::Elif);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("in", TokenKind::In);
        map.insert("return", TokenKind::Return);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("class", TokenKind::Class);
        map.insert("import", TokenKind::Import);
        map.insert("from", TokenKind::From);
        map.insert("as", TokenKind::As);
        map.insert("pass", TokenKind::Pass);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("none", TokenKind::Null);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map
    };

    /// Tried before [`struct@SINGLE_CHAR_LOOKUP`].
    pub static ref DOUBLE_CHAR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("==", TokenKind::Equals);
        map.insert("!=", TokenKind::NotEquals);
        map.insert("<=", TokenKind::LessEquals);
        map.insert(">=", TokenKind::GreaterEquals);
        map.insert("<<", TokenKind::ShiftLeft);
        map.insert(">>", TokenKind::ShiftRight);
        map.insert("**", TokenKind::StarStar);
        map.insert("//", TokenKind::SlashSlash);
        map.insert("->", TokenKind::Arrow);
        map.insert("+=", TokenKind::PlusEquals);
        map.insert("-=", TokenKind::MinusEquals);
        map.insert("*=", TokenKind::StarEquals);
        map.insert("/=", TokenKind::SlashEquals);
        map
    };

    pub static ref SINGLE_CHAR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Dash);
        map.insert('*', TokenKind::Star);
        map.insert('/', TokenKind::Slash);
        map.insert('%', TokenKind::Percent);
        map.insert('<', TokenKind::Less);
        map.insert('>', TokenKind::Greater);
        map.insert('=', TokenKind::Assignment);
        map.insert('&', TokenKind::Ampersand);
        map.insert('|', TokenKind::Pipe);
        map.insert('^', TokenKind::Caret);
        map.insert('~', TokenKind::Tilde);
        map.insert('(', TokenKind::OpenParen);
        map.insert(')', TokenKind::CloseParen);
        map.insert('{', TokenKind::OpenCurly);
        map.insert('}', TokenKind::CloseCurly);
        map.insert('[', TokenKind::OpenBracket);
        map.insert(']', TokenKind::CloseBracket);
        map.insert(',', TokenKind::Comma);
        map.insert('.', TokenKind::Dot);
        map.insert(':', TokenKind::Colon);
        map.insert(';', TokenKind::Semicolon);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Literals
    Integer,
    Float,
    String,
    True,
    False,
    Null,

    // Reserved
    Def,
    Let,
    Const,
    If,
    Elif,
    Else,
    While,
    For,
    In,
    Return,
    Break,
    Continue,
    Class,
    Import,
    From,
    As,
    Pass,

    Identifier,

    Colon,
    Arrow, // ->
    Comma,
    Dot,
    Semicolon,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    StarStar,   // **
    SlashSlash, // //

    Equals,    // ==
    NotEquals, // !=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    And,
    Or,
    Not,

    Ampersand,
    Pipe,
    Caret,
    Tilde,
    ShiftLeft,  // <<
    ShiftRight, // >>

    Assignment, // =
    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,

    Newline,
    Indent,
    Dedent,
    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            TokenKind::Integer => "integer literal",
            TokenKind::Float => "float literal",
            TokenKind::String => "string literal",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Null => "`none`",
            TokenKind::Def => "`def`",
            TokenKind::Let => "`let`",
            TokenKind::Const => "`const`",
            TokenKind::If => "`if`",
            TokenKind::Elif => "`elif`",
            TokenKind::Else => "`else`",
            TokenKind::While => "`while`",
            TokenKind::For => "`for`",
            TokenKind::In => "`in`",
            TokenKind::Return => "`return`",
            TokenKind::Break => "`break`",
            TokenKind::Continue => "`continue`",
            TokenKind::Class => "`class`",
            TokenKind::Import => "`import`",
            TokenKind::From => "`from`",
            TokenKind::As => "`as`",
            TokenKind::Pass => "`pass`",
            TokenKind::Identifier => "identifier",
            TokenKind::Colon => "`:`",
            TokenKind::Arrow => "`->`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Semicolon => "`;`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::OpenCurly => "`{`",
            TokenKind::CloseCurly => "`}`",
            TokenKind::OpenBracket => "`[`",
            TokenKind::CloseBracket => "`]`",
            TokenKind::Plus => "`+`",
            TokenKind::Dash => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::StarStar => "`**`",
            TokenKind::SlashSlash => "`//`",
            TokenKind::Equals => "`==`",
            TokenKind::NotEquals => "`!=`",
            TokenKind::Less => "`<`",
            TokenKind::LessEquals => "`<=`",
            TokenKind::Greater => "`>`",
            TokenKind::GreaterEquals => "`>=`",
            TokenKind::And => "`and`",
            TokenKind::Or => "`or`",
            TokenKind::Not => "`not`",
            TokenKind::Ampersand => "`&`",
            TokenKind::Pipe => "`|`",
            TokenKind::Caret => "`^`",
            TokenKind::Tilde => "`~`",
            TokenKind::ShiftLeft => "`<<`",
            TokenKind::ShiftRight => "`>>`",
            TokenKind::Assignment => "`=`",
            TokenKind::PlusEquals => "`+=`",
            TokenKind::MinusEquals => "`-=`",
            TokenKind::StarEquals => "`*=`",
            TokenKind::SlashEquals => "`/=`",
            TokenKind::Newline => "line break",
            TokenKind::Indent => "indent",
            TokenKind::Dedent => "dedent",
            TokenKind::EOF => "end of input",
        };

        write!(f, "{}", description)
    }
}

/// The value a token carries beyond its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Unbounded, so any run of digits keeps its exact value.
    Integer(BigInt),
    Float(f64),
    /// Decoded string contents, or an identifier's spelling.
    Text(String),
    Boolean(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} '{}' @{}", self.kind, self.lexeme.escape_debug(), self.position)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// How the token is named in diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EOF => String::from("end of input"),
            TokenKind::Newline => String::from("line break"),
            TokenKind::Indent => String::from("indent"),
            TokenKind::Dedent => String::from("dedent"),
            _ => format!("`{}`", self.lexeme),
        }
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Float,
        ]) {
            format!("{:?} ({}) @{}", self.kind, self.lexeme, self.position)
        } else {
            format!("{:?} () @{}", self.kind, self.position)
        }
    }
}
