//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - String literals with escape sequences
//! - Operators and punctuation
//! - Indentation tracking
//! - Comments and blank lines
//! - Error cases

use num_bigint::BigInt;
use rstest::rstest;

use crate::{config::Config, errors::errors::ErrorImpl, Position};

use super::{
    lexer::{tokenize, tokenize_with},
    tokens::{Literal, Token, TokenKind},
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

fn scan_kinds(source: &str) -> Vec<TokenKind> {
    kinds(&tokenize(source).unwrap())
}

#[test]
fn test_tokenize_keywords() {
    let source = "def let const if elif else while for in return break continue class import from as pass";
    let tokens = tokenize(source).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Def,
            TokenKind::Let,
            TokenKind::Const,
            TokenKind::If,
            TokenKind::Elif,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::For,
            TokenKind::In,
            TokenKind::Return,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::Class,
            TokenKind::Import,
            TokenKind::From,
            TokenKind::As,
            TokenKind::Pass,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[0].literal, None);
}

#[test]
fn test_tokenize_literal_keywords() {
    let tokens = tokenize("true false none and or not").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::True);
    assert_eq!(tokens[0].literal, Some(Literal::Boolean(true)));
    assert_eq!(tokens[1].kind, TokenKind::False);
    assert_eq!(tokens[1].literal, Some(Literal::Boolean(false)));
    assert_eq!(tokens[2].kind, TokenKind::Null);
    assert_eq!(tokens[2].literal, Some(Literal::Null));
    assert_eq!(tokens[3].kind, TokenKind::And);
    assert_eq!(tokens[4].kind, TokenKind::Or);
    assert_eq!(tokens[5].kind, TokenKind::Not);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _underscore CamelCase définir iffy").unwrap();

    let names = ["foo", "baz_123", "_underscore", "CamelCase", "définir", "iffy"];
    for (token, name) in tokens.iter().zip(names) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme, name);
        assert_eq!(token.literal, Some(Literal::Text(name.to_string())));
    }
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 2.75 0 100.5 7.").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].literal, Some(Literal::Integer(BigInt::from(42))));
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].literal, Some(Literal::Float(2.75)));
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].literal, Some(Literal::Integer(BigInt::from(0))));
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[3].literal, Some(Literal::Float(100.5)));
    assert_eq!(tokens[4].kind, TokenKind::Float);
    assert_eq!(tokens[4].lexeme, "7.");
    assert_eq!(tokens[4].literal, Some(Literal::Float(7.0)));
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_second_decimal_point_ends_number() {
    let tokens = tokenize("1.2.3").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Float, TokenKind::Dot, TokenKind::Integer, TokenKind::EOF]
    );
    assert_eq!(tokens[0].lexeme, "1.2");
    assert_eq!(tokens[2].literal, Some(Literal::Integer(BigInt::from(3))));
}

#[test]
fn test_large_integer_keeps_its_value() {
    let digits = "99999999999999999999";
    let tokens = tokenize(&format!("x = {}\n", digits)).unwrap();

    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].position, Position::new(1, 5));

    let expected: BigInt = digits.parse().unwrap();
    assert!(expected > BigInt::from(i64::MAX));
    assert_eq!(tokens[2].literal, Some(Literal::Integer(expected)));
}

#[test]
fn test_numbers_use_ascii_digits_only() {
    // A non-ASCII digit cannot start a number, but may continue an identifier
    let error = tokenize("\u{0663}").unwrap_err();
    assert_eq!(error.get_impl(), &ErrorImpl::UnrecognisedCharacter { character: '\u{0663}' });

    let tokens = tokenize("x\u{0663}").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "x\u{0663}");
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" 'world' "multiple words" """#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].literal, Some(Literal::Text("hello".to_string())));
    assert_eq!(tokens[0].lexeme, "\"hello\"");
    assert_eq!(tokens[1].literal, Some(Literal::Text("world".to_string())));
    assert_eq!(tokens[2].literal, Some(Literal::Text("multiple words".to_string())));
    assert_eq!(tokens[3].literal, Some(Literal::Text(String::new())));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r#""hello\nworld" "tab\there" "cr\r" "backslash\\" "skip\q""#).unwrap();

    assert_eq!(tokens[0].literal, Some(Literal::Text("hello\nworld".to_string())));
    assert_eq!(tokens[1].literal, Some(Literal::Text("tab\there".to_string())));
    assert_eq!(tokens[2].literal, Some(Literal::Text("cr\r".to_string())));
    assert_eq!(tokens[3].literal, Some(Literal::Text("backslash\\".to_string())));
    assert_eq!(tokens[4].literal, Some(Literal::Text("skipq".to_string())));
}

#[test]
fn test_tokenize_escaped_quote_in_string() {
    let tokens = tokenize(r#""quote\"test" 'it\'s' "mixed'quote""#).unwrap();

    assert_eq!(tokens[0].literal, Some(Literal::Text("quote\"test".to_string())));
    assert_eq!(tokens[1].literal, Some(Literal::Text("it's".to_string())));
    assert_eq!(tokens[2].literal, Some(Literal::Text("mixed'quote".to_string())));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_unterminated_string_is_truncated() {
    let tokens = tokenize("x = \"abc").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Identifier, TokenKind::Assignment, TokenKind::String, TokenKind::EOF]
    );
    assert_eq!(tokens[2].literal, Some(Literal::Text("abc".to_string())));
    assert_eq!(tokens[2].lexeme, "\"abc");

    let tokens = tokenize("\"ab\\").unwrap();
    assert_eq!(tokens[0].literal, Some(Literal::Text("ab".to_string())));
}

#[test]
fn test_unterminated_string_strict() {
    let error = tokenize_with("x = 'abc", &Config::strict()).unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedString);
    assert_eq!(*error.get_position(), Position::new(1, 5));
}

#[rstest]
#[case("+", TokenKind::Plus)]
#[case("-", TokenKind::Dash)]
#[case("*", TokenKind::Star)]
#[case("/", TokenKind::Slash)]
#[case("%", TokenKind::Percent)]
#[case("**", TokenKind::StarStar)]
#[case("//", TokenKind::SlashSlash)]
#[case("==", TokenKind::Equals)]
#[case("!=", TokenKind::NotEquals)]
#[case("<", TokenKind::Less)]
#[case("<=", TokenKind::LessEquals)]
#[case(">", TokenKind::Greater)]
#[case(">=", TokenKind::GreaterEquals)]
#[case("&", TokenKind::Ampersand)]
#[case("|", TokenKind::Pipe)]
#[case("^", TokenKind::Caret)]
#[case("~", TokenKind::Tilde)]
#[case("<<", TokenKind::ShiftLeft)]
#[case(">>", TokenKind::ShiftRight)]
#[case("=", TokenKind::Assignment)]
#[case("+=", TokenKind::PlusEquals)]
#[case("-=", TokenKind::MinusEquals)]
#[case("*=", TokenKind::StarEquals)]
#[case("/=", TokenKind::SlashEquals)]
#[case("->", TokenKind::Arrow)]
#[case(":", TokenKind::Colon)]
#[case(",", TokenKind::Comma)]
#[case(".", TokenKind::Dot)]
#[case(";", TokenKind::Semicolon)]
#[case("(", TokenKind::OpenParen)]
#[case(")", TokenKind::CloseParen)]
#[case("{", TokenKind::OpenCurly)]
#[case("}", TokenKind::CloseCurly)]
#[case("[", TokenKind::OpenBracket)]
#[case("]", TokenKind::CloseBracket)]
fn test_tokenize_operator(#[case] source: &str, #[case] kind: TokenKind) {
    let tokens = tokenize(source).unwrap();

    assert_eq!(kinds(&tokens), vec![kind, TokenKind::EOF]);
    assert_eq!(tokens[0].lexeme, source);
    assert_eq!(tokens[0].literal, None);
}

#[test]
fn test_two_character_operators_win() {
    assert_eq!(
        scan_kinds("**= <<= a->b"),
        vec![
            TokenKind::StarStar,
            TokenKind::Assignment,
            TokenKind::ShiftLeft,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::Arrow,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("let x = 5 # trailing comment\n# full line\nlet y = 10").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::Newline,
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[5].position, Position::new(3, 1));
}

#[test]
fn test_tokenize_whitespace_handling() {
    assert_eq!(
        scan_kinds("let   x   =   42  "),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_indentation() {
    let tokens = tokenize("if x:\n    y\nz\n").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::If,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[4].position, Position::new(2, 1));
    assert_eq!(tokens[5].position, Position::new(2, 5));
    assert_eq!(tokens[7].position, Position::new(3, 1));
    assert_eq!(tokens[10].position, Position::new(4, 1));
}

#[test]
fn test_open_levels_flushed_at_end_of_input() {
    let tokens = tokenize("a:\n  b:\n    c").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Identifier,
            TokenKind::Dedent,
            TokenKind::Dedent,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[9].position, Position::new(3, 6));
    assert_eq!(tokens[11].position, Position::new(3, 6));
}

#[test]
fn test_blank_and_comment_lines_keep_indentation() {
    let source = "a\n    b\n\n        \n  # note\n    c\n";

    assert_eq!(
        scan_kinds(source),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tab_counts_as_four_columns() {
    assert_eq!(
        scan_kinds("a\n\tb\n    c\n"),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_ragged_dedent_pops_to_enclosing_level() {
    assert_eq!(
        scan_kinds("a\n    b\n  c\n"),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_ragged_dedent_strict() {
    let error = tokenize_with("a\n    b\n  c\n", &Config::strict()).unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::InconsistentDedent { width: 2 });
    assert_eq!(*error.get_position(), Position::new(3, 1));

    assert!(tokenize_with("a\n    b\nc\n", &Config::strict()).is_ok());
}

#[test]
fn test_crlf_line_endings() {
    assert_eq!(scan_kinds("a\r\n\r\n    b\r\n"), scan_kinds("a\n\n    b\n"));
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("let x\n  y = 'a'").unwrap();

    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[1].position, Position::new(1, 5));
    assert_eq!(tokens[2].position, Position::new(1, 6));
    assert_eq!(tokens[4].position, Position::new(2, 3));
    assert_eq!(tokens[5].position, Position::new(2, 5));
    assert_eq!(tokens[6].position, Position::new(2, 7));
}

#[test]
fn test_tokenize_unrecognized_character() {
    let error = tokenize("@").unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnrecognisedCharacter { character: '@' });
    assert_eq!(*error.get_position(), Position::new(1, 1));

    let error = tokenize("x = 1\nif !x: pass").unwrap_err();
    assert_eq!(error.get_impl(), &ErrorImpl::UnrecognisedCharacter { character: '!' });
    assert_eq!(*error.get_position(), Position::new(2, 4));
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("").unwrap();

    assert_eq!(kinds(&tokens), vec![TokenKind::EOF]);
    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(scan_kinds("\n\n   \n# only a comment"), vec![TokenKind::EOF]);
}
