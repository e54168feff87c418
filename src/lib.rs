#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    ast::ast::Program,
    config::Config,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize_with,
    parser::parser::parse_with,
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line and column in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Runs the front end over one source unit: text to tokens to tree.
pub fn run(source: &str, config: &Config) -> Result<Program, Error> {
    let tokens = tokenize_with(source, config)?;
    parse_with(tokens, config)
}

/// Returns the text of the given 1-based line, without its line break.
pub fn get_line_at_position(source: &str, position: Position) -> Option<&str> {
    if position.line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(position.line as usize - 1)
        .map(|line| line.trim_end_matches('\r'))
}

/// Renders an error the way the CLI prints it.
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: message
        -> final.rl
           |
        20 | let a = @
           | --------^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}:{}\n", file, error.get_position()));

    let position = *error.get_position();
    let Some(line_text) = get_line_at_position(source, position) else {
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }\n";

        assert_eq!(
            super::get_line_at_position(source, Position::new(1, 10)),
            Some("Hello, world!")
        );
        assert_eq!(
            super::get_line_at_position(source, Position::new(2, 1)),
            Some("second")
        );
        assert_eq!(
            super::get_line_at_position(source, Position::new(4, 8)),
            Some("Testing { }")
        );
        assert_eq!(super::get_line_at_position(source, Position::null()), None);
        assert_eq!(super::get_line_at_position(source, Position::new(9, 1)), None);
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "let x = 1\n    let a = @\n";
        let error = Error::new(
            ErrorImpl::UnrecognisedCharacter { character: '@' },
            Position::new(2, 13),
        );

        let rendered = super::render_error(&error, source, "main.rl");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnrecognisedCharacter");
        assert_eq!(lines[1], "-> main.rl:2:13");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | let a = @");
        assert_eq!(lines[4], "  | --------^");
    }

    #[test]
    fn test_run_pipeline() {
        let program = super::run("let x = 1\n", &Default::default()).unwrap();
        assert_eq!(program.body.len(), 1);
    }
}
