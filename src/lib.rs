#![allow(clippy::module_inception)]

use std::rc::Rc;

use colored::Colorize;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::{metrics::Metrics, type_checker::type_check},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Tokenizes, parses and checks `source`, returning the usage counters.
pub fn analyze(source: &str, file: &str) -> Result<Metrics, Error> {
    let tokens = tokenize(source.to_string(), Some(file.to_string()))?;
    let ast = parse(tokens, Rc::new(file.to_string()))?;
    type_check(&ast)
}

/// Finds the line holding byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset within it. An
/// offset at the very end of the source maps to the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut last = None;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        last = Some((index + 1, line.to_string(), line.len()));
        start = end;
    }

    last.or_else(|| Some((1, String::new(), 0)))
}

/// Renders an error with the offending source line and a caret under it.
///
/// ```text
/// Error: UndeclaredVariable (Variable y was not declared)
/// -> final.lang
///    |
/// 20 | x = y;
///    | ----^
/// ```
pub fn format_error(error: &Error, file: &str, source: &str) -> String {
    let mut rendered = String::new();

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };
    rendered.push_str(&format!("{}\n", header.red().bold()));
    rendered.push_str(&format!("-> {}", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0) else {
        return rendered;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("\n{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    rendered.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    rendered
}

pub fn display_error(error: &Error, file: &str, source: &str) {
    eprintln!("{}", format_error(error, file, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use super::{analyze, format_error, get_line_at_position};

    const SOURCE: &str = "Hello, world!\nsecond\n\nTesting { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(SOURCE, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);

        assert!(get_line_at_position(SOURCE, 500).is_none());
    }

    #[test]
    fn test_end_of_source_maps_to_last_line() {
        let (line_number, _, _) = get_line_at_position("x = 1", 5).unwrap();
        assert_eq!(line_number, 1);
    }

    #[test]
    fn test_format_error_points_at_offending_column() {
        colored::control::set_override(false);

        let source = "declare x: int = 1;\n    x = true;\n";
        let error = analyze(source, "test.lang").unwrap_err();
        let rendered = format_error(&error, "test.lang", source);

        assert!(rendered.starts_with("Error: AssignmentTypeMismatch"));
        assert!(rendered.contains("-> test.lang"));
        assert!(rendered.contains("2 | x = true;"));
        assert!(rendered.ends_with("----^"));
    }
}
