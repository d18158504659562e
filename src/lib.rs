#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::File,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A point in a source buffer: byte offset, 1-based line and the buffer's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, file: Rc<String>) -> Self {
        Position { offset, line, file }
    }

    pub fn null() -> Self {
        Position::new(0, 1, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line text without its terminator and
/// the byte offset of `position` within that line. An offset equal to the
/// buffer length (where `EOF` sits) resolves to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) || (pos == end && !line.ends_with('\n')) {
            let text = line.trim_end_matches(['\n', '\r']).to_string();
            return Some((line_number, text, pos - start));
        }

        start = end;
        line_number += 1;
    }

    Some((line_number, String::new(), 0))
}

/// Runs both front-end stages over one buffer.
///
/// Lexical diagnostics come first, followed by syntax diagnostics, each in
/// the order they were found.
pub fn compile_source(source: String, file: Option<String>) -> (File, Vec<Error>) {
    let (tokens, mut errors) = tokenize(source, file);
    let (ast, parse_errors) = parse(tokens);

    errors.extend(parse_errors);
    (ast, errors)
}

/// Renders a diagnostic against the buffer it was produced from.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `}`, did you miss a semicolon?)
/// -> main.fox:20
///    |
/// 20 | let a int = 4 }
///    | --------------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
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
    out.push_str(&format!("-> {}:{}\n", position.file, position.line));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let column = line_text
        .get(removed_whitespace.min(line_pos)..line_pos)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(0);
    let arrows = column + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
