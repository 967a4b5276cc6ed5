#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset within the line,
/// or `None` when the offset lies past the end of `content`.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}


/// Renders an error the way `display_error` prints it.
///
/// With the source text available the offending line is quoted and underlined:
///
/// ```text
/// Error: ExpectedFunctionName (expected function name in prototype, found `(`)
/// -> input.toy:1:5
///   |
/// 1 | def (x) x
///   | ----^
/// ```
pub fn format_error(error: &Error, source: Option<&str>) -> String {
    let position = error.get_position();
    let mut lines = Vec::new();

    if let ErrorTip::None = error.get_tip() {
        lines.push(format!("Error: {}", error.get_error_name()));
    } else {
        lines.push(format!("Error: {} ({})", error.get_error_name(), error.get_tip()));
    }

    let located = source.and_then(|source| get_line_at_position(source, position.0));

    let Some((line, line_text, line_pos)) = located else {
        lines.push(format!("-> {}@{}", position.1, position.0));
        return lines.join("\n");
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    lines.push(format!("-> {}:{}:{}", position.1, line, line_pos + 1));
    lines.push(format!("{:>padding$}", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    lines.push(format!("{} | {}", line_str, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    lines.push(format!("{:>padding$} {:->arrows$}", "|", "^"));

    lines.join("\n")
}

pub fn display_error(error: &Error, source: Option<&str>) {
    println!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
