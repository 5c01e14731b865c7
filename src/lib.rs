#![allow(clippy::module_inception)]

use std::{
    io::{BufRead, Write},
    rc::Rc,
    sync::Once,
};

use crate::{
    errors::errors::{Error, ErrorTip},
    evaluator::{evaluator::Evaluator, value::Value},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Byte offset into a source, with the name of that source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

static TRACING_INIT: Once = Once::new();

/// Installs the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=interpreter=trace`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Lexes, parses and executes `source` against an existing evaluator.
///
/// Variables declared by earlier calls stay visible. Nothing is executed if
/// the source fails to lex or parse.
pub fn run<R: BufRead, W: Write>(
    source: &str,
    file: Option<String>,
    evaluator: &mut Evaluator<R, W>,
) -> Result<Option<Value>, Error> {
    let file = Rc::new(file.unwrap_or_else(|| String::from("shell")));

    let tokens = tokenize(source.to_string(), Some(file.to_string()))?;
    let program = parse(tokens, file)?;

    evaluator.execute_program(&program)
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset within the
/// line. An offset at the very end of the source points just past the last
/// character.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if pos < end || (pos == end && !line.ends_with('\n')) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    (line_number, String::new(), pos - start)
}

/// Formats an error with the offending line and a caret under it.
///
/// ```text
/// Error: VariableNotDeclared: undefined variable: y
/// -> main.lang
///   |
/// 2 | print(y);
///   | ------^
///   = Variable `y` not declared
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut rendered = format!("Error: {}: {}\n", error.get_error_name(), error);
    rendered.push_str(&format!("-> {}\n", position.1));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        rendered.push_str(&format!("{:>padding$} {}\n", "=", tip));
    }

    rendered
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::{io, rc::Rc};

    use pretty_assertions::assert_eq;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        evaluator::{evaluator::Evaluator, value::Value},
        Position,
    };

    const SOURCE: &str = "let a = 1;\nlet b = 2;\n\n    print(c);\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "let a = 1;\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 33);
        assert_eq!(line_number, 4);
        assert_eq!(line, "    print(c);\n");
        assert_eq!(line_pos, 10);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        assert_eq!(super::get_line_at_position("", 0), (1, String::new(), 0));
        assert_eq!(super::get_line_at_position("ab", 2), (1, String::from("ab"), 2));
        assert_eq!(super::get_line_at_position("ab\n", 3), (2, String::new(), 0));
        assert_eq!(super::get_line_at_position("ab\n", 99), (2, String::new(), 0));
    }

    #[test]
    fn test_render_error() {
        let error = Error::new(
            ErrorImpl::VariableNotDeclared {
                variable: String::from("c"),
            },
            Position(33, Rc::new(String::from("main.lang"))),
        );

        let expected = "Error: VariableNotDeclared: undefined variable: c\n\
                        -> main.lang\n  \
                        |\n\
                        4 | print(c);\n  \
                        | ------^\n  \
                        = Variable `c` not declared\n";

        assert_eq!(super::render_error(&error, SOURCE), expected);
    }

    #[test]
    fn test_run_keeps_environment_between_calls() {
        let mut evaluator = Evaluator::new(io::empty(), Vec::<u8>::new());

        assert_eq!(super::run("let x = 2;", None, &mut evaluator), Ok(None));
        assert_eq!(super::run("x * 21;", None, &mut evaluator), Ok(Some(Value::Float(42.0))));
    }

    #[test]
    fn test_run_reports_parse_errors_without_executing() {
        let mut evaluator = Evaluator::new(io::empty(), Vec::<u8>::new());

        let error = super::run("print(1); print(", None, &mut evaluator).unwrap_err();
        assert!(error.is_parse_error());
        assert_eq!(error.get_position().1.as_str(), "shell");
        assert!(evaluator.output().is_empty());
    }
}
