//! Evaluator state.
//!
//! The evaluator owns the environment and the two I/O collaborators: the
//! line source that `read` consumes and the sink `print` writes to. Both are
//! generic so a session can run against stdin/stdout or in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    ast::{ast::Stmt, statements::BlockStmt},
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{environment::Environment, stmt::{eval_block, eval_statement}, value::Value};

/// The tree-walking evaluator for one session.
///
/// # Type Parameters
///
/// * `R` - Source of input lines for `read`
/// * `W` - Destination of `print` output
pub struct Evaluator<R: BufRead, W: Write> {
    /// Every variable declared so far
    pub environment: Environment,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Evaluator<R, W> {
    /// Creates an evaluator with an empty environment.
    pub fn new(input: R, output: W) -> Self {
        Evaluator {
            environment: Environment::new(),
            input,
            output,
        }
    }

    /// Executes one statement.
    ///
    /// Returns the value the statement produced, if any. Side effects made
    /// before an error are kept.
    pub fn execute(&mut self, statement: &Stmt) -> Result<Option<Value>, Error> {
        eval_statement(self, statement)
    }

    /// Executes the root block of a parsed program.
    pub fn execute_program(&mut self, program: &BlockStmt) -> Result<Option<Value>, Error> {
        debug!(statements = program.body.len(), "executing program");

        eval_block(self, program)
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of program output.
    pub fn write_line(&mut self, text: &str, position: &Position) -> Result<(), Error> {
        writeln!(self.output, "{}", text)
            .and_then(|_| self.output.flush())
            .map_err(|error| io_error(error, position))
    }

    /// Reads one line of input without its line terminator.
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, position: &Position) -> Result<Option<String>, Error> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|error| io_error(error, position))?;

        if read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}

fn io_error(error: std::io::Error, position: &Position) -> Error {
    Error::new(
        ErrorImpl::Io {
            message: error.to_string(),
        },
        position.clone(),
    )
}
