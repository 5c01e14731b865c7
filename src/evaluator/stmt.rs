use std::io::{BufRead, Write};

use tracing::trace;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        statements::{BlockStmt, IfStmt, ReadStmt, VarDeclStmt, WhileStmt},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    evaluator::Evaluator,
    expr::eval_expression,
    value::{Value, ValueKind},
};

pub fn eval_statement<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    statement: &Stmt,
) -> Result<Option<Value>, Error> {
    trace!(statement = statement.get_name(), "execute");

    match statement {
        Stmt::Block(block) => eval_block(evaluator, block),
        Stmt::Expression(stmt) => eval_expression(evaluator, &stmt.expression).map(Some),
        Stmt::VarDecl(stmt) => eval_var_decl(evaluator, stmt),
        Stmt::If(stmt) => eval_if(evaluator, stmt),
        Stmt::While(stmt) => eval_while(evaluator, stmt),
        Stmt::Print(stmt) => {
            let value = eval_expression(evaluator, &stmt.expression)?;
            evaluator.write_line(&value.to_string(), &stmt.span.start)?;
            Ok(None)
        }
        Stmt::Read(stmt) => eval_read(evaluator, stmt),
        Stmt::FnDecl(_) | Stmt::Return(_) => Err(Error::new(
            ErrorImpl::UnsupportedStatement {
                statement: statement.get_name().to_string(),
            },
            statement.get_span().start.clone(),
        )),
    }
}

/// Runs every statement in order; the block's value is its last statement's.
pub fn eval_block<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    block: &BlockStmt,
) -> Result<Option<Value>, Error> {
    let mut result = None;
    for statement in block.iter() {
        result = eval_statement(evaluator, statement)?;
    }

    Ok(result)
}

fn eval_var_decl<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    stmt: &VarDeclStmt,
) -> Result<Option<Value>, Error> {
    let kind = match &stmt.explicit_type {
        Some(type_) => ValueKind::from_type(type_)?,
        None => ValueKind::Float,
    };

    // The initializer is stored as evaluated, even when its kind differs.
    let value = match &stmt.assigned_value {
        Some(expr) => eval_expression(evaluator, expr)?,
        None => kind.zero_value(),
    };

    trace!(name = %stmt.identifier, %kind, %value, "declare");
    evaluator.environment.declare(&stmt.identifier, kind, value);

    Ok(None)
}

fn eval_if<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    stmt: &IfStmt,
) -> Result<Option<Value>, Error> {
    if eval_expression(evaluator, &stmt.condition)?.is_truthy() {
        eval_block(evaluator, &stmt.consequence)
    } else if let Some(alternative) = &stmt.alternative {
        eval_block(evaluator, alternative)
    } else {
        Ok(None)
    }
}

fn eval_while<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    stmt: &WhileStmt,
) -> Result<Option<Value>, Error> {
    let mut result = None;
    while eval_expression(evaluator, &stmt.condition)?.is_truthy() {
        result = eval_block(evaluator, &stmt.body)?;
    }

    Ok(result)
}

fn eval_read<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    stmt: &ReadStmt,
) -> Result<Option<Value>, Error> {
    // The line is consumed before the target is checked.
    let line = evaluator.read_line(&stmt.span.start)?;

    let (name, position) = match &stmt.target {
        Expr::Symbol(symbol) => (&symbol.value, &symbol.span.start),
        other => {
            return Err(Error::new(
                ErrorImpl::InvalidReadTarget,
                other.get_span().start.clone(),
            ))
        }
    };

    let kind = evaluator.environment.get(name, position)?.kind;

    let value = match line {
        Some(line) => kind.parse_input(&line, &stmt.span.start)?,
        None => {
            return Err(Error::new(
                ErrorImpl::InvalidInput {
                    input: String::new(),
                    expected: kind.to_string(),
                },
                stmt.span.start.clone(),
            ))
        }
    };

    evaluator
        .environment
        .assign(name, value.clone(), position)?;

    Ok(Some(value))
}
