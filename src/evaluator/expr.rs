use std::io::{BufRead, Write};

use tracing::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{AssignmentExpr, BinaryExpr, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position,
};

use super::{evaluator::Evaluator, value::Value};

pub fn eval_expression<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    expression: &Expr,
) -> Result<Value, Error> {
    match expression {
        Expr::Number(expr) => Ok(Value::Float(expr.value)),
        Expr::String(expr) => Ok(Value::String(expr.value.clone())),
        Expr::Boolean(expr) => Ok(Value::Bool(expr.value)),
        Expr::Symbol(expr) => Ok(evaluator
            .environment
            .get(&expr.value, &expr.span.start)?
            .value
            .clone()),
        Expr::Binary(expr) => eval_binary(evaluator, expr),
        Expr::Prefix(expr) => eval_prefix(evaluator, expr),
        Expr::Assignment(expr) => eval_assignment(evaluator, expr),
    }
}

fn eval_binary<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    expr: &BinaryExpr,
) -> Result<Value, Error> {
    let operator = &expr.operator;
    let position = &operator.span.start;

    if operator.kind == TokenKind::DotDot {
        return Err(unsupported_operator(expr.operator.value.clone(), position));
    }

    let left = eval_expression(evaluator, &expr.left)?;
    let right = eval_expression(evaluator, &expr.right)?;

    trace!(%left, operator = %operator.value, %right, "binary");

    match operator.kind {
        TokenKind::And => return Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        TokenKind::Or => return Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
        _ => {}
    }

    if let (Value::String(left), Value::String(right)) = (&left, &right) {
        return match operator.kind {
            TokenKind::Plus => Ok(Value::String(format!("{}{}", left, right))),
            _ => Err(Error::new(
                ErrorImpl::InvalidStringOperation {
                    operator: operator.value.clone(),
                },
                position.clone(),
            )),
        };
    }

    let left = left.as_f64(&expr.left.get_span().start)?;
    let right = right.as_f64(&expr.right.get_span().start)?;

    match operator.kind {
        TokenKind::Plus => Ok(Value::Float(left + right)),
        TokenKind::Dash => Ok(Value::Float(left - right)),
        TokenKind::Star => Ok(Value::Float(left * right)),
        TokenKind::Slash | TokenKind::Percent if right == 0.0 => {
            Err(Error::new(ErrorImpl::DivisionByZero, position.clone()))
        }
        TokenKind::Slash => Ok(Value::Float(left / right)),
        TokenKind::Percent => Ok(Value::Float(left % right)),
        TokenKind::Less => Ok(Value::Bool(left < right)),
        TokenKind::LessEquals => Ok(Value::Bool(left <= right)),
        TokenKind::Greater => Ok(Value::Bool(left > right)),
        TokenKind::GreaterEquals => Ok(Value::Bool(left >= right)),
        TokenKind::Equals => Ok(Value::Bool(left == right)),
        TokenKind::NotEquals => Ok(Value::Bool(left != right)),
        _ => Err(unsupported_operator(operator.value.clone(), position)),
    }
}

fn eval_prefix<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    expr: &PrefixExpr,
) -> Result<Value, Error> {
    if expr.operator.kind != TokenKind::Dash {
        return Err(unsupported_operator(
            expr.operator.value.clone(),
            &expr.operator.span.start,
        ));
    }

    match eval_expression(evaluator, &expr.right_expr)? {
        // `i64::MIN` has no negation in range.
        Value::Int(value) => Ok(value
            .checked_neg()
            .map(Value::Int)
            .unwrap_or(Value::Float(-(value as f64)))),
        Value::Float(value) => Ok(Value::Float(-value)),
        other => Err(Error::new(
            ErrorImpl::TypeCoercion {
                value: other.to_string(),
            },
            expr.right_expr.get_span().start.clone(),
        )),
    }
}

/// `=`, `+=` and `-=` all overwrite the target with the right-hand side.
fn eval_assignment<R: BufRead, W: Write>(
    evaluator: &mut Evaluator<R, W>,
    expr: &AssignmentExpr,
) -> Result<Value, Error> {
    let symbol = match expr.assignee.as_ref() {
        Expr::Symbol(symbol) => symbol,
        other => {
            return Err(Error::new(
                ErrorImpl::InvalidAssignmentTarget,
                other.get_span().start.clone(),
            ))
        }
    };

    let value = eval_expression(evaluator, &expr.value)?;
    evaluator
        .environment
        .assign(&symbol.value, value.clone(), &symbol.span.start)?;

    Ok(value)
}

fn unsupported_operator(operator: String, position: &Position) -> Error {
    Error::new(ErrorImpl::UnsupportedOperator { operator }, position.clone())
}
