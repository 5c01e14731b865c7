use tracing::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignmentExpr, BinaryExpr, BooleanExpr, NumberExpr, PrefixExpr, StringExpr,
            SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud_fn) => *nud_fn,
        None => return Err(parser.unexpected_token()),
    };

    let mut left = nud_fn(parser)?;

    // While the current token binds tighter than `bp`, fold it into `left`.
    // Strict comparison keeps equal-precedence chains left-associative.
    while parser.current_binding_power() > bp {
        let token_kind = parser.current_token_kind();
        let led_fn = match parser.get_led_lookup().get(&token_kind) {
            Some(led_fn) => *led_fn,
            None => return Err(parser.unexpected_token()),
        };

        let token_bp = parser.current_binding_power();
        trace!(operator = %token_kind, ?token_bp, "infix");
        left = led_fn(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance().clone();
            match token.value.parse::<f64>() {
                Ok(value) => Ok(Expr::Number(NumberExpr { value, span: token.span })),
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                )),
            }
        }
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            match token.value.as_str() {
                "true" => Ok(Expr::Boolean(BooleanExpr { value: true, span: token.span })),
                "false" => Ok(Expr::Boolean(BooleanExpr { value: false, span: token.span })),
                _ => Ok(Expr::Symbol(SymbolExpr { value: token.value, span: token.span })),
            }
        }
        TokenKind::String => {
            let token = parser.advance().clone();
            Ok(Expr::String(StringExpr { value: token.value, span: token.span }))
        }
        _ => Err(parser.unexpected_token()),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator,
        right_expr: Box::new(rhs),
    }))
}

pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let rhs = parse_expr(parser, bp)?;

    Ok(Expr::Assignment(AssignmentExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: rhs.get_span().end.clone(),
        },
        assignee: Box::new(left),
        operator,
        value: Box::new(rhs),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
