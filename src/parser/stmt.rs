use tracing::trace;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        statements::{
            BlockStmt, ExpressionStmt, FnDeclStmt, IfStmt, PrintStmt, ReadStmt, ReturnStmt,
            VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        trace!(keyword = %parser.current_token_kind(), "statement");
        return stmt_fn(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt {
        span: Span {
            start: expression.get_span().start.clone(),
            end: parser.get_previous_end(),
        },
        expression,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();
    let is_constant = start_token.kind == TokenKind::Const;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected identifier during variable declaration"),
        },
        parser.get_position(),
    );
    let variable_name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let explicit_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser, BindingPower::Default)?)
    } else {
        None
    };

    let assigned_value = if parser.current_token_kind() != TokenKind::Semicolon {
        parser.expect(TokenKind::Assignment)?;
        Some(parse_expr(parser, BindingPower::Assignment)?)
    } else if explicit_type.is_none() {
        return Err(Error::new(ErrorImpl::ExpectedExplicitValue, parser.get_position()));
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    if is_constant && assigned_value.is_none() {
        return Err(Error::new(
            ErrorImpl::ConstantWithoutValue { variable: variable_name },
            start_token.span.start,
        ));
    }

    Ok(Stmt::VarDecl(VarDeclStmt {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.get_previous_end(),
        },
        is_constant,
        identifier: variable_name,
        assigned_value,
        explicit_type,
    }))
}

/// `( expr )`, as used by `if`, `while`, `print` and `read`.
fn parse_parenthesised_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_parenthesised_expr(parser)?;
    let consequence = parse_block(parser)?;

    let alternative = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    // The whole construct is terminated by a semicolon, even after a block.
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::If(IfStmt {
        condition,
        consequence,
        alternative,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_parenthesised_expr(parser)?;
    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let expression = parse_parenthesised_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Print(PrintStmt {
        expression,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    }))
}

pub fn parse_read_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let target = parse_parenthesised_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Read(ReadStmt {
        target,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    }))
}

/// `{ stmt* }`. Running out of tokens before the closing brace is fatal.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(Error::new(ErrorImpl::UnexpectedEndOfInput, parser.get_position()));
        }
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body: statements,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    })
}

/// `fn name(a, b): Type { ... }`
///
/// Not registered in the statement table; functions are never executed.
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let identifier = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            parameters.push(parser.expect(TokenKind::Identifier)?.value);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser, BindingPower::Default)?)
    } else {
        None
    };

    let body = parse_block(parser)?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
        identifier,
        parameters,
        return_type,
        body,
    }))
}

/// `return [expr];`
///
/// Not registered in the statement table; see `parse_fn_decl_stmt`.
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    }))
}
