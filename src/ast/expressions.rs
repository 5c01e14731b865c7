use crate::{lexer::tokens::Token, Span};

use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents a numeric literal. Every number literal is a float.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

/// String Expression
/// Represents a string literal, escapes already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

/// Boolean Expression
/// Produced for the identifiers `true` and `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

/// Symbol Expression
/// Represents a variable reference.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

// COMPLEX

/// Binary Expression
/// Represents an infix operation between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Prefix Expression
/// Represents a prefix operation (`-x`).
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: Box<Expr>,
    pub span: Span,
}

/// Assignment Expression
/// `=`, `+=` and `-=` all produce this node; the operator token is kept for
/// diagnostics only.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub operator: Token,
    pub value: Box<Expr>,
    pub span: Span,
}
