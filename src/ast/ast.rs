use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, BooleanExpr, NumberExpr, PrefixExpr, StringExpr, SymbolExpr,
    },
    statements::{
        BlockStmt, ExpressionStmt, FnDeclStmt, IfStmt, PrintStmt, ReadStmt, ReturnStmt,
        VarDeclStmt, WhileStmt,
    },
    types::{ArrayType, SymbolType},
};

/// Statement
///
/// Every statement the parser can produce. The evaluator matches on this
/// exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    Expression(ExpressionStmt),
    VarDecl(VarDeclStmt),
    If(IfStmt),
    While(WhileStmt),
    Print(PrintStmt),
    Read(ReadStmt),
    FnDecl(FnDeclStmt),
    Return(ReturnStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Block(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::Print(stmt) => &stmt.span,
            Stmt::Read(stmt) => &stmt.span,
            Stmt::FnDecl(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
        }
    }

    /// Name used in diagnostics and traces.
    pub fn get_name(&self) -> &'static str {
        match self {
            Stmt::Block(_) => "block",
            Stmt::Expression(_) => "expression",
            Stmt::VarDecl(_) => "variable declaration",
            Stmt::If(_) => "if",
            Stmt::While(_) => "while",
            Stmt::Print(_) => "print",
            Stmt::Read(_) => "read",
            Stmt::FnDecl(_) => "function declaration",
            Stmt::Return(_) => "return",
        }
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    String(StringExpr),
    Boolean(BooleanExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Assignment(AssignmentExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Boolean(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Assignment(expr) => &expr.span,
        }
    }
}

/// Renders the expression fully parenthesised, e.g. `(1 + (2 * 3))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(expr) => write!(f, "{}", expr.value),
            Expr::String(expr) => write!(f, "{:?}", expr.value),
            Expr::Boolean(expr) => write!(f, "{}", expr.value),
            Expr::Symbol(expr) => write!(f, "{}", expr.value),
            Expr::Binary(expr) => {
                write!(f, "({} {} {})", expr.left, expr.operator.value, expr.right)
            }
            Expr::Prefix(expr) => write!(f, "({}{})", expr.operator.value, expr.right_expr),
            Expr::Assignment(expr) => {
                write!(f, "({} {} {})", expr.assignee, expr.operator.value, expr.value)
            }
        }
    }
}

/// Type annotation
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Symbol(SymbolType),
    Array(ArrayType),
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Symbol(symbol) => write!(f, "{}", symbol.name),
            Type::Array(array) => write!(f, "[]{}", array.underlying),
        }
    }
}
