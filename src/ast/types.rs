//! Type annotations.
//!
//! Types only appear in declarations. They are never checked; the evaluator
//! uses them to pick the kind and default value of a new variable.

use crate::Position;

use super::ast::Type;

/// A named type such as `int` or `string`, resolved by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolType {
    pub name: String,
    pub position: Position,
}

/// `[]T`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub underlying: Box<Type>,
    pub position: Position,
}
