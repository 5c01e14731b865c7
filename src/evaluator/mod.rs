//! Tree-walking evaluator.
//!
//! Executes the AST directly against a single flat environment of tagged
//! values:
//!
//! - `evaluator`: session state and I/O
//! - `stmt`: statement execution and control flow
//! - `expr`: expression evaluation, coercion and operators
//! - `value`: runtime values and declared kinds
//! - `environment`: variable storage

pub mod environment;
pub mod evaluator;
pub mod expr;
pub mod stmt;
pub mod value;

#[cfg(test)]
mod tests;
