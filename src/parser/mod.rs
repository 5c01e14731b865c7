//! Parser module for building the Abstract Syntax Tree (AST).
//!
//! Transforms the token stream into a tree of statements. Expressions are
//! parsed with a Pratt parser: NUD (null denotation) and LED (left
//! denotation) handlers looked up by token kind, with binding powers deciding
//! precedence. Type annotations use a second, smaller set of tables, and
//! statements dispatch on their leading keyword.
//!
//! Parsing is fail-fast: the first error aborts the parse.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
