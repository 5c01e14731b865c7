/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Stmt`, `Expr` and `Type` sum types
/// - expressions: Node definitions for expressions
/// - statements: Node definitions for statements
/// - types: Node definitions for type annotations
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
