//! Lexical analysis module.
//!
//! Converts source text into the token stream consumed by the parser:
//!
//! - Tokenization using ordered regex patterns
//! - Recognition of keywords, identifiers, literals and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
