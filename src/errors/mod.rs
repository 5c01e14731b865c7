//! Error types shared by the lexer, parser and evaluator.
//!
//! - Error structures with source position information
//! - Specific error variants for each phase
//! - Error names and suggestions for reporting

pub mod errors;

#[cfg(test)]
mod tests;
