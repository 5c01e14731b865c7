use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// An error raised while lexing, parsing or evaluating, with the source
/// position it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Whether the error was raised before evaluation started.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnrecognisedToken { .. }
                | ErrorImpl::UnexpectedToken { .. }
                | ErrorImpl::UnexpectedTokenDetailed { .. }
                | ErrorImpl::UnexpectedEndOfInput
                | ErrorImpl::NumberParseError { .. }
                | ErrorImpl::ExpectedExplicitValue
                | ErrorImpl::ConstantWithoutValue { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ExpectedExplicitValue => "ExpectedExplicitValue",
            ErrorImpl::ConstantWithoutValue { .. } => "ConstantWithoutValue",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::InvalidStringOperation { .. } => "InvalidStringOperation",
            ErrorImpl::TypeCoercion { .. } => "TypeCoercion",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::InvalidReadTarget => "InvalidReadTarget",
            ErrorImpl::InvalidInput { .. } => "InvalidInput",
            ErrorImpl::UnsupportedOperator { .. } => "UnsupportedOperator",
            ErrorImpl::UnsupportedStatement { .. } => "UnsupportedStatement",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEndOfInput => {
                ErrorTip::Suggestion(String::from("Is a closing `}` missing?"))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::ExpectedExplicitValue => ErrorTip::Suggestion(String::from(
                "Expected explicit value when no type is given",
            )),
            ErrorImpl::ConstantWithoutValue { variable } => ErrorTip::Suggestion(format!(
                "Constant `{}` must be given a value",
                variable
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::UnknownType { type_ } => ErrorTip::Suggestion(format!(
                "Unknown type `{}`, expected one of int, float, string or bool",
                type_
            )),
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::InvalidStringOperation { .. } => {
                ErrorTip::Suggestion(String::from("Strings only support `+`"))
            }
            ErrorImpl::TypeCoercion { value } => {
                ErrorTip::Suggestion(format!("`{}` is not a number", value))
            }
            ErrorImpl::InvalidAssignmentTarget => {
                ErrorTip::Suggestion(String::from("Only variables can be assigned to"))
            }
            ErrorImpl::InvalidReadTarget => {
                ErrorTip::Suggestion(String::from("Only variables can be read into"))
            }
            ErrorImpl::InvalidInput { expected, .. } => {
                ErrorTip::Suggestion(format!("Expected a value of type `{}`", expected))
            }
            ErrorImpl::UnsupportedOperator { .. } => ErrorTip::None,
            ErrorImpl::UnsupportedStatement { .. } => ErrorTip::Suggestion(String::from(
                "This statement can be parsed, but not executed",
            )),
            ErrorImpl::Io { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexing and parsing
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("could not parse expression at token {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input while parsing block")]
    UnexpectedEndOfInput,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("cannot declare variable without an explicit type")]
    ExpectedExplicitValue,
    #[error("cannot declare constant {variable:?} without a value")]
    ConstantWithoutValue { variable: String },

    // Evaluation
    #[error("undefined variable: {variable}")]
    VariableNotDeclared { variable: String },
    #[error("unknown type: {type_}")]
    UnknownType { type_: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid operation for strings: {operator}")]
    InvalidStringOperation { operator: String },
    #[error("cannot convert {value} to number")]
    TypeCoercion { value: String },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("invalid read target")]
    InvalidReadTarget,
    #[error("invalid input {input:?} for type {expected}")]
    InvalidInput { input: String, expected: String },
    #[error("unsupported operator: {operator}")]
    UnsupportedOperator { operator: String },
    #[error("unsupported statement: {statement}")]
    UnsupportedStatement { statement: String },
    #[error("i/o error: {message}")]
    Io { message: String },
}
