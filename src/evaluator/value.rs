use std::fmt::Display;

use crate::{
    ast::ast::Type,
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Runtime value. Copied on read and assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
}

impl Value {
    /// Truthiness used by `if`, `while`, `&&` and `||`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(value) => *value,
            Value::Int(value) => *value != 0,
            Value::Float(value) => *value != 0.0,
            Value::String(value) => !value.is_empty(),
        }
    }

    /// Numeric view of the value. Only `Int` and `Float` convert.
    pub fn as_f64(&self, position: &Position) -> Result<f64, Error> {
        match self {
            Value::Int(value) => Ok(*value as f64),
            Value::Float(value) => Ok(*value),
            Value::String(_) | Value::Bool(_) => Err(Error::new(
                ErrorImpl::TypeCoercion {
                    value: self.to_string(),
                },
                position.clone(),
            )),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::String(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// The kind a variable was declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Float,
    String,
    Bool,
}

impl ValueKind {
    /// Resolves a declared type annotation.
    ///
    /// Only symbol types are inspected. Arrays have no runtime
    /// representation and keep the `float` default.
    pub fn from_type(type_: &Type) -> Result<ValueKind, Error> {
        match type_ {
            Type::Symbol(symbol) => match symbol.name.as_str() {
                "int" => Ok(ValueKind::Int),
                "float" => Ok(ValueKind::Float),
                "string" => Ok(ValueKind::String),
                "bool" => Ok(ValueKind::Bool),
                _ => Err(Error::new(
                    ErrorImpl::UnknownType {
                        type_: symbol.name.clone(),
                    },
                    symbol.position.clone(),
                )),
            },
            Type::Array(_) => Ok(ValueKind::Float),
        }
    }

    pub fn zero_value(&self) -> Value {
        match self {
            ValueKind::Int => Value::Int(0),
            ValueKind::Float => Value::Float(0.0),
            ValueKind::String => Value::String(String::new()),
            ValueKind::Bool => Value::Bool(false),
        }
    }

    /// Converts one line of user input into a value of this kind.
    ///
    /// `line` must already have its line terminator removed. Strings are
    /// taken verbatim; the other kinds ignore surrounding whitespace.
    pub fn parse_input(&self, line: &str, position: &Position) -> Result<Value, Error> {
        let invalid = || {
            Error::new(
                ErrorImpl::InvalidInput {
                    input: line.to_string(),
                    expected: self.to_string(),
                },
                position.clone(),
            )
        };

        let trimmed = line.trim();
        match self {
            ValueKind::Int => trimmed.parse::<i64>().map(Value::Int).map_err(|_| invalid()),
            ValueKind::Float => trimmed.parse::<f64>().map(Value::Float).map_err(|_| invalid()),
            ValueKind::String => Ok(Value::String(line.to_string())),
            ValueKind::Bool => match trimmed {
                "true" | "True" | "TRUE" | "t" | "T" | "1" => Ok(Value::Bool(true)),
                "false" | "False" | "FALSE" | "f" | "F" | "0" => Ok(Value::Bool(false)),
                _ => Err(invalid()),
            },
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Int => write!(f, "int"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Bool => write!(f, "bool"),
        }
    }
}
